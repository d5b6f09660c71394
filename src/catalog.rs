//! Gate catalog: the closed vocabulary of named sector-wide operations.
//!
//! Each entry pairs a unitary with a pattern rule that says which local
//! offsets of an 8-qubit sector it touches and in what order. The
//! interpreter only reads this table, so adding a gate is a new row here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlenumError, Result};
use crate::gate::Gate;
use crate::params::ParameterVector;

/// Local offset of the anchor qubit inside a sector.
pub const ANCHOR: usize = 7;

/// Tag for every catalog entry. Discriminants index [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    Identity,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    SGate,
    SX,
    Cnot,
    Cy,
    Cz,
    TGate,
    Way,
    Rx,
    Rz,
    Phase,
    URot,
    Swap,
    ISwap,
    Rxx,
    Ryy,
    Rzz,
    Rxy,
    Toffoli,
    Fredkin,
}

/// Gate families, A through F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateFamily {
    Static,
    Clifford,
    Rotational,
    Swap,
    Entangling,
    ThreeQubit,
}

/// Where the anchor sits in a three-qubit operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRole {
    /// `[a, b, anchor]`: the pair controls, the anchor is the target.
    Last,
    /// `[anchor, a, b]`: the anchor controls the pair.
    First,
}

/// Which local offsets a gate is applied to, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Single-qubit gate on offsets `0..count`.
    Broadcast { count: usize },
    /// Two-qubit gate on `(i, i+1)` for `i in 0..count`.
    Chain { count: usize },
    /// Two-qubit gate on `(0,1), (2,3), (4,5)`.
    DisjointPairs,
    /// Three-qubit gate on each pair of the configured [`Pairing`] plus the anchor.
    Anchored(AnchorRole),
}

/// Pair sequence stepped through by anchored three-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// `(0,1), (2,3), (4,5)`
    #[default]
    DisjointPairs,
    /// `(i, i+1)` for `i in 0..6`
    Chain,
}

impl Pairing {
    pub fn pairs(self) -> Vec<(usize, usize)> {
        match self {
            Pairing::DisjointPairs => (0..6).step_by(2).map(|i| (i, i + 1)).collect(),
            Pairing::Chain => (0..6).map(|i| (i, i + 1)).collect(),
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSpec {
    pub kind: GateKind,
    pub name: &'static str,
    /// Alternate spelling accepted by the parser.
    pub alias: Option<&'static str>,
    pub family: GateFamily,
    /// Qubits per placement.
    pub arity: usize,
    /// Real parameters consumed per placement.
    pub param_arity: usize,
    pub pattern: Pattern,
}

const fn spec(
    kind: GateKind,
    name: &'static str,
    alias: Option<&'static str>,
    family: GateFamily,
    arity: usize,
    param_arity: usize,
    pattern: Pattern,
) -> GateSpec {
    GateSpec {
        kind,
        name,
        alias,
        family,
        arity,
        param_arity,
        pattern,
    }
}

use GateFamily as F;
use GateKind as K;

const BROADCAST_7: Pattern = Pattern::Broadcast { count: 7 };
const BROADCAST_8: Pattern = Pattern::Broadcast { count: 8 };
const CHAIN_6: Pattern = Pattern::Chain { count: 6 };

/// The catalog, in [`GateKind`] discriminant order.
pub static CATALOG: [GateSpec; 24] = [
    spec(K::Identity, "IDENTITY", None, F::Static, 1, 0, BROADCAST_7),
    spec(K::Hadamard, "HADAMARD", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::PauliX, "PAULI_X", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::PauliY, "PAULI_Y", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::PauliZ, "PAULI_Z", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::SGate, "S_GATE", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::SX, "SX", None, F::Clifford, 1, 0, BROADCAST_7),
    spec(K::Cnot, "CNOT", Some("CX"), F::Clifford, 2, 0, CHAIN_6),
    spec(K::Cy, "CY", None, F::Clifford, 2, 0, CHAIN_6),
    spec(K::Cz, "CZ", None, F::Clifford, 2, 0, CHAIN_6),
    spec(K::TGate, "T_GATE", None, F::Rotational, 1, 0, BROADCAST_7),
    spec(K::Way, "WAY", Some("RY"), F::Rotational, 1, 1, BROADCAST_8),
    spec(K::Rx, "RX", None, F::Rotational, 1, 1, BROADCAST_7),
    spec(K::Rz, "RZ", None, F::Rotational, 1, 1, BROADCAST_7),
    spec(K::Phase, "PHASE", None, F::Rotational, 1, 1, BROADCAST_7),
    spec(K::URot, "U_ROT", None, F::Rotational, 1, 3, BROADCAST_7),
    spec(K::Swap, "SWAP", None, F::Swap, 2, 0, Pattern::DisjointPairs),
    spec(K::ISwap, "ISWAP", None, F::Swap, 2, 0, Pattern::DisjointPairs),
    spec(K::Rxx, "RXX", None, F::Entangling, 2, 1, CHAIN_6),
    spec(K::Ryy, "RYY", None, F::Entangling, 2, 1, CHAIN_6),
    spec(K::Rzz, "RZZ", None, F::Entangling, 2, 1, CHAIN_6),
    spec(K::Rxy, "RXY", None, F::Entangling, 2, 1, CHAIN_6),
    spec(K::Toffoli, "TOFFOLI", Some("CCX"), F::ThreeQubit, 3, 0, Pattern::Anchored(AnchorRole::Last)),
    spec(K::Fredkin, "FRED_KIN", Some("CSWAP"), F::ThreeQubit, 3, 0, Pattern::Anchored(AnchorRole::First)),
];

/// Resolve a case-sensitive gate name or alias.
pub fn lookup(name: &str) -> Result<&'static GateSpec> {
    CATALOG
        .iter()
        .find(|s| s.name == name || s.alias == Some(name))
        .ok_or_else(|| PlenumError::UnknownGate(name.to_string()))
}

/// Every accepted spelling, canonical names first.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .map(|s| s.name)
        .chain(CATALOG.iter().filter_map(|s| s.alias))
}

impl GateKind {
    pub fn spec(self) -> &'static GateSpec {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl FromStr for GateKind {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        lookup(s).map(|spec| spec.kind)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl GateSpec {
    /// Absolute operand lists for a sector starting at qubit `base`.
    pub fn placements(&self, base: usize, pairing: Pairing) -> Vec<Vec<usize>> {
        let local: Vec<Vec<usize>> = match self.pattern {
            Pattern::Broadcast { count } => (0..count).map(|i| vec![i]).collect(),
            Pattern::Chain { count } => (0..count).map(|i| vec![i, i + 1]).collect(),
            Pattern::DisjointPairs => Pairing::DisjointPairs
                .pairs()
                .into_iter()
                .map(|(a, b)| vec![a, b])
                .collect(),
            Pattern::Anchored(role) => pairing
                .pairs()
                .into_iter()
                .map(|(a, b)| match role {
                    AnchorRole::Last => vec![a, b, ANCHOR],
                    AnchorRole::First => vec![ANCHOR, a, b],
                })
                .collect(),
        };
        local
            .into_iter()
            .map(|locs| locs.into_iter().map(|l| base + l).collect())
            .collect()
    }

    /// Build the unitary for one placement.
    ///
    /// Parameterized gates read `params` at the absolute index of their
    /// first operand.
    pub fn gate(&self, params: &ParameterVector, locs: &[usize]) -> Result<Gate> {
        let theta = if self.param_arity > 0 {
            params.get(locs[0])?
        } else {
            0.0
        };
        Ok(match self.kind {
            K::Identity => Gate::I,
            K::Hadamard => Gate::H,
            K::PauliX => Gate::X,
            K::PauliY => Gate::Y,
            K::PauliZ => Gate::Z,
            K::SGate => Gate::S,
            K::SX => Gate::SqrtX,
            K::Cnot => Gate::CNOT,
            K::Cy => Gate::CY,
            K::Cz => Gate::CZ,
            K::TGate => Gate::T,
            K::Way => Gate::Ry(theta),
            K::Rx => Gate::Rx(theta),
            K::Rz => Gate::Rz(theta),
            K::Phase => Gate::Phase(theta),
            // three angles derived from the single per-qubit parameter
            K::URot => Gate::Rot(theta, theta / 2.0, theta / 3.0),
            K::Swap => Gate::SWAP,
            K::ISwap => Gate::ISWAP,
            K::Rxx => Gate::IsingXX(theta),
            K::Ryy => Gate::IsingYY(theta),
            K::Rzz => Gate::IsingZZ(theta),
            K::Rxy => Gate::IsingXY(theta),
            K::Toffoli => Gate::Toffoli,
            K::Fredkin => Gate::CSWAP,
        })
    }
}
