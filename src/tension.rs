//! Tension evaluation across the three sector representatives.
//!
//! The fixed sub-circuit touches only the representatives (the last qubit
//! of each sector). Every other qubit stays |0>, so it is simulated on a
//! compact 3-qubit register whose local qubit `i` stands for the
//! representative of `Sector::ALL[i]`; the marginal is identical to the
//! one over the full register.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_DRIFT_TOLERANCE;
use crate::error::Result;
use crate::gate::Gate;
use crate::instruct::apply_gate;
use crate::measure::probs;
use crate::params::ParameterVector;
use crate::sector::Sector;
use crate::state::State;

/// Delta above which the register counts as intensified.
pub const INTENSIFICATION_THRESHOLD: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Equilibrium,
    Intensification,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Equilibrium => f.write_str("Equilibrium"),
            Classification::Intensification => f.write_str("Intensification"),
        }
    }
}

/// Scalar readout of one tension evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensionResult {
    #[serde(rename = "Delta")]
    pub delta: f64,
    #[serde(rename = "State")]
    pub state: Classification,
    /// `[m, b, s]`
    #[serde(rename = "Readout")]
    pub readout: [f64; 3],
}

impl TensionResult {
    pub fn m(&self) -> f64 {
        self.readout[0]
    }

    pub fn b(&self) -> f64 {
        self.readout[1]
    }

    pub fn s(&self) -> f64 {
        self.readout[2]
    }
}

/// Reduce an 8-outcome distribution to `[m, b, s]`.
///
/// `m`, `b` and `s` are the probabilities that outcome bit 2, 1 and 0 is set.
pub fn readout(p: &[f64]) -> [f64; 3] {
    let mass = |bit: usize| -> f64 {
        p.iter()
            .enumerate()
            .filter(|&(i, _)| i & (1 << bit) != 0)
            .map(|(_, &v)| v)
            .sum()
    };
    [mass(2), mass(1), mass(0)]
}

/// `((m - b)^2 + (b - s)^2) / 2`
pub fn delta(readout: [f64; 3]) -> f64 {
    let [m, b, s] = readout;
    ((m - b).powi(2) + (b - s).powi(2)) / 2.0
}

pub fn classify(delta: f64) -> Classification {
    if delta > INTENSIFICATION_THRESHOLD {
        Classification::Intensification
    } else {
        Classification::Equilibrium
    }
}

/// Run the fixed sub-circuit and reduce it to a [`TensionResult`].
///
/// Steps: `Ry(params[r])` on each representative, CNOT from the first to
/// the second, CNOT from the second to the third, then a Toffoli with the
/// first two as controls and the third as target. Normalization is checked
/// against [`DEFAULT_DRIFT_TOLERANCE`].
pub fn evaluate(params: &ParameterVector) -> Result<TensionResult> {
    evaluate_with_tolerance(params, DEFAULT_DRIFT_TOLERANCE)
}

/// [`evaluate`] with an explicit drift tolerance.
pub fn evaluate_with_tolerance(
    params: &ParameterVector,
    drift_tolerance: f64,
) -> Result<TensionResult> {
    let mut state = State::zero_state(Sector::ALL.len());
    for (local, sector) in Sector::ALL.iter().enumerate() {
        let theta = params.get(sector.representative())?;
        apply_gate(&mut state, &Gate::Ry(theta), &[local]);
    }
    apply_gate(&mut state, &Gate::CNOT, &[0, 1]);
    apply_gate(&mut state, &Gate::CNOT, &[1, 2]);
    apply_gate(&mut state, &Gate::Toffoli, &[0, 1, 2]);
    state.check_normalized("tension", drift_tolerance)?;

    let readout = readout(&probs(&state, Some(&[0, 1, 2])));
    let delta = delta(readout);
    let result = TensionResult {
        delta,
        state: classify(delta),
        readout,
    };
    debug!(delta, state = %result.state, ?readout, "tension evaluated");
    Ok(result)
}
