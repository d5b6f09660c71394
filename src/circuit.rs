//! Circuit interpreter: runs a gate program against one sector.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog::GateKind;
use crate::config::PlenumConfig;
use crate::error::Result;
use crate::gate::Gate;
use crate::instruct::apply_gate;
use crate::params::ParameterVector;
use crate::sector::Sector;
use crate::state::State;

/// Ordered list of catalog gates. Order is application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub gates: Vec<GateKind>,
}

impl Program {
    pub fn new(gates: Vec<GateKind>) -> Self {
        Program { gates }
    }

    /// Resolve every name up front; the first unknown name fails with
    /// `UnknownGate` before anything is simulated.
    ///
    /// # Example
    /// ```
    /// use plenum_rs::circuit::Program;
    /// use plenum_rs::catalog::GateKind;
    ///
    /// let program = Program::parse(&["HADAMARD", "CX"]).unwrap();
    /// assert_eq!(program.gates, vec![GateKind::Hadamard, GateKind::Cnot]);
    /// assert!(Program::parse(&["BOGUS_GATE"]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let gates = names
            .iter()
            .map(|name| name.as_ref().parse::<GateKind>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Program { gates })
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.gates.iter().map(|g| g.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Execute `program` on `sector` from a fresh |0...0> register.
///
/// When `stimulus` is present, `Ry(stimulus * π)` is applied to the
/// sector's first qubit before the program. Each instruction is expanded
/// through its catalog pattern and applied placement by placement; the
/// first error stops execution.
///
/// Normalization is checked after every instruction, or once at the end
/// when `config.check_every_instruction` is off. Non-finite parameters or
/// stimulus surface here as `NumericalDrift`.
pub fn run(
    program: &Program,
    sector: Sector,
    params: &ParameterVector,
    stimulus: Option<f64>,
    config: &PlenumConfig,
) -> Result<State> {
    params.ensure_covers(config.num_qubits)?;
    debug!(%sector, %program, ?stimulus, "executing program");

    let mut state = State::zero_state(config.num_qubits);
    let base = sector.base();

    if let Some(value) = stimulus {
        apply_gate(&mut state, &Gate::Ry(value * PI), &[base]);
        if config.check_every_instruction {
            state.check_normalized("stimulus", config.drift_tolerance)?;
        }
    }

    for kind in &program.gates {
        let spec = kind.spec();
        for locs in spec.placements(base, config.three_qubit_pairing) {
            let gate = spec.gate(params, &locs)?;
            trace!(%gate, ?locs, "apply");
            apply_gate(&mut state, &gate, &locs);
        }
        if config.check_every_instruction {
            state.check_normalized(spec.name, config.drift_tolerance)?;
        }
    }

    if !config.check_every_instruction {
        state.check_normalized("program", config.drift_tolerance)?;
    }

    Ok(state)
}
