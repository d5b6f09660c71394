//! Host-facing facade: construction, program execution and tension readout.
//!
//! # Usage
//!
//! ```no_run
//! use plenum_rs::Plenum;
//!
//! let plenum = Plenum::new(24)?;
//! let probs = plenum.execute(&["HADAMARD", "CNOT"], "MIND", None, Some(0.5))?;
//! assert_eq!(probs.len(), 256);
//! let tension = plenum.tension()?;
//! println!("{} ({:.4})", tension.state, tension.delta);
//! # Ok::<(), plenum_rs::PlenumError>(())
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::circuit::{self, Program};
use crate::config::PlenumConfig;
use crate::error::Result;
use crate::json::request_from_json;
use crate::measure::probs;
use crate::params::ParameterVector;
use crate::sector::Sector;
use crate::tension::{self, TensionResult};

/// Simulator with a shared default parameter vector.
///
/// Every call builds and discards its own state vector, so calls never
/// observe each other. The default parameters sit behind a read-write lock:
/// executions snapshot them under a read lock and release it before
/// simulating, while `set_params`/`set_param` take the write lock.
/// Clones share the same parameter vector.
#[derive(Debug, Clone)]
pub struct Plenum {
    config: PlenumConfig,
    params: Arc<RwLock<ParameterVector>>,
}

impl Plenum {
    /// Register of `num_qubits` qubits with default configuration.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(PlenumConfig::with_qubits(num_qubits))
    }

    /// Parameters are drawn uniformly from `[param_low, param_high]`,
    /// seeded when `config.seed` is set.
    pub fn with_config(config: PlenumConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let params = ParameterVector::uniform(
            config.num_qubits,
            config.param_low,
            config.param_high,
            &mut rng,
        );
        Self::with_params(config, params)
    }

    /// Use an explicit default parameter vector.
    pub fn with_params(config: PlenumConfig, params: ParameterVector) -> Result<Self> {
        config.validate()?;
        params.ensure_covers(config.num_qubits)?;
        info!(
            qubits = config.num_qubits,
            pairing = ?config.three_qubit_pairing,
            "register initialized"
        );
        Ok(Plenum {
            config,
            params: Arc::new(RwLock::new(params)),
        })
    }

    pub fn config(&self) -> &PlenumConfig {
        &self.config
    }

    pub fn num_qubits(&self) -> usize {
        self.config.num_qubits
    }

    /// Snapshot of the default parameters.
    pub fn params(&self) -> ParameterVector {
        self.params.read().clone()
    }

    /// Replace the default parameters.
    pub fn set_params(&self, params: ParameterVector) -> Result<()> {
        params.ensure_covers(self.config.num_qubits)?;
        *self.params.write() = params;
        Ok(())
    }

    /// Overwrite one default parameter.
    pub fn set_param(&self, index: usize, value: f64) -> Result<()> {
        self.params.write().set(index, value)
    }

    /// Run `gates` on `sector` and return the 256-outcome marginal of the
    /// sector (bit `i` of an outcome is local qubit `i`).
    ///
    /// `params_override` replaces the default parameters for this call only.
    pub fn execute<S: AsRef<str>>(
        &self,
        gates: &[S],
        sector: &str,
        params_override: Option<&ParameterVector>,
        stimulus: Option<f64>,
    ) -> Result<Vec<f64>> {
        let program = Program::parse(gates)?;
        let sector: Sector = sector.parse()?;
        self.execute_program(&program, sector, params_override, stimulus)
    }

    /// [`Plenum::execute`] for an already parsed program.
    pub fn execute_program(
        &self,
        program: &Program,
        sector: Sector,
        params_override: Option<&ParameterVector>,
        stimulus: Option<f64>,
    ) -> Result<Vec<f64>> {
        let snapshot;
        let params = match params_override {
            Some(p) => p,
            None => {
                snapshot = self.params();
                &snapshot
            }
        };
        let state = circuit::run(program, sector, params, stimulus, &self.config)?;
        Ok(probs(&state, Some(&sector.qubits())))
    }

    /// Execute a JSON request (see [`crate::json`]).
    pub fn execute_json(&self, json: &str) -> Result<Vec<f64>> {
        let request = request_from_json(json)?;
        self.execute_program(
            &request.program,
            request.sector,
            request.params.as_ref(),
            request.stimulus,
        )
    }

    /// Tension evaluation against the current default parameters, checked
    /// with the configured drift tolerance.
    pub fn tension(&self) -> Result<TensionResult> {
        tension::evaluate_with_tolerance(&self.params(), self.config.drift_tolerance)
    }
}
