//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::Pairing;
use crate::error::{PlenumError, Result};
use crate::sector::{Sector, SECTOR_WIDTH};

/// Largest register the dense simulator accepts (2^32 amplitudes, 64 GiB).
pub const MAX_QUBITS: usize = 32;

/// Default allowed |norm^2 - 1| after an instruction.
pub const DEFAULT_DRIFT_TOLERANCE: f64 = 1e-9;

/// Smallest register holding all three sectors.
pub const MIN_QUBITS: usize = SECTOR_WIDTH * Sector::ALL.len();

/// Configuration for a [`crate::Plenum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlenumConfig {
    /// Register size in qubits.
    pub num_qubits: usize,
    /// Lower bound of the uniform parameter initialization range.
    pub param_low: f64,
    /// Upper bound of the uniform parameter initialization range.
    pub param_high: f64,
    /// Seed for deterministic parameter initialization.
    pub seed: Option<u64>,
    /// Allowed |norm^2 - 1| after each instruction.
    pub drift_tolerance: f64,
    /// Whether the interpreter checks normalization after every instruction.
    pub check_every_instruction: bool,
    /// Pair sequence for anchored three-qubit gates.
    pub three_qubit_pairing: Pairing,
}

impl Default for PlenumConfig {
    fn default() -> Self {
        Self {
            num_qubits: MIN_QUBITS,
            param_low: 0.1,
            param_high: 0.8,
            seed: None,
            drift_tolerance: DEFAULT_DRIFT_TOLERANCE,
            check_every_instruction: true,
            three_qubit_pairing: Pairing::DisjointPairs,
        }
    }
}

impl PlenumConfig {
    /// Default configuration with a different register size.
    pub fn with_qubits(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ..Default::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_size(self.num_qubits)?;

        if !self.param_low.is_finite() || !self.param_high.is_finite() {
            return Err(PlenumError::invalid_config(
                "param_low/param_high",
                "bounds must be finite",
            ));
        }
        if self.param_low > self.param_high {
            return Err(PlenumError::invalid_config(
                "param_low",
                format!("{} exceeds param_high {}", self.param_low, self.param_high),
            ));
        }
        if self.drift_tolerance.is_nan() || self.drift_tolerance <= 0.0 {
            return Err(PlenumError::invalid_config(
                "drift_tolerance",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Register sizes are multiples of 8 that hold the three sectors and fit in memory.
pub fn validate_size(num_qubits: usize) -> Result<()> {
    if num_qubits % SECTOR_WIDTH != 0 || !(MIN_QUBITS..=MAX_QUBITS).contains(&num_qubits) {
        return Err(PlenumError::InvalidSize {
            qubits: num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}
