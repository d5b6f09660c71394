//! Error types for register construction, program interpretation and readout.

use thiserror::Error;

/// Result type alias for plenum operations.
pub type Result<T> = std::result::Result<T, PlenumError>;

/// Errors raised by the simulator.
///
/// Every variant is a local, synchronous failure. The computation is
/// deterministic, so none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlenumError {
    /// Register size cannot hold the three 8-qubit sectors.
    #[error("invalid register size {qubits}: must be a multiple of 8 between 24 and {max}")]
    InvalidSize {
        /// Requested qubit count.
        qubits: usize,
        /// Largest supported qubit count.
        max: usize,
    },

    /// Gate name is not part of the catalog vocabulary.
    #[error("unknown gate '{0}'")]
    UnknownGate(String),

    /// Sector name is not one of MIND, BODY, SPIRIT.
    #[error("unknown sector '{0}'")]
    UnknownSector(String),

    /// A parameter was read past the end of the supplied vector.
    #[error("parameter index {index} out of range for vector of length {len}")]
    ParameterIndexOutOfRange {
        /// Absolute qubit index that was requested.
        index: usize,
        /// Length of the supplied parameter vector.
        len: usize,
    },

    /// Squared norm drifted away from 1 after applying a gate.
    ///
    /// This signals a defective gate matrix, not bad user input.
    #[error("numerical drift after {gate}: |norm^2 - 1| = {deviation:e} exceeds {tolerance:e}")]
    NumericalDrift {
        /// Gate whose application broke normalization.
        gate: String,
        /// Absolute deviation of the squared norm from 1.
        deviation: f64,
        /// Tolerance in force.
        tolerance: f64,
    },

    /// Configuration value rejected by validation.
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig {
        /// Field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Program document could not be decoded.
    #[error("malformed program json: {0}")]
    Json(String),
}

impl PlenumError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PlenumError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
