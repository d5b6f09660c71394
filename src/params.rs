//! Per-qubit rotation parameters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PlenumError, Result};

/// One real parameter per absolute qubit index.
///
/// Parameterized gates read the entry at the absolute index of the qubit
/// they act on (entangling gates: their first qubit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterVector(Vec<f64>);

impl ParameterVector {
    pub fn new(values: Vec<f64>) -> Self {
        ParameterVector(values)
    }

    pub fn zeros(len: usize) -> Self {
        ParameterVector(vec![0.0; len])
    }

    /// Draws `len` values uniformly from `[low, high]`.
    pub fn uniform(len: usize, low: f64, high: f64, rng: &mut impl Rng) -> Self {
        ParameterVector((0..len).map(|_| rng.gen_range(low..=high)).collect())
    }

    /// Entry at an absolute qubit index.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.0
            .get(index)
            .copied()
            .ok_or(PlenumError::ParameterIndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    /// Overwrite one entry.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(PlenumError::ParameterIndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Fails unless every qubit of a `num_qubits` register has an entry.
    pub fn ensure_covers(&self, num_qubits: usize) -> Result<()> {
        if self.0.len() < num_qubits {
            return Err(PlenumError::ParameterIndexOutOfRange {
                index: num_qubits - 1,
                len: self.0.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for ParameterVector {
    fn from(values: Vec<f64>) -> Self {
        ParameterVector(values)
    }
}

impl From<&[f64]> for ParameterVector {
    fn from(values: &[f64]) -> Self {
        ParameterVector(values.to_vec())
    }
}
