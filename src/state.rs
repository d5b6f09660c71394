use ndarray::Array1;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::error::{PlenumError, Result};

/// Amplitudes summed per rayon task in norm reductions.
const NORM_CHUNK: usize = 1 << 12;

/// Dense state vector over `num_qubits` qubits.
///
/// Entry `i` is the amplitude of the basis configuration whose bit `q`
/// holds the value of qubit `q`.
#[derive(Debug, Clone)]
pub struct State {
    pub num_qubits: usize,
    pub data: Array1<Complex64>,
}

impl State {
    /// Creates |0,0,...,0> (all amplitude mass at index 0).
    pub fn zero_state(num_qubits: usize) -> Self {
        let mut data = Array1::zeros(1usize << num_qubits);
        data[0] = Complex64::new(1.0, 0.0);
        State { num_qubits, data }
    }

    /// Creates the basis state with the given flat index.
    pub fn basis_state(num_qubits: usize, index: usize) -> Self {
        let total = 1usize << num_qubits;
        assert!(index < total, "basis index {} is out of range for {} qubits", index, num_qubits);
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        State { num_qubits, data }
    }

    /// Wraps existing amplitudes. `data.len()` must be `2^num_qubits`.
    pub fn new(num_qubits: usize, data: Array1<Complex64>) -> Self {
        assert_eq!(
            data.len(),
            1usize << num_qubits,
            "amplitude count must be 2^num_qubits"
        );
        State { num_qubits, data }
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes()
            .par_chunks(NORM_CHUNK)
            .map(|chunk| chunk.iter().map(|c| c.norm_sqr()).sum::<f64>())
            .sum()
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// Fails with `NumericalDrift` when the squared norm is further than
    /// `tolerance` from 1, or is not finite. `gate` names the operation
    /// just applied.
    pub fn check_normalized(&self, gate: &str, tolerance: f64) -> Result<()> {
        let deviation = (self.norm_sqr() - 1.0).abs();
        if deviation.is_nan() || deviation > tolerance {
            tracing::warn!(gate, deviation, tolerance, "state vector lost normalization");
            return Err(PlenumError::NumericalDrift {
                gate: gate.to_string(),
                deviation,
                tolerance,
            });
        }
        Ok(())
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        self.data
            .as_slice()
            .expect("state vectors are allocated in standard layout")
    }

    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        self.data
            .as_slice_mut()
            .expect("state vectors are allocated in standard layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_normalized_flags_drift() {
        let mut state = State::zero_state(2);
        state.data[1] = Complex64::new(0.1, 0.0);
        let err = state.check_normalized("PAULI_X", 1e-9).unwrap_err();
        match err {
            PlenumError::NumericalDrift { gate, deviation, .. } => {
                assert_eq!(gate, "PAULI_X");
                assert!((deviation - 0.01).abs() < 1e-12);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_check_normalized_rejects_nan() {
        let mut state = State::zero_state(2);
        state.data[0] = Complex64::new(f64::NAN, 0.0);
        assert!(matches!(
            state.check_normalized("WAY", 1e-9),
            Err(PlenumError::NumericalDrift { .. })
        ));
        state.data[0] = Complex64::new(f64::INFINITY, 0.0);
        assert!(state.check_normalized("WAY", 1e-9).is_err());
    }

    #[test]
    fn test_norm_sqr_large_register() {
        let state = State::zero_state(16);
        assert!((state.norm_sqr() - 1.0).abs() < 1e-15);
        assert!(state.check_normalized("IDENTITY", 1e-9).is_ok());
    }
}
