//! Shared test utilities for plenum-rs integration tests.

#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use num_complex::Complex64;

use plenum_rs::params::ParameterVector;
use plenum_rs::state::State;
use plenum_rs::{Plenum, PlenumConfig};

pub const ATOL: f64 = 1e-10;

/// Plenum whose default parameters are all zero.
pub fn zero_plenum() -> Plenum {
    Plenum::with_params(PlenumConfig::default(), ParameterVector::zeros(24)).unwrap()
}

/// Plenum with seeded uniform parameters.
pub fn seeded_plenum(seed: u64) -> Plenum {
    Plenum::with_config(PlenumConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

/// Zero parameter vector with selected entries overwritten.
pub fn params_with(entries: &[(usize, f64)]) -> ParameterVector {
    let mut params = ParameterVector::zeros(24);
    for &(index, value) in entries {
        params.set(index, value).unwrap();
    }
    params
}

/// Deterministic, normalized, non-trivial state on `n` qubits.
pub fn scrambled_state(n: usize) -> State {
    let mut state = State::zero_state(n);
    for (i, amp) in state.data.iter_mut().enumerate() {
        let x = i as f64;
        *amp = Complex64::new((0.37 * x + 0.1).sin(), (0.91 * x + 0.3).cos());
    }
    let norm = state.norm();
    state.data.mapv_inplace(|c| c / norm);
    state
}

pub fn assert_distribution(p: &[f64]) {
    let total: f64 = p.iter().sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
    assert!(p.iter().all(|&v| v >= 0.0));
}

/// All mass on a single outcome.
pub fn assert_point_mass(p: &[f64], outcome: usize) {
    for (k, &v) in p.iter().enumerate() {
        let expected = if k == outcome { 1.0 } else { 0.0 };
        assert!(
            (v - expected).abs() < ATOL,
            "outcome {}: got {}, expected {}",
            k,
            v,
            expected
        );
    }
}

pub fn assert_state_approx(a: &State, b: &State) {
    assert_eq!(a.total_dim(), b.total_dim());
    for (i, (x, y)) in a.data.iter().zip(b.data.iter()).enumerate() {
        assert!(
            (x - y).norm() < ATOL,
            "State mismatch at index {}: got {:?}, expected {:?}",
            i,
            x,
            y
        );
    }
}
