mod common;

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

use common::params_with;
use plenum_rs::error::PlenumError;
use plenum_rs::gate::Gate;
use plenum_rs::instruct::apply_gate;
use plenum_rs::measure::probs;
use plenum_rs::params::ParameterVector;
use plenum_rs::state::State;
use plenum_rs::tension::{delta, evaluate, evaluate_with_tolerance, readout, Classification};

#[test]
fn test_equilibrium_at_zero_parameters() {
    let result = evaluate(&ParameterVector::zeros(24)).unwrap();
    assert_eq!(result.readout, [0.0, 0.0, 0.0]);
    assert_eq!(result.delta, 0.0);
    assert_eq!(result.state, Classification::Equilibrium);
}

#[test]
fn test_intensification_when_mind_flips() {
    // |1> on MIND propagates through both CNOTs, then the Toffoli clears SPIRIT
    let result = evaluate(&params_with(&[(7, PI)])).unwrap();
    assert_abs_diff_eq!(result.m(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.b(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.s(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.delta, 0.5, epsilon = 1e-12);
    assert_eq!(result.state, Classification::Intensification);
}

#[test]
fn test_only_representatives_matter() {
    let mut params = ParameterVector::new(vec![1.3; 24]);
    for rep in [7, 15, 23] {
        params.set(rep, 0.0).unwrap();
    }
    let result = evaluate(&params).unwrap();
    assert_eq!(result.state, Classification::Equilibrium);
    assert_eq!(result.delta, 0.0);
}

#[test]
fn test_matches_full_register_simulation() {
    let params = params_with(&[(7, 0.4), (15, 1.1), (23, 2.3)]);
    let compact = evaluate(&params).unwrap();

    let mut state = State::zero_state(24);
    for q in [7, 15, 23] {
        apply_gate(&mut state, &Gate::Ry(params.get(q).unwrap()), &[q]);
    }
    apply_gate(&mut state, &Gate::CNOT, &[7, 15]);
    apply_gate(&mut state, &Gate::CNOT, &[15, 23]);
    apply_gate(&mut state, &Gate::Toffoli, &[7, 15, 23]);
    let full = readout(&probs(&state, Some(&[7, 15, 23])));

    for k in 0..3 {
        assert_abs_diff_eq!(compact.readout[k], full[k], epsilon = 1e-12);
    }
    assert_abs_diff_eq!(compact.delta, delta(full), epsilon = 1e-12);
}

#[test]
fn test_delta_formula() {
    assert_abs_diff_eq!(delta([0.2, 0.5, 0.1]), (0.09 + 0.16) / 2.0, epsilon = 1e-15);
    assert_eq!(delta([0.3, 0.3, 0.3]), 0.0);
}

#[test]
fn test_missing_representative_parameter() {
    assert!(matches!(
        evaluate(&ParameterVector::zeros(16)),
        Err(PlenumError::ParameterIndexOutOfRange { index: 23, len: 16 })
    ));
}

#[test]
fn test_non_finite_representative_is_drift() {
    let params = params_with(&[(15, f64::NAN)]);
    assert!(matches!(
        evaluate(&params),
        Err(PlenumError::NumericalDrift { ref gate, .. }) if gate == "tension"
    ));
}

#[test]
fn test_explicit_tolerance() {
    let params = params_with(&[(7, 0.9), (23, 0.2)]);
    let loose = evaluate_with_tolerance(&params, 1e-3).unwrap();
    assert_eq!(loose, evaluate(&params).unwrap());
    assert!(evaluate_with_tolerance(&params_with(&[(7, f64::INFINITY)]), 1.0).is_err());
}
