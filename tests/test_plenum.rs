mod common;

use std::f64::consts::PI;
use std::thread;

use common::{assert_distribution, assert_point_mass, params_with, seeded_plenum, zero_plenum};
use plenum_rs::catalog::CATALOG;
use plenum_rs::tension::Classification;
use plenum_rs::{ParameterVector, Plenum, PlenumConfig, PlenumError};

#[test]
fn test_construction() {
    let plenum = Plenum::new(24).unwrap();
    assert_eq!(plenum.num_qubits(), 24);
    assert_eq!(plenum.params().len(), 24);
    assert!(plenum
        .params()
        .as_slice()
        .iter()
        .all(|&v| (0.1..=0.8).contains(&v)));

    for bad in [0, 12, 23, 26] {
        assert!(matches!(Plenum::new(bad), Err(PlenumError::InvalidSize { .. })));
    }
}

#[test]
fn test_identity_program() {
    let p = seeded_plenum(3).execute(&["IDENTITY"], "MIND", None, None).unwrap();
    assert_eq!(p.len(), 256);
    assert_point_mass(&p, 0);
}

#[test]
fn test_pauli_x_on_spirit() {
    let p = seeded_plenum(5).execute(&["PAULI_X"], "SPIRIT", None, None).unwrap();
    assert_point_mass(&p, 0x7F);
}

#[test]
fn test_unknown_gate_fails_before_simulating() {
    let err = zero_plenum()
        .execute(&["HADAMARD", "BOGUS_GATE"], "MIND", None, None)
        .unwrap_err();
    assert_eq!(err, PlenumError::UnknownGate("BOGUS_GATE".to_string()));
}

#[test]
fn test_unknown_sector() {
    let empty: [&str; 0] = [];
    let err = zero_plenum().execute(&empty, "EAST", None, None).unwrap_err();
    assert_eq!(err, PlenumError::UnknownSector("EAST".to_string()));
}

#[test]
fn test_override_does_not_touch_defaults() {
    let plenum = zero_plenum();
    let overrides = params_with(&[(0, PI), (1, PI)]);
    let p = plenum.execute(&["RX"], "MIND", Some(&overrides), None).unwrap();
    assert_point_mass(&p, 0b11);

    assert_eq!(plenum.params(), ParameterVector::zeros(24));
    let p = plenum.execute(&["RX"], "MIND", None, None).unwrap();
    assert_point_mass(&p, 0);
}

#[test]
fn test_short_override_rejected() {
    let err = zero_plenum()
        .execute(&["WAY"], "BODY", Some(&ParameterVector::zeros(12)), None)
        .unwrap_err();
    assert!(matches!(err, PlenumError::ParameterIndexOutOfRange { .. }));
}

#[test]
fn test_set_param_changes_next_execution() {
    let plenum = zero_plenum();
    plenum.set_param(9, PI).unwrap();
    let p = plenum.execute(&["WAY"], "BODY", None, None).unwrap();
    assert_point_mass(&p, 0b10);
    assert!(matches!(
        plenum.set_param(24, 1.0),
        Err(PlenumError::ParameterIndexOutOfRange { index: 24, len: 24 })
    ));
}

#[test]
fn test_tension_follows_defaults() {
    let plenum = zero_plenum();
    assert_eq!(plenum.tension().unwrap().state, Classification::Equilibrium);

    plenum.set_param(7, PI).unwrap();
    let result = plenum.tension().unwrap();
    assert_eq!(result.state, Classification::Intensification);
    assert!(result.delta > 0.02);
}

#[test]
fn test_every_gate_keeps_distribution_normalized() {
    let plenum = seeded_plenum(17);
    for spec in CATALOG.iter() {
        let p = plenum.execute(&[spec.name], "MIND", None, Some(0.37)).unwrap();
        assert_distribution(&p);
    }
}

#[test]
fn test_chain_pairing_configuration() {
    let config = PlenumConfig::from_json(r#"{"three_qubit_pairing": "chain"}"#).unwrap();
    let plenum = Plenum::with_params(config, ParameterVector::zeros(24)).unwrap();
    let p = plenum.execute(&["PAULI_X", "CCX"], "SPIRIT", None, None).unwrap();
    assert_point_mass(&p, 0x7F);
}

#[test]
fn test_concurrent_calls() {
    let plenum = zero_plenum();
    thread::scope(|scope| {
        let readers: Vec<_> = (0..2)
            .map(|_| {
                let plenum = plenum.clone();
                scope.spawn(move || plenum.execute(&["PAULI_X", "CNOT"], "MIND", None, None))
            })
            .collect();
        let writer = scope.spawn(|| {
            for q in 0..24 {
                plenum.set_param(q, 0.0).unwrap();
            }
        });
        writer.join().unwrap();
        for reader in readers {
            // parameter-free program: result is independent of the writer
            assert_point_mass(&reader.join().unwrap().unwrap(), 0b0101_0101);
        }
    });
}

#[test]
fn test_execute_json() {
    let plenum = zero_plenum();
    let p = plenum
        .execute_json(r#"{"sector": "MIND", "gates": ["SWAP"], "stimulus": 1.0}"#)
        .unwrap();
    assert_point_mass(&p, 0b10);
}

#[test]
fn test_non_finite_inputs_are_errors() {
    let plenum = zero_plenum();
    let overrides = params_with(&[(0, f64::NAN)]);
    assert!(matches!(
        plenum.execute(&["WAY"], "MIND", Some(&overrides), None),
        Err(PlenumError::NumericalDrift { .. })
    ));
    assert!(matches!(
        plenum.execute(&["IDENTITY"], "MIND", None, Some(f64::INFINITY)),
        Err(PlenumError::NumericalDrift { .. })
    ));
}

#[test]
fn test_tension_uses_configured_tolerance() {
    let config = PlenumConfig {
        drift_tolerance: 1e-3,
        ..Default::default()
    };
    let plenum = Plenum::with_params(config, ParameterVector::zeros(24)).unwrap();
    assert_eq!(plenum.tension().unwrap().state, Classification::Equilibrium);

    plenum.set_param(23, f64::NAN).unwrap();
    match plenum.tension() {
        Err(PlenumError::NumericalDrift { gate, tolerance, .. }) => {
            assert_eq!(gate, "tension");
            assert_eq!(tolerance, 1e-3);
        }
        other => panic!("expected drift, got {:?}", other),
    }
}
