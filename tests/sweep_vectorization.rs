//! Integration tests: array evaluation of laws
//!
//! Every element of a sweep must equal the scalar evaluation at the same
//! parameters, whatever the container shape.

use nalgebra::DMatrix;
use ndarray::{ArrayD, IxDyn};

use sflaws::models::{Burkhart2018, KM2005, LawKind, PN2011};
use sflaws::physics::{LawData, LawQuantity, StarFormationLaw};
use sflaws::sweep::{evaluate, evaluate_grid, evaluate_with, SweepParameter, SweepResult};

mod common;
use common::reference_values::BURKHART_ALPHA_SFR;
use common::{relative_error, FixedThreshold};

#[test]
fn test_vector_sweep_matches_scalar_for_every_law() {
    let machs: Vec<f64> = (1..=30).map(f64::from).collect();
    let data = LawData::from_vec(machs.clone());

    for kind in LawKind::ALL {
        let law = kind.build(kind.default_cloud());
        let scrit = evaluate(law.as_ref(), LawQuantity::Scrit, SweepParameter::Mach, &data)
            .unwrap()
            .to_vec();

        for (mach, value) in machs.iter().zip(&scrit) {
            let scalar = kind.build(kind.default_cloud().with_mach(*mach)).scrit();
            assert_eq!(value.to_bits(), scalar.to_bits(), "{} at Mach {}", kind, mach);
        }
    }
}

#[test]
fn test_matrix_sweep_keeps_shape() {
    let betas = DMatrix::from_row_slice(2, 2, &[1.25, 2.0, 20.0, f64::INFINITY]);
    let data = LawData::from_matrix(betas.clone());

    let result =
        evaluate(&PN2011::default(), LawQuantity::SfrFf, SweepParameter::Beta, &data).unwrap();

    let matrix = result.as_matrix();
    assert_eq!(matrix.shape(), (2, 2));
    for i in 0..2 {
        for j in 0..2 {
            let law = PN2011::new(PN2011::default_cloud().with_beta(betas[(i, j)]));
            assert_eq!(matrix[(i, j)], law.sfr_ff().unwrap());
        }
    }
}

#[test]
fn test_nd_array_sweep_keeps_shape() {
    let values = ArrayD::from_shape_vec(IxDyn(&[2, 3, 2]), (1..=12).map(f64::from).collect()).unwrap();
    let data = LawData::from_array(values);

    let result =
        evaluate(&KM2005::default(), LawQuantity::SigmaS, SweepParameter::Mach, &data).unwrap();

    assert_eq!(result.shape(), vec![2, 3, 2]);
    assert_eq!(result.to_vec()[11], KM2005::default_cloud().with_mach(12.0).sigma_s());
}

#[test]
fn test_scalar_sweep_stays_scalar() {
    let result = evaluate(
        &KM2005::default(),
        LawQuantity::SfrFf,
        SweepParameter::AlphaVir,
        &LawData::from_scalar(2.0),
    )
    .unwrap();

    assert!(result.is_scalar());
    let law = KM2005::new(KM2005::default_cloud().with_alpha_vir(2.0));
    assert_eq!(result.as_scalar(), law.sfr_ff().unwrap());
}

#[test]
fn test_not_implemented_is_reported_for_arrays() {
    let data = LawData::linspace(1.0, 30.0, 10);
    for kind in [LawKind::HC2011, LawKind::HC2011Multiff] {
        let law = kind.build(kind.default_cloud());
        let err = evaluate(law.as_ref(), LawQuantity::SfrFf, SweepParameter::Mach, &data)
            .unwrap_err();
        assert!(err.is_not_implemented());

        // Thresholds still sweep
        assert!(evaluate(law.as_ref(), LawQuantity::Scrit, SweepParameter::Mach, &data).is_ok());
    }
}

#[test]
fn test_alpha_sweep() {
    let alphas: Vec<f64> = BURKHART_ALPHA_SFR.iter().map(|(a, _)| *a).collect();
    let sfr = evaluate_with(
        &LawData::from_vec(alphas),
        |alpha| Burkhart2018::default().with_alpha(alpha),
        LawQuantity::SfrFf,
    )
    .unwrap()
    .to_vec();

    for (value, (alpha, expected)) in sfr.iter().zip(BURKHART_ALPHA_SFR) {
        assert!(relative_error(*value, expected) < 1e-6, "alpha {}: {}", alpha, value);
    }
}

#[test]
fn test_alpha_grid_includes_singularity() {
    let alphas = LawData::linspace(1.0, 3.0, 50);
    let result = SweepResult::compute_with("alpha", &alphas.to_vec(), |alpha| {
        Burkhart2018::new(Burkhart2018::default_cloud().with_mach(4.0).with_b(1.0 / 3.0))
            .with_alpha(alpha)
    })
    .unwrap();

    let sfr = result.sfr_ff.unwrap();
    assert_eq!(sfr.len(), 50);
    assert!(!sfr[0].is_finite());
    assert!(sfr[1..].iter().all(|v| v.is_finite() && *v > 0.0));
}

#[test]
fn test_mach_beta_grid() {
    let machs = [5.0, 10.0, 20.0];
    let betas = [f64::INFINITY, 2.0, 1.25];

    let grid = evaluate_grid(
        &KM2005::default(),
        LawQuantity::Scrit,
        (SweepParameter::Beta, &betas),
        (SweepParameter::Mach, &machs),
    )
    .unwrap();

    // Stronger fields raise the KM2005 threshold at every Mach number
    for j in 0..3 {
        assert!(grid[(0, j)] < grid[(1, j)]);
        assert!(grid[(1, j)] < grid[(2, j)]);
    }
}

#[test]
fn test_custom_law_sweeps() {
    let law = FixedThreshold::new(100.0);
    let result =
        SweepResult::compute(&law, SweepParameter::Epsilon, &[0.1, 0.2, 0.3]).unwrap();

    assert_eq!(result.law, "FixedThreshold");
    assert!(result.scrit.iter().all(|s| *s == 100f64.ln()));
    assert_eq!(result.sfr_ff, Some(vec![0.1, 0.2, 0.3]));
}

#[test]
fn test_every_parameter_can_be_swept() {
    let law = KM2005::default();
    for parameter in SweepParameter::ALL {
        let base = parameter.get(law.cloud());
        let result = SweepResult::compute(&law, parameter, &[base]).unwrap();
        assert_eq!(result.scrit[0], law.scrit(), "{}", parameter);
    }
}
