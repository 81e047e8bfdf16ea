//! Vectorized evaluation of star formation laws
//!
//! This module evaluates a law over arrays of parameter values.
//!
//! # Architecture
//!
//! A law holds scalar parameters only. A sweep takes a law, the name of
//! the parameter to vary and a [`LawData`](crate::physics::LawData) of
//! values, rebuilds the law once per value and evaluates the requested
//! quantity. The output has the shape of the input, and each element is
//! exactly the scalar evaluation at that value.
//!
//! # Available entry points
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One quantity over an array of one cloud parameter | [`evaluate`] |
//! | Any law built from one value (e.g. Burkhart `alpha`) | [`evaluate_with`] |
//! | One quantity over a 2-D grid of two parameters | [`evaluate_grid`] |
//! | All quantities over a 1-D sweep, for output | [`SweepResult::compute`] |
//!
//! # Example
//!
//! ```rust
//! use sflaws::models::KM2005;
//! use sflaws::physics::{LawData, LawQuantity, StarFormationLaw};
//! use sflaws::sweep::{evaluate, SweepParameter};
//!
//! let law = KM2005::default();
//! let machs = LawData::from_vec(vec![5.0, 10.0, 20.0]);
//!
//! let scrit = evaluate(&law, LawQuantity::Scrit, SweepParameter::Mach, &machs).unwrap();
//! assert_eq!(scrit.shape(), vec![3]);
//! assert_eq!(scrit.to_vec()[1], law.scrit());
//! ```
//!
//! # Errors
//!
//! Sweeps over laws without a closed-form SFR_ff fail with
//! [`LawError::NotImplemented`](crate::error::LawError). Non-finite
//! results are returned as-is and logged at `warn` level.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod parameter;
mod result;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (benchmarks, tests) without a mutex on every `map()` call.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of elements above which [`LawData::map()`](crate::physics::LawData::map)
/// switches to parallel iteration.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Sweeps iterate sequentially below this many elements and switch to
/// Rayon above it, but only when the crate is compiled with the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use sflaws::sweep::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use sflaws::sweep::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop. Test builds only.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use parameter::SweepParameter;
pub use result::SweepResult;

// =================================================================================================
// Evaluation
// =================================================================================================

use nalgebra::DMatrix;

use crate::error::LawError;
use crate::physics::{LawData, LawQuantity, StarFormationLaw};

/// Evaluate a quantity over an array of values of one cloud parameter
///
/// Every other parameter, including the law-specific constant, is taken
/// from `law`.
///
/// # Errors
///
/// The first [`LawError`] raised by the law (e.g. `NotImplemented` for
/// the SFR of HC2011).
pub fn evaluate(
    law: &dyn StarFormationLaw,
    quantity: LawQuantity,
    parameter: SweepParameter,
    values: &LawData,
) -> Result<LawData, LawError> {
    log::debug!(
        "Sweeping {} of {} over {} {} values",
        quantity,
        law.name(),
        values.len(),
        parameter
    );

    let base = *law.cloud();
    let result = values.try_map(|value| {
        law.rebuild(parameter.apply(base, value)).evaluate(quantity)
    })?;

    warn_non_finite(law.name(), quantity, &result);
    Ok(result)
}

/// Evaluate a quantity over laws built from each value by `factory`
///
/// Use this to sweep law-specific constants:
///
/// ```rust
/// use sflaws::models::Burkhart2018;
/// use sflaws::physics::{LawData, LawQuantity};
/// use sflaws::sweep::evaluate_with;
///
/// let alphas = LawData::linspace(1.5, 3.0, 4);
/// let sfr = evaluate_with(
///     &alphas,
///     |alpha| Burkhart2018::default().with_alpha(alpha),
///     LawQuantity::SfrFf,
/// ).unwrap();
/// assert_eq!(sfr.len(), 4);
/// ```
pub fn evaluate_with<L, F>(
    values: &LawData,
    factory: F,
    quantity: LawQuantity,
) -> Result<LawData, LawError>
where
    L: StarFormationLaw,
    F: Fn(f64) -> L + Sync + Send,
{
    values.try_map(|value| factory(value).evaluate(quantity))
}

/// Evaluate a quantity on the grid `rows × columns` of two parameters
///
/// Entry `(i, j)` is the law rebuilt with `rows.0 = rows.1[i]` and
/// `columns.0 = columns.1[j]`.
pub fn evaluate_grid(
    law: &dyn StarFormationLaw,
    quantity: LawQuantity,
    rows: (SweepParameter, &[f64]),
    columns: (SweepParameter, &[f64]),
) -> Result<DMatrix<f64>, LawError> {
    let (row_parameter, row_values) = rows;
    let (column_parameter, column_values) = columns;
    let base = *law.cloud();

    let mut grid = DMatrix::zeros(row_values.len(), column_values.len());
    for (i, row_value) in row_values.iter().enumerate() {
        let row_cloud = row_parameter.apply(base, *row_value);
        for (j, column_value) in column_values.iter().enumerate() {
            let cloud = column_parameter.apply(row_cloud, *column_value);
            grid[(i, j)] = law.rebuild(cloud).evaluate(quantity)?;
        }
    }

    warn_non_finite(law.name(), quantity, &LawData::from_matrix(grid.clone()));
    Ok(grid)
}

/// Log non-finite values in a sweep result
fn warn_non_finite(law: &str, quantity: LawQuantity, data: &LawData) {
    let count = data.iter().filter(|x| !x.is_finite()).count();
    if count > 0 {
        log::warn!("{law}: {count} of {} {quantity} values are not finite", data.len());
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Burkhart2018, HC2011, KM2005, PN2011};

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_evaluate_matches_scalar() {
        let law = PN2011::default();
        let machs = [2.0, 5.0, 12.0, 30.0];
        let result = evaluate(
            &law,
            LawQuantity::SfrFf,
            SweepParameter::Mach,
            &LawData::from_vec(machs.to_vec()),
        )
        .unwrap();

        for (mach, value) in machs.iter().zip(result.iter()) {
            let scalar = PN2011::new(PN2011::default_cloud().with_mach(*mach));
            assert_eq!(value, scalar.sfr_ff().unwrap());
        }
    }

    #[test]
    fn test_evaluate_keeps_law_constant() {
        let law = KM2005::default().with_phi_x(0.3);
        let result =
            evaluate(&law, LawQuantity::Scrit, SweepParameter::Mach, &LawData::from_scalar(10.0))
                .unwrap();
        assert_eq!(result.as_scalar(), law.scrit());
    }

    #[test]
    fn test_evaluate_not_implemented() {
        let err = evaluate(
            &HC2011::default(),
            LawQuantity::SfrFf,
            SweepParameter::Mach,
            &LawData::linspace(1.0, 10.0, 5),
        )
        .unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_evaluate_with_alpha() {
        let alphas = LawData::from_vec(vec![1.5, 2.0]);
        let result =
            evaluate_with(&alphas, |a| Burkhart2018::default().with_alpha(a), LawQuantity::SfrFf)
                .unwrap();

        assert_eq!(result.to_vec()[1], Burkhart2018::default().sfr_ff().unwrap());
    }

    #[test]
    fn test_evaluate_grid_layout() {
        let law = KM2005::default();
        let machs = [5.0, 10.0, 20.0];
        let betas = [f64::INFINITY, 2.0, 1.25];

        let grid = evaluate_grid(
            &law,
            LawQuantity::Scrit,
            (SweepParameter::Mach, &machs),
            (SweepParameter::Beta, &betas),
        )
        .unwrap();

        assert_eq!(grid.shape(), (3, 3));
        let expected = KM2005::new(KM2005::default_cloud().with_mach(20.0).with_beta(2.0));
        assert_eq!(grid[(2, 1)], expected.scrit());
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let law = KM2005::default();
        let machs = LawData::linspace(1.0, 50.0, 64);

        let sequential =
            evaluate(&law, LawQuantity::SfrFf, SweepParameter::Mach, &machs).unwrap();
        let parallel = {
            let _guard = ThresholdGuard::save(8);
            evaluate(&law, LawQuantity::SfrFf, SweepParameter::Mach, &machs).unwrap()
        };

        assert_eq!(sequential, parallel);
    }
}
