//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Whether each value is at least the previous one
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

/// Assert that every value is finite
pub fn assert_all_finite(values: &[f64], message: &str) {
    for (i, v) in values.iter().enumerate() {
        assert!(v.is_finite(), "{}: element {} is {}", message, i, v);
    }
}
