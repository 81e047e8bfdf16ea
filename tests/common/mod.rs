//! Common utilities for integration tests

pub mod mock_laws;
pub mod reference_values;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_laws::FixedThreshold;
pub use test_helpers::{assert_all_finite, is_non_decreasing, relative_error};
