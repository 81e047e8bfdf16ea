//! Error types for star formation law evaluation
//!
//! Only conditions a caller can act on are represented here. Numeric edge
//! cases (division by zero at `Beta = 1` or `alpha = 1`, logarithms of
//! non-positive values) are not errors: they propagate as IEEE `inf`/`NaN`.

use thiserror::Error;

use crate::physics::LawQuantity;

/// Errors that can occur while evaluating a law or a sweep
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LawError {
    /// The law has no closed-form expression for this quantity
    #[error("{law} does not implement {quantity}")]
    NotImplemented {
        law: &'static str,
        quantity: LawQuantity,
    },

    /// Two array-valued inputs of a broadcast do not share a shape
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

impl LawError {
    /// Shortcut for the missing-SFR case
    pub fn sfr_not_implemented(law: &'static str) -> Self {
        Self::NotImplemented { law, quantity: LawQuantity::SfrFf }
    }

    /// Whether this error means "no closed form"
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message() {
        let err = LawError::sfr_not_implemented("HC2011");
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "HC2011 does not implement SFR_ff");
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = LawError::ShapeMismatch { expected: vec![3], actual: vec![2, 2] };
        assert!(!err.is_not_implemented());
        assert_eq!(err.to_string(), "Shape mismatch: expected [3], got [2, 2]");
    }
}
