//! Mock star formation laws for testing
//!
//! These laws have trivially known outputs, making them useful to check
//! that the sweep and output layers work with any law, not only the
//! built-in ones.

use sflaws::error::LawError;
use sflaws::physics::{CloudParameters, StarFormationLaw};

// =================================================================================================
// Fixed threshold: scrit = ln(threshold)
// =================================================================================================

/// Law with a fixed critical overdensity and a constant SFR
///
/// `scrit = ln(threshold)`, `SFR_ff = epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct FixedThreshold {
    pub cloud: CloudParameters,
    pub threshold: f64,
}

impl FixedThreshold {
    pub fn new(threshold: f64) -> Self {
        Self { cloud: CloudParameters::default(), threshold }
    }
}

impl StarFormationLaw for FixedThreshold {
    fn name(&self) -> &'static str {
        "FixedThreshold"
    }

    fn cloud(&self) -> &CloudParameters {
        &self.cloud
    }

    fn scrit(&self) -> f64 {
        self.threshold.ln()
    }

    fn sfr_ff(&self) -> Result<f64, LawError> {
        Ok(self.cloud.epsilon)
    }

    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        Box::new(Self { cloud, ..*self })
    }
}
