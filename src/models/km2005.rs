//! Krumholz & McKee (2005) star formation law
//!
//! As parametrized by Federrath & Klessen (2012). The critical density
//! follows from requiring the sonic length of a core to match its Jeans
//! length; `phi_x` is the calibration constant of that comparison.
//!
//! # Equations
//!
//! ```text
//! s_crit = ln( (π²/5)·φ_x²·α_vir·M² )                 (β = ∞)
//! s_crit = ln( (π²/5)·φ_x²·α_vir·M² / (1 - 1/β) )     (β finite)
//!
//! SFR_ff = ε/(2φ_t) · [ 1 + erf( (σ_s² - 2 s_crit) / sqrt(8σ_s²) ) ]
//! ```
//!
//! The magnetized threshold diverges at `β = 1` and turns negative below
//! it; these values propagate as `inf`/`NaN`.

use crate::error::LawError;
use crate::physics::cloud::{CloudParameters, PI2_OVER_5};
use crate::physics::density::collapse_erf;
use crate::physics::traits::StarFormationLaw;

/// KM2005 law
///
/// # Example
///
/// ```rust
/// use sflaws::models::KM2005;
/// use sflaws::physics::StarFormationLaw;
///
/// let law = KM2005::default();
/// let expected = (std::f64::consts::PI.powi(2) / 5.0 * 0.12_f64.powi(2) * 100.0).ln();
/// assert!((law.scrit() - expected).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KM2005 {
    cloud: CloudParameters,
    phi_x: f64,
}

impl KM2005 {
    /// Default sonic-scale calibration constant
    pub const DEFAULT_PHI_X: f64 = 0.12;

    /// Create the law with the default `phi_x`
    pub fn new(cloud: CloudParameters) -> Self {
        Self { cloud, phi_x: Self::DEFAULT_PHI_X }
    }

    /// Default cloud: `M=10, β=∞, b=0.4, α_vir=1, ε=0.3, φ_t=1/3`
    pub fn default_cloud() -> CloudParameters {
        CloudParameters {
            mach: 10.0,
            beta: f64::INFINITY,
            b: 0.4,
            alpha_vir: 1.0,
            epsilon: 0.3,
            phi_t: 1.0 / 3.0,
        }
    }

    /// Builder pattern: set `phi_x`
    pub fn with_phi_x(mut self, phi_x: f64) -> Self {
        self.phi_x = phi_x;
        self
    }

    /// Sonic-scale calibration constant
    pub fn phi_x(&self) -> f64 {
        self.phi_x
    }
}

impl Default for KM2005 {
    fn default() -> Self {
        Self::new(Self::default_cloud())
    }
}

impl StarFormationLaw for KM2005 {
    fn name(&self) -> &'static str {
        "KM2005"
    }

    fn description(&self) -> Option<&str> {
        Some("Krumholz & McKee 2005 law as parametrized by Federrath & Klessen 2012")
    }

    fn cloud(&self) -> &CloudParameters {
        &self.cloud
    }

    fn scrit(&self) -> f64 {
        let c = &self.cloud;
        let density = PI2_OVER_5 * self.phi_x.powi(2) * c.alpha_vir * c.mach.powi(2);

        if c.is_magnetized() {
            (density / (1.0 - c.beta.recip())).ln()
        } else {
            density.ln()
        }
    }

    fn sfr_ff(&self) -> Result<f64, LawError> {
        let c = &self.cloud;
        Ok(c.epsilon / c.phi_t / 2.0 * (1.0 + collapse_erf(self.sigma_s(), self.scrit())))
    }

    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        Box::new(Self { cloud, ..*self })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_default_parameters() {
        let law = KM2005::default();
        assert_eq!(law.phi_x(), 0.12);
        assert_eq!(law.cloud().mach, 10.0);
        assert!(law.cloud().beta.is_infinite());
        assert_eq!(law.cloud().epsilon, 0.3);
        assert_eq!(law.cloud().phi_t, 1.0 / 3.0);
    }

    #[test]
    fn test_scrit_unmagnetized() {
        let law = KM2005::default();
        let expected = (PI * PI / 5.0 * 0.12_f64.powi(2) * 1.0 * 100.0).ln();

        assert_relative_eq!(law.scrit(), expected, max_relative = 1e-14);
        assert_relative_eq!(law.scrit(), 1.0446649728526092, max_relative = 1e-12);
    }

    #[test]
    fn test_scrit_magnetized() {
        let law = KM2005::new(KM2005::default_cloud().with_beta(2.0));
        assert_relative_eq!(law.scrit(), 1.7378121534125546, max_relative = 1e-12);
        // Field support raises the threshold
        assert!(law.scrit() > KM2005::default().scrit());
    }

    #[test]
    fn test_sfr_reference_values() {
        assert_relative_eq!(KM2005::default().sfr_ff().unwrap(), 0.7673889428700016, max_relative = 1e-9);

        let magnetized = KM2005::new(KM2005::default_cloud().with_beta(2.0));
        assert_relative_eq!(magnetized.sfr_ff().unwrap(), 0.6289354425721811, max_relative = 1e-9);
    }

    #[test]
    fn test_sfr_upper_bound() {
        // erf ≤ 1, so SFR_ff ≤ ε/φ_t
        let law = KM2005::new(KM2005::default_cloud().with_mach(1000.0).with_b(1.0));
        let bound = law.cloud().epsilon / law.cloud().phi_t;
        assert!(law.sfr_ff().unwrap() <= bound);
    }

    #[test]
    fn test_beta_one_is_not_trapped() {
        let law = KM2005::new(KM2005::default_cloud().with_beta(1.0));
        assert!(law.scrit().is_infinite());
        assert!(law.sfr_ff().is_ok());
    }

    #[test]
    fn test_rebuild_keeps_phi_x() {
        let law = KM2005::default().with_phi_x(0.2);
        let rebuilt = law.rebuild(law.cloud().with_mach(5.0));
        let direct = KM2005::new(KM2005::default_cloud().with_mach(5.0)).with_phi_x(0.2);

        assert_eq!(rebuilt.scrit(), direct.scrit());
    }
}
