//! Hennebelle & Chabrier (2011) star formation laws
//!
//! As parametrized by Federrath & Klessen (2012). The critical density
//! combines a thermal term (Jeans support) and a turbulent term, both
//! scaled by `y_cut`, the ratio of the largest collapsing scale to the
//! cloud size.
//!
//! # Equations
//!
//! ```text
//! ρ_crit,th   = (π²/5)·y_cut⁻²·α_vir·M⁻²·(1 + 1/β)
//! ρ_crit,turb = (π²/15)·y_cut⁻¹·α_vir
//!
//! HC2011:          s_crit = ln(ρ_crit,turb + ρ_crit,th)
//! HC2011_multiff:  s_crit = ln(ρ_crit,th)
//! ```
//!
//! Neither variant has a closed-form SFR_ff here; both return
//! [`LawError::NotImplemented`].

use crate::error::LawError;
use crate::physics::cloud::{fbeta, CloudParameters, PI2_OVER_15, PI2_OVER_5};
use crate::physics::traits::StarFormationLaw;

/// HC2011 law (single free-fall time)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HC2011 {
    cloud: CloudParameters,
    y_cut: f64,
}

impl HC2011 {
    /// Default ratio of the largest collapsing scale to the cloud size
    pub const DEFAULT_Y_CUT: f64 = 1.3;

    /// Create the law with the default `y_cut`
    pub fn new(cloud: CloudParameters) -> Self {
        Self { cloud, y_cut: Self::DEFAULT_Y_CUT }
    }

    /// Default cloud: `M=10, β=∞, b=0.4, α_vir=1, ε=0.3, φ_t=1/0.24`
    pub fn default_cloud() -> CloudParameters {
        CloudParameters {
            mach: 10.0,
            beta: f64::INFINITY,
            b: 0.4,
            alpha_vir: 1.0,
            epsilon: 0.3,
            phi_t: 1.0 / 0.24,
        }
    }

    /// Builder pattern: set `y_cut`
    pub fn with_y_cut(mut self, y_cut: f64) -> Self {
        self.y_cut = y_cut;
        self
    }

    /// Ratio of the largest collapsing scale to the cloud size
    pub fn y_cut(&self) -> f64 {
        self.y_cut
    }

    /// Magnetic correction factor (same as PN2011)
    pub fn fbeta(&self) -> f64 {
        fbeta(self.cloud.beta)
    }

    /// Thermal (Jeans) contribution to the critical overdensity
    pub fn rhocrit_thermal(&self) -> f64 {
        let c = &self.cloud;
        PI2_OVER_5 * self.y_cut.powi(-2) * c.alpha_vir * c.mach.powi(-2) * (1.0 + c.beta.recip())
    }

    /// Turbulent contribution to the critical overdensity
    pub fn rhocrit_turbulent(&self) -> f64 {
        PI2_OVER_15 * self.y_cut.recip() * self.cloud.alpha_vir
    }
}

impl Default for HC2011 {
    fn default() -> Self {
        Self::new(Self::default_cloud())
    }
}

impl StarFormationLaw for HC2011 {
    fn name(&self) -> &'static str {
        "HC2011"
    }

    fn description(&self) -> Option<&str> {
        Some("Hennebelle & Chabrier 2011 law as parametrized by Federrath & Klessen 2012")
    }

    fn cloud(&self) -> &CloudParameters {
        &self.cloud
    }

    fn scrit(&self) -> f64 {
        (self.rhocrit_turbulent() + self.rhocrit_thermal()).ln()
    }

    fn sfr_ff(&self) -> Result<f64, LawError> {
        Err(LawError::sfr_not_implemented(self.name()))
    }

    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        Box::new(Self { cloud, ..*self })
    }
}

/// HC2011 law in its multi-free-fall form
///
/// Shares every parameter and density term with [`HC2011`] but keeps only
/// the thermal term in the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HC2011Multiff {
    base: HC2011,
}

impl HC2011Multiff {
    /// Create the law with the default `y_cut`
    pub fn new(cloud: CloudParameters) -> Self {
        Self { base: HC2011::new(cloud) }
    }

    /// Same defaults as [`HC2011::default_cloud`]
    pub fn default_cloud() -> CloudParameters {
        HC2011::default_cloud()
    }

    /// Builder pattern: set `y_cut`
    pub fn with_y_cut(self, y_cut: f64) -> Self {
        Self { base: self.base.with_y_cut(y_cut) }
    }

    /// Single free-fall counterpart with the same parameters
    pub fn single_free_fall(&self) -> &HC2011 {
        &self.base
    }

    /// Ratio of the largest collapsing scale to the cloud size
    pub fn y_cut(&self) -> f64 {
        self.base.y_cut()
    }

    /// Magnetic correction factor (same as PN2011)
    pub fn fbeta(&self) -> f64 {
        self.base.fbeta()
    }

    /// Thermal (Jeans) contribution to the critical overdensity
    pub fn rhocrit_thermal(&self) -> f64 {
        self.base.rhocrit_thermal()
    }

    /// Turbulent contribution (not used by the multi-free-fall threshold)
    pub fn rhocrit_turbulent(&self) -> f64 {
        self.base.rhocrit_turbulent()
    }
}

impl From<HC2011> for HC2011Multiff {
    fn from(base: HC2011) -> Self {
        Self { base }
    }
}

impl StarFormationLaw for HC2011Multiff {
    fn name(&self) -> &'static str {
        "HC2011_multiff"
    }

    fn description(&self) -> Option<&str> {
        Some("Hennebelle & Chabrier 2011 multi-free-fall law as parametrized by Federrath & Klessen 2012")
    }

    fn cloud(&self) -> &CloudParameters {
        self.base.cloud()
    }

    fn scrit(&self) -> f64 {
        self.rhocrit_thermal().ln()
    }

    fn sfr_ff(&self) -> Result<f64, LawError> {
        Err(LawError::sfr_not_implemented(self.name()))
    }

    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        Box::new(Self { base: HC2011 { cloud, ..self.base } })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::LawQuantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let law = HC2011::default();
        assert_eq!(law.y_cut(), 1.3);
        assert_eq!(law.cloud().phi_t, 1.0 / 0.24);
        assert_eq!(HC2011Multiff::default().cloud(), law.cloud());
    }

    #[test]
    fn test_density_terms() {
        let law = HC2011::default();
        assert_relative_eq!(law.rhocrit_thermal(), 0.011680005208389773, max_relative = 1e-12);
        assert_relative_eq!(law.rhocrit_turbulent(), 0.5061335590302234, max_relative = 1e-12);
        assert_relative_eq!(law.scrit(), -0.6581400161047297, max_relative = 1e-12);
    }

    #[test]
    fn test_magnetized_thermal_term() {
        let law = HC2011::new(HC2011::default_cloud().with_beta(2.0));
        // (1 + 1/β) = 1.5
        assert_relative_eq!(law.rhocrit_thermal(), 1.5 * HC2011::default().rhocrit_thermal(), max_relative = 1e-14);
        assert_relative_eq!(law.scrit(), -0.6469249452845897, max_relative = 1e-12);
    }

    #[test]
    fn test_multiff_uses_thermal_term_only() {
        let law = HC2011Multiff::default();
        assert_relative_eq!(law.scrit(), -4.449876855658373, max_relative = 1e-12);
        assert_eq!(law.scrit(), law.rhocrit_thermal().ln());
        assert!(law.scrit() < law.single_free_fall().scrit());
    }

    #[test]
    fn test_sfr_not_implemented() {
        let single = HC2011::default();
        let multi = HC2011Multiff::default();

        assert_eq!(single.sfr_ff().unwrap_err(), LawError::sfr_not_implemented("HC2011"));
        assert_eq!(multi.sfr_ff().unwrap_err(), LawError::sfr_not_implemented("HC2011_multiff"));
        assert!(multi.evaluate(LawQuantity::SfrFf).unwrap_err().is_not_implemented());
    }

    #[test]
    fn test_rebuild_keeps_y_cut() {
        let law = HC2011Multiff::default().with_y_cut(2.0);
        let rebuilt = law.rebuild(law.cloud().with_mach(4.0));
        let direct = HC2011Multiff::new(HC2011::default_cloud().with_mach(4.0)).with_y_cut(2.0);

        assert_eq!(rebuilt.name(), "HC2011_multiff");
        assert_eq!(rebuilt.scrit(), direct.scrit());
    }

    #[test]
    fn test_from_single_free_fall() {
        let base = HC2011::default().with_y_cut(1.1);
        let multi = HC2011Multiff::from(base);
        assert_eq!(multi.y_cut(), 1.1);
        assert_eq!(multi.fbeta(), 1.0);
        assert_eq!(multi.rhocrit_turbulent(), base.rhocrit_turbulent());
    }
}
