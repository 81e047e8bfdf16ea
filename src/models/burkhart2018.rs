//! Burkhart (2018) star formation law
//!
//! The density PDF is lognormal below a transition density `s_t` and a
//! power law of slope `-alpha` above it, the power-law tail being built by
//! self-gravity. Integrating the PDF above `s_crit` gives SFR_ff.
//!
//! # Equations
//!
//! ```text
//! s_t    = (2|α| - 1)·σ_s²/2
//! C      = exp((α - 1)·α·σ_s²/2) / (σ_s·sqrt(2π))
//! N      = 2 / [ 1 + erf( (2 ln s_t + σ_s²) / (2^(3/2)·σ_s) ) + 2C·s_t^α/α ]
//!
//! s_crit = ln( (π²/15)·φ_t²·α_vir·M² )
//!
//! SFR_ff = exp(s_crit/2)·N·ε·[ erf( (σ_s² - 2 s_crit) / sqrt(8σ_s²) )/2
//!                             - erf( (σ_s² - 2 s_t) / sqrt(8σ_s²) )/2
//!                             + C·exp(s_t·(1 - α))/(α - 1) ]
//! ```
//!
//! `s_t`, `C` and `N` are computed once at construction. Every builder
//! method rebuilds the law, so they always match the parameters.
//! `alpha = 1` divides by zero; the result propagates as `inf`/`NaN`.

use std::f64::consts::PI;

use statrs::function::erf::erf;

use crate::error::LawError;
use crate::physics::cloud::{CloudParameters, PI2_OVER_15};
use crate::physics::density::collapse_erf;
use crate::physics::traits::StarFormationLaw;

/// Burkhart2018 law
///
/// # Example
///
/// ```rust
/// use sflaws::models::Burkhart2018;
/// use sflaws::physics::StarFormationLaw;
///
/// let law = Burkhart2018::default().with_alpha(1.5);
/// let sfr = law.sfr_ff().unwrap();
/// assert!(sfr > 0.0 && sfr < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burkhart2018 {
    cloud: CloudParameters,
    alpha: f64,
    s_t: f64,
    c: f64,
    n: f64,
}

impl Burkhart2018 {
    /// Default power-law slope of the PDF tail
    pub const DEFAULT_ALPHA: f64 = 2.0;

    /// Create the law with the default slope
    pub fn new(cloud: CloudParameters) -> Self {
        Self::with_parameters(cloud, Self::DEFAULT_ALPHA)
    }

    /// Create the law and compute the PDF transition terms
    pub fn with_parameters(cloud: CloudParameters, alpha: f64) -> Self {
        let sigma_s = cloud.sigma_s();
        let variance = sigma_s.powi(2);

        let s_t = 0.5 * (2.0 * alpha.abs() - 1.0) * variance;
        let c = (0.5 * (alpha - 1.0) * alpha * variance).exp() / (sigma_s * (2.0 * PI).sqrt());
        let n = 2.0
            / (1.0
                + erf((2.0 * s_t.ln() + variance) / (2f64.powf(1.5) * sigma_s))
                + (2.0 * c * s_t.powf(alpha)) / alpha);

        log::debug!(
            "Burkhart2018: alpha={alpha}, sigma_s={sigma_s:.4}, s_t={s_t:.4}, C={c:.4e}, N={n:.4e}"
        );

        Self { cloud, alpha, s_t, c, n }
    }

    /// Default cloud: `M=10, β=20, b=0.4, α_vir=1, ε=0.2, φ_t=1/3`
    pub fn default_cloud() -> CloudParameters {
        CloudParameters {
            mach: 10.0,
            beta: 20.0,
            b: 0.4,
            alpha_vir: 1.0,
            epsilon: 0.2,
            phi_t: 1.0 / 3.0,
        }
    }

    /// Rebuild with a new power-law slope
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::with_parameters(self.cloud, alpha)
    }

    /// Rebuild with new cloud parameters
    pub fn with_cloud(self, cloud: CloudParameters) -> Self {
        Self::with_parameters(cloud, self.alpha)
    }

    /// Power-law slope of the PDF tail
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Log-density of the lognormal to power-law transition
    pub fn s_t(&self) -> f64 {
        self.s_t
    }

    /// Power-law amplitude matching the lognormal at `s_t`
    pub fn c(&self) -> f64 {
        self.c
    }

    /// PDF normalization
    pub fn n(&self) -> f64 {
        self.n
    }
}

impl Default for Burkhart2018 {
    fn default() -> Self {
        Self::new(Self::default_cloud())
    }
}

impl StarFormationLaw for Burkhart2018 {
    fn name(&self) -> &'static str {
        "Burkhart2018"
    }

    fn description(&self) -> Option<&str> {
        Some("Burkhart 2018 lognormal plus power-law PDF law")
    }

    fn cloud(&self) -> &CloudParameters {
        &self.cloud
    }

    fn scrit(&self) -> f64 {
        let c = &self.cloud;
        (PI2_OVER_15 * c.phi_t.powi(2) * c.alpha_vir * c.mach.powi(2)).ln()
    }

    fn sfr_ff(&self) -> Result<f64, LawError> {
        let sigma_s = self.sigma_s();
        let scrit = self.scrit();

        let lognormal_part = 0.5 * collapse_erf(sigma_s, scrit) - 0.5 * collapse_erf(sigma_s, self.s_t);
        let power_law_part = self.c * (self.s_t * (1.0 - self.alpha)).exp() / (self.alpha - 1.0);

        Ok((0.5 * scrit).exp() * self.n * self.cloud.epsilon * (lognormal_part + power_law_part))
    }

    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        Box::new(self.with_cloud(cloud))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
