//! Lognormal density statistics of a turbulent cloud
//!
//! Supersonic turbulence produces a lognormal distribution of the
//! overdensity `x = ρ/ρ₀`. With `s = ln x`, the distribution has width
//! `σ_s` and mean `s₀ = -σ_s²/2`. Star formation laws integrate the part
//! of this distribution above a critical log-density `s_crit`.

use statrs::function::erf::erf;

use crate::physics::traits::StarFormationLaw;

/// Mean of the log overdensity, `s₀ = -σ²/2`
pub fn mean_log_density(sigma: f64) -> f64 {
    -0.5 * sigma.powi(2)
}

/// Overdensity at the mean of the log distribution, `exp(-σ²/2)`
pub fn mean_overdensity_marker(sigma: f64) -> f64 {
    mean_log_density(sigma).exp()
}

/// Unnormalized lognormal profile of the overdensity `x`
///
/// ```text
/// p(x) = exp(-(ln x - s₀)² / (2σ²))
/// ```
///
/// Peaks at 1 for `x = exp(s₀)`.
pub fn lognormal(x: f64, sigma: f64) -> f64 {
    let s0 = mean_log_density(sigma);
    (-((x.ln() - s0).powi(2) / (2.0 * sigma.powi(2)))).exp()
}

/// Error-function term of the collapsing mass fraction
///
/// ```text
/// erf((σ_s² - 2s) / sqrt(8σ_s²))
/// ```
///
/// `(1 + collapse_erf(σ_s, s)) / 2` is the mass fraction above `s`.
pub fn collapse_erf(sigma_s: f64, s: f64) -> f64 {
    erf((sigma_s.powi(2) - 2.0 * s) / (8.0 * sigma_s.powi(2)).sqrt())
}

/// Overdensity grid spanning `±decades` around a mean density
///
/// Points are spaced evenly in log10 between `mean·10^-decades` and
/// `mean·10^decades`, then divided by `mean`.
pub fn overdensity_grid(mean_density: f64, decades: f64, n: usize) -> Vec<f64> {
    let center = mean_density.log10();
    crate::physics::LawData::logspace(center - decades, center + decades, n)
        .iter()
        .map(|density| density / mean_density)
        .collect()
}

/// Lognormal profile of one law, with its collapse threshold
///
/// This is what a density panel displays: the profile over an overdensity
/// grid, the threshold `exp(scrit)` and the region above it.
#[derive(Debug, Clone)]
pub struct DensityProfile {
    /// Law identifier
    pub law: &'static str,

    /// Mach number of the cloud
    pub mach: f64,

    /// Plasma beta of the cloud
    pub beta: f64,

    /// Width of the log distribution
    pub sigma_s: f64,

    /// Critical log-density
    pub scrit: f64,

    /// Overdensity grid
    pub overdensity: Vec<f64>,

    /// Lognormal profile on the grid
    pub profile: Vec<f64>,
}

impl DensityProfile {
    /// Evaluate a law's profile on an overdensity grid
    pub fn from_law(law: &dyn StarFormationLaw, overdensity: &[f64]) -> Self {
        let sigma_s = law.sigma_s();
        let profile = overdensity.iter().map(|x| lognormal(*x, sigma_s)).collect();

        Self {
            law: law.name(),
            mach: law.cloud().mach,
            beta: law.cloud().beta,
            sigma_s,
            scrit: law.scrit(),
            overdensity: overdensity.to_vec(),
            profile,
        }
    }

    /// Critical overdensity, `exp(scrit)`
    pub fn threshold(&self) -> f64 {
        self.scrit.exp()
    }

    /// Overdensity of the distribution's log-mean
    pub fn mean_marker(&self) -> f64 {
        mean_overdensity_marker(self.sigma_s)
    }

    /// Points of the profile strictly above the threshold
    pub fn above_threshold(&self) -> Vec<(f64, f64)> {
        let threshold = self.threshold();
        self.overdensity
            .iter()
            .zip(self.profile.iter())
            .filter(|(x, _)| **x > threshold)
            .map(|(x, p)| (*x, *p))
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
