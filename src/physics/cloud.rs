//! Cloud parameters shared by every star formation law
//!
//! A molecular cloud is described by its turbulence (Mach number, driving
//! parameter `b`), its magnetization (plasma beta) and its dynamical state
//! (virial parameter), plus the two efficiency factors `epsilon` and
//! `phi_t` that every SFR_ff formula carries.

use std::f64::consts::PI;

/// Parameters common to all star formation laws
///
/// `beta = f64::INFINITY` means the cloud is not magnetized.
///
/// Each law has its own defaults (see `KM2005::default_cloud()` and
/// friends); [`CloudParameters::default`] matches the KM2005 set.
///
/// # Example
///
/// ```rust
/// use sflaws::physics::CloudParameters;
///
/// let cloud = CloudParameters::default()
///     .with_mach(20.0)
///     .with_beta(2.0);
///
/// assert!(cloud.is_magnetized());
/// assert!(cloud.sigma_s() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudParameters {
    /// Turbulent (sonic) Mach number
    pub mach: f64,

    /// Plasma beta, thermal over magnetic pressure
    pub beta: f64,

    /// Turbulence driving parameter (1/3 solenoidal, 1 compressive)
    pub b: f64,

    /// Virial parameter
    pub alpha_vir: f64,

    /// Local core-to-star efficiency
    pub epsilon: f64,

    /// Free-fall time scaling factor
    pub phi_t: f64,
}

impl Default for CloudParameters {
    fn default() -> Self {
        Self {
            mach: 10.0,
            beta: f64::INFINITY,
            b: 0.4,
            alpha_vir: 1.0,
            epsilon: 0.3,
            phi_t: 1.0 / 3.0,
        }
    }
}

impl CloudParameters {
    /// Builder pattern: set Mach number
    pub fn with_mach(mut self, mach: f64) -> Self {
        self.mach = mach;
        self
    }

    /// Builder pattern: set plasma beta
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Builder pattern: set driving parameter
    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    /// Builder pattern: set virial parameter
    pub fn with_alpha_vir(mut self, alpha_vir: f64) -> Self {
        self.alpha_vir = alpha_vir;
        self
    }

    /// Builder pattern: set efficiency
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder pattern: set free-fall time factor
    pub fn with_phi_t(mut self, phi_t: f64) -> Self {
        self.phi_t = phi_t;
        self
    }

    /// Whether a magnetic field is present (finite beta)
    pub fn is_magnetized(&self) -> bool {
        !self.beta.is_infinite()
    }

    /// Standard deviation of the log overdensity
    ///
    /// ```text
    /// σ_s = ln(1 + b²·M²)                  (β = ∞)
    /// σ_s = ln(1 + b²·M²·β/(β+1))          (β finite)
    /// ```
    ///
    /// Non-negative and increasing in Mach for `b ≥ 0`, `β > 0`.
    pub fn sigma_s(&self) -> f64 {
        let turbulent = self.b.powi(2) * self.mach.powi(2);

        if self.is_magnetized() {
            (1.0 + turbulent * (self.beta / (self.beta + 1.0))).ln()
        } else {
            (1.0 + turbulent).ln()
        }
    }
}

/// Magnetic correction of the critical density
///
/// ```text
/// f(β) = (1 + 0.925·β^(-3/2))^(2/3) / (1 + 1/β)²
/// ```
///
/// Equals 1 for an unmagnetized cloud (`β = ∞`) and drops below 1 as the
/// field strengthens.
pub fn fbeta(beta: f64) -> f64 {
    (1.0 + 0.925 * beta.powf(-1.5)).powf(2.0 / 3.0) / (1.0 + beta.recip()).powi(2)
}

/// `π²/5`, the prefactor of the KM2005 and HC2011 thermal thresholds
pub(crate) const PI2_OVER_5: f64 = PI * PI / 5.0;

/// `π²/15`, the prefactor of the turbulent thresholds
pub(crate) const PI2_OVER_15: f64 = PI * PI / 15.0;

// =================================================================================================
// Tests
// =================================================================================================
