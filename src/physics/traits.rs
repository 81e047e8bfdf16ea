//! Star formation law trait and quantity identifiers
//!
//! This module defines the core API shared by every law:
//! - `StarFormationLaw`: trait for all analytic SFR_ff laws
//! - `LawQuantity`: type-safe identifiers for the derived quantities

use std::fmt;

use crate::error::LawError;
use crate::physics::cloud::CloudParameters;

// =================================================================================================
// Law quantities (Type-safe Identifiers)
// =================================================================================================

/// Quantities a law can derive from its parameters
///
/// # Example
/// ```
/// use sflaws::physics::LawQuantity;
///
/// assert_eq!(LawQuantity::SfrFf.to_string(), "SFR_ff");
/// assert_eq!(LawQuantity::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawQuantity {
    /// Standard deviation of the log overdensity
    SigmaS,

    /// Logarithm of the critical overdensity
    Scrit,

    /// Critical overdensity itself, `exp(scrit)`
    CriticalDensity,

    /// Star formation rate per free-fall time
    SfrFf,
}

impl LawQuantity {
    /// Every quantity, in evaluation order
    pub const ALL: [LawQuantity; 4] = [
        LawQuantity::SigmaS,
        LawQuantity::Scrit,
        LawQuantity::CriticalDensity,
        LawQuantity::SfrFf,
    ];

    /// Short column-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            LawQuantity::SigmaS => "sigma_s",
            LawQuantity::Scrit => "scrit",
            LawQuantity::CriticalDensity => "rho_crit",
            LawQuantity::SfrFf => "SFR_ff",
        }
    }
}

impl fmt::Display for LawQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =================================================================================================
// Star Formation Law Trait
// =================================================================================================

/// Trait for analytic star formation laws
///
/// # Responsibility
/// Turns a fixed set of cloud parameters into three derived quantities:
/// the log-density variance `sigma_s`, the critical log-density `scrit`
/// and the dimensionless star formation rate per free-fall time.
///
/// # Immutability
/// A law is built once and only queried afterwards. Changing a parameter
/// means building a new law, either through the law's own `with_*`
/// methods or through [`StarFormationLaw::rebuild`]. Laws that cache
/// derived state at construction (Burkhart2018) rely on this.
///
/// # Implementing a new law
///
/// `scrit` and `sfr_ff` have no default: a law without a closed form for
/// the SFR must say so explicitly with [`LawError::NotImplemented`].
///
/// ```rust
/// use sflaws::error::LawError;
/// use sflaws::physics::{CloudParameters, StarFormationLaw};
///
/// struct Threshold {
///     cloud: CloudParameters,
/// }
///
/// impl StarFormationLaw for Threshold {
///     fn name(&self) -> &'static str { "Threshold" }
///     fn cloud(&self) -> &CloudParameters { &self.cloud }
///     fn scrit(&self) -> f64 { 1.0 }
///     fn sfr_ff(&self) -> Result<f64, LawError> {
///         Err(LawError::sfr_not_implemented("Threshold"))
///     }
///     fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
///         Box::new(Threshold { cloud })
///     }
/// }
///
/// let law = Threshold { cloud: CloudParameters::default() };
/// assert!(law.sigma_s() > 0.0);
/// assert!(law.sfr_ff().is_err());
/// ```
pub trait StarFormationLaw: Send + Sync {
    /// Law identifier (used for display, logging and error reporting)
    fn name(&self) -> &'static str;

    /// Literature reference of the parametrization (optional)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Parameters shared by all laws
    fn cloud(&self) -> &CloudParameters;

    /// Standard deviation of the log overdensity
    ///
    /// Every law shares the same turbulent variance, see
    /// [`CloudParameters::sigma_s`].
    fn sigma_s(&self) -> f64 {
        self.cloud().sigma_s()
    }

    /// Logarithm of the critical overdensity above which gas collapses
    fn scrit(&self) -> f64;

    /// Star formation rate per free-fall time
    ///
    /// # Errors
    /// [`LawError::NotImplemented`] when the law has no closed form.
    fn sfr_ff(&self) -> Result<f64, LawError>;

    /// Build the same law (same law-specific constants) on new cloud parameters
    fn rebuild(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw>;

    /// Critical overdensity, `exp(scrit)`
    fn critical_density(&self) -> f64 {
        self.scrit().exp()
    }

    /// Evaluate a quantity by identifier
    fn evaluate(&self, quantity: LawQuantity) -> Result<f64, LawError> {
        match quantity {
            LawQuantity::SigmaS => Ok(self.sigma_s()),
            LawQuantity::Scrit => Ok(self.scrit()),
            LawQuantity::CriticalDensity => Ok(self.critical_density()),
            LawQuantity::SfrFf => self.sfr_ff(),
        }
    }
}

impl fmt::Debug for dyn StarFormationLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarFormationLaw")
            .field("name", &self.name())
            .field("cloud", self.cloud())
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
