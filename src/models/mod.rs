//! Star formation laws
//!
//! All laws implement the [`StarFormationLaw`] trait. A law is
//! responsible for its critical density and its SFR_ff formula; the
//! turbulent variance `sigma_s` is shared through the trait.
//!
//! # Available Laws
//!
//! ## [`KM2005`]: Krumholz & McKee
//!
//! Threshold set by the sonic scale of a core, calibrated by `phi_x`.
//!
//! ## [`PN2011`]: Padoan & Nordlund
//!
//! Threshold set by the post-shock layer, with a magnetic correction
//! `f(β)` and the scale ratio `theta`.
//!
//! ## [`HC2011`] and [`HC2011Multiff`]: Hennebelle & Chabrier
//!
//! Thermal plus turbulent thresholds scaled by `y_cut`. No closed-form
//! SFR_ff: both return [`LawError::NotImplemented`](crate::error::LawError).
//!
//! ## [`Burkhart2018`]
//!
//! Lognormal PDF with a self-gravitating power-law tail of slope `alpha`.
//!
//! # Selecting a law at runtime
//!
//! [`LawKind`] names every law and builds it from cloud parameters:
//!
//! ```rust
//! use sflaws::models::LawKind;
//!
//! for kind in LawKind::ALL {
//!     let law = kind.build(kind.default_cloud());
//!     assert_eq!(law.name(), kind.name());
//! }
//! ```

use std::fmt;
use std::str::FromStr;

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod km2005;
pub mod pn2011;
pub mod hc2011;
pub mod burkhart2018;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use burkhart2018::Burkhart2018;
pub use hc2011::{HC2011, HC2011Multiff};
pub use km2005::KM2005;
pub use pn2011::PN2011;

use crate::physics::{CloudParameters, StarFormationLaw};

/// Identifier of every available law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawKind {
    KM2005,
    PN2011,
    HC2011,
    HC2011Multiff,
    Burkhart2018,
}

impl LawKind {
    /// Every law, in publication order
    pub const ALL: [LawKind; 5] = [
        LawKind::KM2005,
        LawKind::PN2011,
        LawKind::HC2011,
        LawKind::HC2011Multiff,
        LawKind::Burkhart2018,
    ];

    /// Get name identifier (matches [`StarFormationLaw::name`])
    pub fn name(&self) -> &'static str {
        match self {
            LawKind::KM2005 => "KM2005",
            LawKind::PN2011 => "PN2011",
            LawKind::HC2011 => "HC2011",
            LawKind::HC2011Multiff => "HC2011_multiff",
            LawKind::Burkhart2018 => "Burkhart2018",
        }
    }

    /// Default cloud parameters of this law
    pub fn default_cloud(&self) -> CloudParameters {
        match self {
            LawKind::KM2005 => KM2005::default_cloud(),
            LawKind::PN2011 => PN2011::default_cloud(),
            LawKind::HC2011 => HC2011::default_cloud(),
            LawKind::HC2011Multiff => HC2011Multiff::default_cloud(),
            LawKind::Burkhart2018 => Burkhart2018::default_cloud(),
        }
    }

    /// Build the law with default law-specific constants
    pub fn build(&self, cloud: CloudParameters) -> Box<dyn StarFormationLaw> {
        match self {
            LawKind::KM2005 => Box::new(KM2005::new(cloud)),
            LawKind::PN2011 => Box::new(PN2011::new(cloud)),
            LawKind::HC2011 => Box::new(HC2011::new(cloud)),
            LawKind::HC2011Multiff => Box::new(HC2011Multiff::new(cloud)),
            LawKind::Burkhart2018 => Box::new(Burkhart2018::new(cloud)),
        }
    }

    /// Whether the law has a closed-form SFR_ff
    pub fn has_sfr(&self) -> bool {
        !matches!(self, LawKind::HC2011 | LawKind::HC2011Multiff)
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LawKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LawKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown star formation law: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_laws() {
        for kind in LawKind::ALL {
            let law = kind.build(kind.default_cloud());
            assert_eq!(law.name(), kind.name());
            assert_eq!(law.sfr_ff().is_ok(), kind.has_sfr());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("km2005".parse::<LawKind>().unwrap(), LawKind::KM2005);
        assert_eq!("HC2011_multiff".parse::<LawKind>().unwrap(), LawKind::HC2011Multiff);
        assert!("KM2006".parse::<LawKind>().is_err());
    }

    #[test]
    fn test_default_clouds_differ() {
        assert_eq!(LawKind::PN2011.default_cloud().phi_t, 1.0 / 1.5);
        assert_eq!(LawKind::HC2011.default_cloud().phi_t, 1.0 / 0.24);
        assert_eq!(LawKind::Burkhart2018.default_cloud().beta, 20.0);
    }
}
