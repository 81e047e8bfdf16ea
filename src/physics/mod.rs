//! Physics of turbulent star formation
//!
//! This module provides the trait shared by every star formation law and
//! the physics the laws are built from.
//!
//! # Core Concepts
//!
//! - **Cloud parameters**: Mach number, plasma beta, driving parameter, virial parameter
//! - **Star formation law**: turns cloud parameters into `sigma_s`, `scrit` and SFR_ff
//! - **Law quantity**: type-safe identifier for the derived quantities
//! - **Law data**: scalar or array container used for vectorized sweeps
//!
//! # Architecture
//!
//! Laws are **separate from sweeps and output**:
//! - A law provides the **formulas** (physics)
//! - The sweep engine evaluates them over **arrays** of parameters
//! - The output layer **renders** the results
//!
//! # Example
//!
//! ```rust
//! use sflaws::models::KM2005;
//! use sflaws::physics::StarFormationLaw;
//!
//! let law = KM2005::new(KM2005::default_cloud().with_mach(20.0));
//!
//! let sigma_s = law.sigma_s();
//! let scrit = law.scrit();
//! let sfr = law.sfr_ff().unwrap();
//!
//! assert!(sigma_s > 0.0);
//! assert!(scrit.is_finite());
//! assert!(sfr > 0.0);
//! ```
//!
//! # Available Laws
//!
//! See [`crate::models`]: KM2005, PN2011, HC2011, HC2011_multiff, Burkhart2018.

// module declaration
pub mod traits;
pub mod cloud;
pub mod data;
pub mod density;
pub mod constants;

// re-export commonly used types for convenience
pub use cloud::{fbeta, CloudParameters};
pub use data::LawData;
pub use density::{collapse_erf, lognormal, DensityProfile};
pub use traits::{LawQuantity, StarFormationLaw};
