//! sflaws: Analytic Star Formation Laws
//!
//! Evaluation of the turbulence-regulated star formation laws compared by
//! Federrath & Klessen (2012) plus Burkhart (2018): the log-density
//! variance of a supersonic cloud, the critical log-density above which
//! gas collapses, and the star formation rate per free-fall time.
//!
//! # Architecture
//!
//! sflaws is built on two core principles:
//!
//! 1. **Separation of Physics and Evaluation**
//!    - Laws define equations on scalar cloud parameters
//!    - Sweeps evaluate them over arrays of parameter values
//!
//! 2. **Extensibility and Type Safety**
//!    - Every law implements [`physics::StarFormationLaw`]
//!    - A missing formula is a typed error, not a sentinel value
//!
//! # Quick Start
//!
//! ```rust
//! use sflaws::prelude::*;
//!
//! // 1. Build a law from cloud parameters
//! let cloud = CloudParameters::default().with_mach(20.0).with_beta(2.0);
//! let law = KM2005::new(cloud);
//!
//! // 2. Scalar evaluation
//! let sfr = law.sfr_ff().unwrap();
//! assert!(sfr > 0.0);
//!
//! // 3. Sweep the Mach number
//! let machs = LawData::linspace(1.0, 30.0, 30);
//! let scrit = sweep::evaluate(&law, LawQuantity::Scrit, SweepParameter::Mach, &machs).unwrap();
//! assert_eq!(scrit.shape(), machs.shape());
//!
//! // 4. Laws without a closed-form SFR say so
//! let hc = HC2011::default();
//! assert!(hc.sfr_ff().unwrap_err().is_not_implemented());
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Cloud parameters, the law trait, density statistics
//! - [`models`]: The five star formation laws
//! - [`sweep`]: Vectorized evaluation over parameter arrays
//! - [`output`]: Plots and CSV export
//! - [`error`]: Error types

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod sweep;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use sflaws::prelude::*;
    //! ```
    pub use crate::error::LawError;
    pub use crate::models::{Burkhart2018,
                            HC2011,
                            HC2011Multiff,
                            KM2005,
                            LawKind,
                            PN2011};
    pub use crate::physics::{CloudParameters,
                             LawData,
                             LawQuantity,
                             StarFormationLaw};
    pub use crate::sweep::{self,
                           SweepParameter,
                           SweepResult};
}
