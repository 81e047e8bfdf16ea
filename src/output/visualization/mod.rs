//! Visualization module for star formation law results
//!
//! This module provides tools to visualize law evaluations using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`) and law colors
//! - **density_panels**: Mach × Beta grids of lognormal density profiles
//! - **sfr**: SFR_ff curves along a parameter sweep
//!
//! # Quick Start
//!
//! ## Density Panels
//!
//! ```rust,ignore
//! use sflaws::output::visualization::{plot_density_panels, PlotConfig};
//!
//! let grid = overdensity_grid(1e4, 10.0, 10_000);
//! plot_density_panels(&law, &[5.0, 10.0, 20.0], &[f64::INFINITY, 2.0, 1.25], &grid,
//!                     "KM2005_machbetaplots.png", None)?;
//! ```
//!
//! ## SFR Sweep
//!
//! ```rust,ignore
//! use sflaws::output::visualization::{plot_sfr_sweep, PlotConfig};
//!
//! let mut config = PlotConfig::sfr_sweep("SFR vs Mach");
//! config.log_y = true;
//! plot_sfr_sweep(&results, "sfr.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Module
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Density PDF and threshold per (Mach, Beta) | `density_panels` | `plot_density_panels` |
//! | Panel data without plotting | `density_panels` | `density_panel_profiles` |
//! | Compare laws along a sweep | `sfr` | `plot_sfr_sweep` |
//! | Several sweeps of one law | `sfr` | `plot_sfr_sweep_labeled` |

pub mod config;
pub mod density_panels;
pub mod sfr;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use density_panels::{density_panel_profiles, plot_density_panels};

pub use sfr::{plot_sfr_sweep, plot_sfr_sweep_labeled};
