//! Output module for law evaluations
//!
//! This module provides tools to output sweep results in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── density_panels.rs
//! │   └── sfr.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use sflaws::output::{plot_sfr_sweep, PlotConfig};
//!
//! plot_sfr_sweep(&results, "sfr.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use sflaws::output::{export_sweep_csv, CsvConfig};
//!
//! export_sweep_csv(&result, "km2005.csv", None)?;
//! ```
//!
//! Both sub-modules take [`SweepResult`](crate::sweep::SweepResult)s, so
//! the same evaluation feeds plots and files.

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_density_panels,
    plot_sfr_sweep,
    plot_sfr_sweep_labeled,
    PlotConfig,
};

pub use export::{
    export_comparison_csv,
    export_sweep_csv,
    CsvConfig,
    Exporter,
};
