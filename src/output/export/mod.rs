//! Export module for sweep results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//! Adding a new format means adding a file, without modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use sflaws::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // One law, all quantities
//! exporter.export_sweep(&km2005, "km2005_mach.csv")?;
//!
//! // Several laws over the same Mach values
//! exporter.export_comparison(&[km2005, pn2011, hc2011], "laws_mach.csv")?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can write:
//   use sflaws::output::export::{CsvExporter, CsvConfig, CsvError};
// instead of the full sub-module path.
pub use csv::{
    export_comparison_csv,
    export_sweep_csv,
    CsvConfig,
    CsvError,
    CsvExporter,
    CsvMetadata,
};

use crate::sweep::SweepResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
/// This avoids systematic boxing (`Box<dyn Error>`) and allows
/// the caller to react precisely based on the error type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports one sweep: the swept parameter, `sigma_s`, `scrit`, and
    /// `SFR_ff` when the law has one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data
    fn export_sweep(&self, result: &SweepResult, path: &str) -> Result<(), Self::Error>;

    /// Exports several sweeps sharing their parameter values, one column
    /// group per law.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the sweeps do not share the same parameter values
    /// - the path is invalid
    /// - `results` is empty
    fn export_comparison(&self, results: &[SweepResult], path: &str) -> Result<(), Self::Error>;
}
