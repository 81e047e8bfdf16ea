//! CSV export functionality for star formation law sweeps
//!
//! This module exports sweep results to CSV (Comma-Separated Values)
//! format, which is compatible with Excel, Python pandas, MATLAB, and most data analysis tools.
//!
//! # Features
//!
//! - **Sweep export**: swept parameter, `sigma_s`, `scrit` and `SFR_ff` columns
//! - **Comparison export**: one shared parameter column, one column pair per law
//! - **Metadata support**: Optional headers with law and cloud parameters
//! - **Customizable**: Delimiter, precision, decimal separator
//! - **Validation**: Checks for empty data and mismatched lengths
//!
//! Non-finite values are valid law outputs (`scrit = inf` for β = 1 in
//! KM2005) and are written as `NaN`, `inf` or `-inf`.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,no_run
//! use sflaws::models::KM2005;
//! use sflaws::output::export::export_sweep_csv;
//! use sflaws::sweep::{SweepParameter, SweepResult};
//!
//! let result = SweepResult::compute(&KM2005::default(), SweepParameter::Mach, &[5.0, 10.0]).unwrap();
//! export_sweep_csv(&result, "km2005.csv", None).unwrap();
//! ```
//!
//! **Output** (`km2005.csv`):
//! ```csv
//! Mach,sigma_s,scrit,SFR_ff
//! 5.000000,1.609438,-0.341629,0.760878
//! 10.000000,2.833213,1.044665,0.767389
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_sweep(&result));
//! export_sweep_csv(&result, "km2005.csv", Some(&config))?;
//! ```
//!
//! **Output** (`km2005.csv`):
//! ```csv
//! # Star Formation Law Data
//! # Generated: 2026-02-11T15:30:00Z
//! # Law: KM2005
//! # Swept Parameter: Mach
//! # Mach: 10
//! # Beta: inf
//! # b: 0.4
//! # alpha_vir: 1
//! # epsilon: 0.3
//! # phi_t: 0.3333333333333333
//! #
//! Mach,sigma_s,scrit,SFR_ff
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::physics::{CloudParameters, LawQuantity};
use crate::sweep::SweepResult;

use super::Exporter;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while exporting CSV files
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to export
    #[error("Empty data: {0}")]
    EmptyData(&'static str),

    /// A column does not have as many rows as the parameter column
    #[error("Data length mismatch: column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Sweeps compared in one file do not share their parameter values
    #[error("Parameter mismatch: {law} sweeps {parameter}, expected {expected}")]
    ParameterMismatch {
        law: String,
        parameter: String,
        expected: String,
    },

    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with law info
/// - `metadata`: Law metadata to include
/// - `parameter_header`: Custom header for the parameter column
///
/// # Example
///
/// ```rust
/// use sflaws::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert!(!config.include_metadata);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Custom header for the parameter column (default: the parameter name)
    pub parameter_header: Option<String>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            parameter_header: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    ///
    /// ```rust
    /// use sflaws::output::export::CsvConfig;
    ///
    /// let config = CsvConfig::european();
    /// assert_eq!(config.delimiter, ';');
    /// assert_eq!(config.decimal_separator, ',');
    /// ```
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set the parameter column header
    pub fn parameter_header(mut self, header: impl Into<String>) -> Self {
        self.parameter_header = Some(header.into());
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields will be included in the CSV header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Law name (e.g., "KM2005")
    pub law_name: Option<String>,

    /// Name of the swept parameter
    pub swept_parameter: Option<String>,

    /// Cloud parameters shared by every row
    pub cloud: Option<CloudParameters>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from a sweep result
    pub fn from_sweep(result: &SweepResult) -> Self {
        Self {
            law_name: Some(result.law.clone()),
            swept_parameter: Some(result.parameter.clone()),
            cloud: Some(result.cloud),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(writer, "# Star Formation Law Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(law) = &metadata.law_name {
        writeln!(writer, "# Law: {}", law)?;
    }
    if let Some(parameter) = &metadata.swept_parameter {
        writeln!(writer, "# Swept Parameter: {}", parameter)?;
    }

    // Cloud parameters
    if let Some(cloud) = &metadata.cloud {
        writeln!(writer, "# Mach: {}", cloud.mach)?;
        writeln!(writer, "# Beta: {}", cloud.beta)?;
        writeln!(writer, "# b: {}", cloud.b)?;
        writeln!(writer, "# alpha_vir: {}", cloud.alpha_vir)?;
        writeln!(writer, "# epsilon: {}", cloud.epsilon)?;
        writeln!(writer, "# phi_t: {}", cloud.phi_t)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(writer, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Named columns of one sweep, in file order
fn sweep_columns(result: &SweepResult, prefix: Option<&str>) -> Vec<(String, Vec<f64>)> {
    let name = |quantity: LawQuantity| match prefix {
        Some(prefix) => format!("{}_{}", prefix, quantity),
        None => quantity.to_string(),
    };

    let mut columns = Vec::with_capacity(3);
    if prefix.is_none() {
        columns.push((name(LawQuantity::SigmaS), result.sigma_s.clone()));
    }
    columns.push((name(LawQuantity::Scrit), result.scrit.clone()));
    if let Some(sfr) = &result.sfr_ff {
        columns.push((name(LawQuantity::SfrFf), sfr.clone()));
    }
    columns
}

/// Write a header row and the parameter column followed by `columns`
fn write_table<W: Write>(
    writer: &mut W,
    parameter: &str,
    values: &[f64],
    columns: &[(String, Vec<f64>)],
    config: &CsvConfig,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    if values.is_empty() {
        return Err(CsvError::EmptyData("sweep has no parameter values"));
    }

    for (name, column) in columns {
        if column.len() != values.len() {
            return Err(CsvError::LengthMismatch {
                column: name.clone(),
                expected: values.len(),
                actual: column.len(),
            });
        }
    }

    // ============================= Write Metadata =========================

    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(writer, metadata)?;
    }

    // ============================= Write Header ===========================

    write!(writer, "{}", config.parameter_header.as_deref().unwrap_or(parameter))?;
    for (name, _) in columns {
        write!(writer, "{}{}", config.delimiter, name)?;
    }
    writeln!(writer)?;

    // ============================= Write Data =============================

    for (i, value) in values.iter().enumerate() {
        write!(writer, "{}", format_number(*value, config))?;
        for (_, column) in columns {
            write!(writer, "{}{}", config.delimiter, format_number(column[i], config))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write one sweep to any writer
pub fn write_sweep<W: Write>(
    writer: &mut W,
    result: &SweepResult,
    config: &CsvConfig,
) -> Result<(), CsvError> {
    write_table(writer, &result.parameter, &result.values, &sweep_columns(result, None), config)
}

/// Write several sweeps of the same parameter values side by side
///
/// Columns are `{law}_scrit` and, when available, `{law}_SFR_ff`.
pub fn write_comparison<W: Write>(
    writer: &mut W,
    results: &[SweepResult],
    config: &CsvConfig,
) -> Result<(), CsvError> {
    let Some(first) = results.first() else {
        return Err(CsvError::EmptyData("no sweeps to compare"));
    };

    for result in &results[1..] {
        if result.parameter != first.parameter || result.values != first.values {
            return Err(CsvError::ParameterMismatch {
                law: result.law.clone(),
                parameter: result.parameter.clone(),
                expected: first.parameter.clone(),
            });
        }
    }

    let columns: Vec<(String, Vec<f64>)> = results
        .iter()
        .flat_map(|result| sweep_columns(result, Some(result.law.as_str())))
        .collect();

    write_table(writer, &first.parameter, &first.values, &columns, config)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one sweep to a CSV file
///
/// # Errors
///
/// - Empty sweep
/// - Column length mismatch
/// - File creation errors
pub fn export_sweep_csv(
    result: &SweepResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_sweep(&mut writer, result, configuration)?;
    writer.flush()?;

    log::debug!("Exported {} rows of {} to {}", result.len(), result.law, output_path);
    Ok(())
}

/// Export several sweeps of the same parameter values to one CSV file
pub fn export_comparison_csv(
    results: &[SweepResult],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_comparison(&mut writer, results, configuration)?;
    writer.flush()?;

    log::debug!("Exported comparison of {} laws to {}", results.len(), output_path);
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
///
/// ```rust,no_run
/// use sflaws::models::KM2005;
/// use sflaws::output::export::{CsvConfig, CsvExporter, Exporter};
/// use sflaws::sweep::{SweepParameter, SweepResult};
///
/// let result = SweepResult::compute(&KM2005::default(), SweepParameter::Beta, &[1.25, 2.0]).unwrap();
/// let exporter = CsvExporter::new(CsvConfig::european());
/// exporter.export_sweep(&result, "km2005_beta.csv").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_sweep(&self, result: &SweepResult, path: &str) -> Result<(), Self::Error> {
        export_sweep_csv(result, path, Some(&self.config))
    }

    fn export_comparison(&self, results: &[SweepResult], path: &str) -> Result<(), Self::Error> {
        export_comparison_csv(results, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
