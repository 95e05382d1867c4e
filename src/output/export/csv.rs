//! CSV export of diffusion profiles
//!
//! Profiles are written column-wise: the first column is the position, then
//! one column per profile. The format opens in spreadsheets, pandas or
//! MATLAB.
//!
//! # Features
//!
//! - **Simple interface**: Export with `&[f64]` slices
//! - **Metadata support**: Optional `#` header with run parameters and a timestamp
//! - **Customizable**: Delimiter, decimal separator, precision
//! - **Validation**: Checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ```rust
//! use diffusion_rs::output::export::export_profiles_csv;
//!
//! let x = vec![0.0, 0.5, 1.0];
//! let initial = vec![500.0, 500.0, 0.0];
//! let last = vec![500.0, 250.0, 0.0];
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("profiles.csv");
//!
//! let series = [("t=0", initial.as_slice()), ("t=1", last.as_slice())];
//! export_profiles_csv(&x, &series, path.to_str().unwrap(), None).unwrap();
//!
//! let text = std::fs::read_to_string(&path).unwrap();
//! assert_eq!(text.lines().next(), Some("x,t=0,t=1"));
//! ```
//!
//! **With metadata** the file starts with:
//!
//! ```csv
//! # Diffusion Simulation Data
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Model: Linear Diffusion
//! # Solver: Forward Euler
//! # Total Time: 6.25
//! # Time Steps: 5000
//! # Diffusion Number: 0.5
//! #
//! x,t=0.0000,t=6.2500
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::debug;

use crate::error::{DiffusionError, DiffusionResult};
use crate::models::Grid;
use crate::output::export::Exporter;
use crate::output::{snapshot_indices, state_profile};
use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.position_header, "x");
/// ```
#[derive(Clone, Debug)]
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

    /// Header of the position column (default: "x")
    pub position_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
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

    /// Builder pattern: enable metadata
    ///
    /// With [`CsvExporter`], `None` metadata is filled from the result.
    pub fn with_metadata(mut self, metadata: Option<CsvMetadata>) -> Self {
        self.include_metadata = true;
        self.metadata = metadata;
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CsvMetadata {
    pub model_name: Option<String>,
    pub solver_name: Option<String>,
    pub total_time: Option<f64>,
    pub time_steps: Option<usize>,
    pub dt: Option<f64>,
    pub diffusion_number: Option<f64>,

    /// Additional parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Read the metadata recorded by a solver
    pub fn from_result(result: &SimulationResult) -> Self {
        let text = |key: &str| result.metadata.get(key).cloned();
        let number = |key: &str| parse_entry(&result.metadata, key);

        Self {
            model_name: text("model"),
            solver_name: text("solver"),
            total_time: number("total time"),
            time_steps: result.metadata.get("time steps").and_then(|v| v.parse().ok()),
            dt: number("dt"),
            diffusion_number: number("diffusion number"),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

fn parse_entry(metadata: &HashMap<String, String>, key: &str) -> Option<f64> {
    metadata.get(key).and_then(|value| value.parse().ok())
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header(out: &mut impl Write, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Diffusion Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(total_time) = metadata.total_time {
        writeln!(out, "# Total Time: {}", total_time)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# Time Step: {}", dt)?;
    }
    if let Some(r) = metadata.diffusion_number {
        writeln!(out, "# Diffusion Number: {}", r)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured precision and decimal separator
/// Header field, quoted (inner quotes doubled) when it holds the delimiter,
/// a quote or a line break
fn quote_field(field: &str, delimiter: char) -> Cow<'_, str> {
    if field.contains([delimiter, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one profile: columns `x` and `value_header`
pub fn export_profile_csv(
    positions: &[f64],
    values: &[f64],
    value_header: &str,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> DiffusionResult<()> {
    export_profiles_csv(positions, &[(value_header, values)], output_path, configuration)
}

/// Export several profiles sharing the same positions
///
/// # Errors
///
/// - [`DiffusionError::Export`] for empty data, mismatched lengths or NaN/Inf values
/// - [`DiffusionError::Io`] when the file cannot be written
pub fn export_profiles_csv(
    positions: &[f64],
    series: &[(&str, &[f64])],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> DiffusionResult<()> {
    // ============================= Validation =============================

    if positions.is_empty() || series.is_empty() {
        return Err(DiffusionError::Export(
            "Empty data: positions and profiles must not be empty".into(),
        ));
    }

    if positions.iter().any(|x| !x.is_finite()) {
        return Err(DiffusionError::Export("Invalid data: NaN or Inf detected in positions".into()));
    }

    for (label, values) in series {
        if values.len() != positions.len() {
            return Err(DiffusionError::Export(format!(
                "Profile [{}] length mismatch: {} values vs {} positions",
                label,
                values.len(),
                positions.len()
            )));
        }

        if values.iter().any(|c| !c.is_finite()) {
            return Err(DiffusionError::Export(format!(
                "Invalid data: NaN or Inf detected in profile {}",
                label
            )));
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut out, metadata)?;
    }

    let delimiter = configuration.delimiter;
    write!(out, "{}", quote_field(&configuration.position_header, delimiter))?;
    for (label, _) in series {
        write!(out, "{}{}", delimiter, quote_field(label, delimiter))?;
    }
    writeln!(out)?;

    for (i, x) in positions.iter().enumerate() {
        write!(out, "{}", format_number(*x, configuration))?;
        for (_, values) in series {
            write!(out, "{}{}", configuration.delimiter, format_number(values[i], configuration))?;
        }
        writeln!(out)?;
    }

    out.flush()?;

    debug!(path = output_path, columns = series.len(), rows = positions.len(), "CSV written");

    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,

    /// Exported quantity (default: concentration)
    pub quantity: Option<PhysicalQuantity>,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config, quantity: None }
    }

    /// Export another quantity than concentration
    pub fn with_quantity(mut self, quantity: PhysicalQuantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    fn quantity(&self) -> PhysicalQuantity {
        self.quantity.unwrap_or(PhysicalQuantity::Concentration)
    }

    /// Configuration with metadata filled from the result when requested but absent
    fn config_for(&self, result: &SimulationResult) -> CsvConfig {
        let mut config = self.config.clone();
        if config.include_metadata && config.metadata.is_none() {
            config.metadata = Some(CsvMetadata::from_result(result));
        }
        config
    }
}

impl Exporter for CsvExporter {
    type Error = DiffusionError;

    fn export_result(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        n_snapshots: Option<usize>,
        path: &str,
    ) -> DiffusionResult<()> {
        if result.is_empty() {
            return Err(DiffusionError::Export("Simulation result holds no state".into()));
        }

        let quantity = self.quantity();
        let indices = snapshot_indices(result.len(), n_snapshots.unwrap_or(result.len()));

        let mut labels = Vec::with_capacity(indices.len());
        let mut profiles = Vec::with_capacity(indices.len());
        for index in indices {
            labels.push(format!("t={:.4}", result.time_points[index]));
            profiles.push(state_profile(&result.state_trajectory[index], quantity)?);
        }

        let series: Vec<(&str, &[f64])> = labels
            .iter()
            .zip(&profiles)
            .map(|(label, profile)| (label.as_str(), *profile))
            .collect();

        export_profiles_csv(grid.positions(), &series, path, Some(&self.config_for(result)))
    }

    fn export_final(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> DiffusionResult<()> {
        let quantity = self.quantity();
        let profile = state_profile(&result.final_state, quantity)?;
        let header = quantity.to_string();

        export_profile_csv(grid.positions(), profile, &header, path, Some(&self.config_for(result)))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
