//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and existing code is left untouched.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust
//! use diffusion_rs::config::DiffusionConfig;
//! use diffusion_rs::models::build_scenario;
//! use diffusion_rs::output::export::{CsvExporter, Exporter};
//! use diffusion_rs::solver::{EulerSolver, Solver, SolverConfiguration};
//!
//! let config = DiffusionConfig::default().with_time_steps(20);
//! let scenario = build_scenario(&config).unwrap();
//! let result = EulerSolver::new()
//!     .solve(&scenario, &SolverConfiguration::fixed_step(config.time_step(), config.time_steps))
//!     .unwrap();
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("profiles.csv");
//!
//! // Initial, middle and final profiles
//! CsvExporter::default()
//!     .export_result(&result, &config.grid().unwrap(), Some(3), path.to_str().unwrap())
//!     .unwrap();
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvExporter, CsvMetadata, export_profile_csv, export_profiles_csv};

use crate::models::Grid;
use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
///
/// # Parameter `n_snapshots`
///
/// - `None`: exports every recorded state
/// - `Some(n)`: uniformly downsamples to `n` states, always including the
///   **first and last** (initial condition and final profile)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports recorded profiles, one column per snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data
    fn export_result(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        n_snapshots: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports the final profile only.
    fn export_final(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> Result<(), Self::Error>;
}
