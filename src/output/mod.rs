//! Output module for simulation results
//!
//! This module provides tools to output simulation results:
//! - **Visualization**: PNG/SVG profile plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file (shared helpers)
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! Both sub-modules accept plain `&[f64]` slices, and offer a variant taking
//! a [`SimulationResult`](crate::solver::SimulationResult) with its [`Grid`](crate::models::Grid).

pub mod export;
pub mod visualization;

pub use export::{
    CsvConfig, CsvExporter, CsvMetadata, Exporter, export_profile_csv, export_profiles_csv,
};
pub use visualization::{PlotConfig, plot_profile, plot_profile_comparison, plot_profile_evolution};

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::{PhysicalQuantity, PhysicalState};

/// Indices of `n` trajectory entries spread uniformly over `0..total`
///
/// The first and last entries are always kept. `n >= total` keeps every
/// entry; `n == 1` keeps the last one only.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::snapshot_indices;
///
/// assert_eq!(snapshot_indices(11, 3), vec![0, 5, 10]);
/// assert_eq!(snapshot_indices(4, 10), vec![0, 1, 2, 3]);
/// ```
pub fn snapshot_indices(total: usize, n: usize) -> Vec<usize> {
    if total == 0 || n == 0 {
        return Vec::new();
    }
    if n >= total {
        return (0..total).collect();
    }
    if n == 1 {
        return vec![total - 1];
    }

    let last = total - 1;
    let mut indices: Vec<usize> = (0..n)
        .map(|k| ((k as f64) * (last as f64) / ((n - 1) as f64)).round() as usize)
        .collect();
    indices.dedup();
    indices
}

/// Vector profile of `quantity` in `state`, or an error naming the quantity
pub(crate) fn state_profile(
    state: &PhysicalState,
    quantity: PhysicalQuantity,
) -> DiffusionResult<&[f64]> {
    state
        .profile(quantity)
        .ok_or(DiffusionError::MissingQuantity(quantity))
}
