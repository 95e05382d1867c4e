//! Visualization of diffusion results
//!
//! This module renders spatial profiles with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (concentration vs position)
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One profile | `plot_profile` |
//! | Initial vs final profile | `plot_profile_comparison` |
//! | Profile evolution over time | `plot_profile_evolution` |

pub mod config;
pub mod profile;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};

pub use profile::{ProfileSeries, plot_profile, plot_profile_comparison, plot_profile_evolution};
