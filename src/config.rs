//! Simulation configuration
//!
//! [`DiffusionConfig`] gathers every physical and numerical parameter of a
//! run. Missing fields take the values of the reference step-diffusion case,
//! so an empty JSON object `{}` describes that case.
//!
//! ```json
//! {
//!     "diffusivity": 100.0,
//!     "length": 300.0,
//!     "dx": 0.5,
//!     "time_steps": 5000,
//!     "diffusion_number": 0.5,
//!     "initial": { "kind": "step", "left": 500.0, "right": 0.0 }
//! }
//! ```
//!
//! The time step is not given directly: it is derived from the diffusion
//! number, `dt = r · dx² / D`, and `r` is bounded by the explicit stability
//! limit 0.5.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiffusionError, DiffusionResult};
use crate::models::{Grid, InitialProfile};
use crate::solver::stencil::{STABILITY_LIMIT, check_positive, stable_time_step};

/// Parameters of a 1D diffusion run
///
/// # Example
///
/// ```rust
/// use diffusion_rs::config::DiffusionConfig;
///
/// let config = DiffusionConfig::default();
///
/// assert_eq!(config.grid_points(), 600);
/// assert!((config.time_step() - 0.00125).abs() < 1e-15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffusionConfig {
    /// Diffusivity D
    pub diffusivity: f64,

    /// Domain length Lx
    pub length: f64,

    /// Grid spacing dx
    pub dx: f64,

    /// Number of time steps nt
    pub time_steps: usize,

    /// Diffusion number r = D·dt/dx², in (0, 0.5]
    pub diffusion_number: f64,

    /// Initial profile C(x, 0)
    pub initial: InitialProfile,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            diffusivity: 100.0,
            length: 300.0,
            dx: 0.5,
            time_steps: 5000,
            diffusion_number: STABILITY_LIMIT,
            initial: InitialProfile::default(),
        }
    }
}

impl DiffusionConfig {
    // ========================================= Builders ==========================================

    pub fn with_diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = diffusivity;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    pub fn with_diffusion_number(mut self, diffusion_number: f64) -> Self {
        self.diffusion_number = diffusion_number;
        self
    }

    pub fn with_initial(mut self, initial: InitialProfile) -> Self {
        self.initial = initial;
        self
    }

    // ======================================== Validation =========================================

    /// Check every parameter before any step is taken
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::InvalidParameter`] for a non-positive or non-finite
    ///   `diffusivity`, `length`, `dx` or `diffusion_number`
    /// - [`DiffusionError::UnstableTimeStep`] when `diffusion_number > 0.5`
    /// - [`DiffusionError::InvalidConfiguration`] when the grid has no point
    ///   or more than [`MAX_GRID_POINTS`](crate::models::grid::MAX_GRID_POINTS)
    pub fn validate(&self) -> DiffusionResult<()> {
        check_positive("diffusivity", self.diffusivity)?;
        check_positive("length", self.length)?;
        check_positive("dx", self.dx)?;
        check_positive("diffusion_number", self.diffusion_number)?;

        if self.diffusion_number > STABILITY_LIMIT {
            return Err(DiffusionError::UnstableTimeStep {
                r: self.diffusion_number,
                limit: STABILITY_LIMIT,
            });
        }

        Grid::checked_point_count(self.length, self.dx)?;

        self.initial.validate()
    }

    // ==================================== Derived quantities =====================================

    /// Number of grid points nx, 0 when `length / dx` gives no usable grid
    pub fn grid_points(&self) -> usize {
        Grid::point_count(self.length, self.dx).unwrap_or(0)
    }

    /// Time step dt = r·dx²/D
    pub fn time_step(&self) -> f64 {
        stable_time_step(self.diffusivity, self.dx, self.diffusion_number)
    }

    /// Simulated time nt·dt
    pub fn total_time(&self) -> f64 {
        self.time_steps as f64 * self.time_step()
    }

    /// Grid described by `length` and `dx`
    pub fn grid(&self) -> DiffusionResult<Grid> {
        Grid::uniform(self.length, self.dx)
    }

    // ========================================= Loading ===========================================

    /// Parse and validate a JSON configuration
    pub fn from_json_str(text: &str) -> DiffusionResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> DiffusionResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");

        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON of the configuration
    pub fn to_json_pretty(&self) -> DiffusionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
