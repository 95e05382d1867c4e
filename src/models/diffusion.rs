//! Linear diffusion with fixed end values
//!
//! Semi-discrete form of ∂C/∂t = D·∂²C/∂x² on a uniform grid:
//!
//! ```text
//! dC[i]/dt = D · (C[i-1] - 2·C[i] + C[i+1]) / dx²     for 0 < i < nx-1
//! dC[i]/dt = 0                                         for i = 0 and i = nx-1
//! ```
//!
//! The zero rate on the end points makes them Dirichlet boundaries: whatever
//! the time integrator, they keep their initial values. Integrated with
//! [`EulerSolver`](crate::solver::EulerSolver) this is the FTCS scheme.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::config::DiffusionConfig;
//! use diffusion_rs::models::build_scenario;
//! use diffusion_rs::physics::PhysicalQuantity;
//! use diffusion_rs::solver::{EulerSolver, Solver, SolverConfiguration};
//!
//! let config = DiffusionConfig::default().with_time_steps(200);
//! let scenario = build_scenario(&config).unwrap();
//!
//! let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps);
//! let result = EulerSolver::new().solve(&scenario, &solver_config).unwrap();
//!
//! let profile = result.final_state.profile(PhysicalQuantity::Concentration).unwrap();
//! assert_eq!(profile[0], 500.0);
//! assert_eq!(profile[599], 0.0);
//! ```

use tracing::debug;

use crate::config::DiffusionConfig;
use crate::error::{DiffusionError, DiffusionResult};
use crate::models::{Grid, InitialProfile};
use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};
use crate::solver::stencil::{check_positive, diffusion_number, second_difference};
use crate::solver::{DomainBoundaries, Scenario};

/// Constant-diffusivity diffusion of one quantity on a uniform grid
#[derive(Debug, Clone)]
pub struct LinearDiffusion {
    grid: Grid,
    /// Diffusivity D \[length²/time\]
    diffusivity: f64,
    initial: InitialProfile,
    /// Transported quantity
    quantity: PhysicalQuantity,
}

impl LinearDiffusion {
    /// Create a model diffusing [`PhysicalQuantity::Concentration`]
    pub fn new(grid: Grid, diffusivity: f64, initial: InitialProfile) -> DiffusionResult<Self> {
        check_positive("diffusivity", diffusivity)?;
        initial.validate()?;

        Ok(Self {
            grid,
            diffusivity,
            initial,
            quantity: PhysicalQuantity::Concentration,
        })
    }

    /// Build the model described by a configuration
    pub fn from_config(config: &DiffusionConfig) -> DiffusionResult<Self> {
        Self::new(config.grid()?, config.diffusivity, config.initial.clone())
    }

    /// Diffuse another quantity (e.g. [`PhysicalQuantity::Temperature`] for heat conduction)
    pub fn with_quantity(mut self, quantity: PhysicalQuantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    pub fn quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    pub fn initial_profile(&self) -> &InitialProfile {
        &self.initial
    }

    /// Fixed (left, right) values: the initial profile at the two end points
    pub fn boundary_values(&self) -> (f64, f64) {
        let length = self.grid.length();
        let positions = self.grid.positions();
        let left = positions.first().map_or(0.0, |&x| self.initial.evaluate(x, length));
        let right = positions.last().map_or(0.0, |&x| self.initial.evaluate(x, length));
        (left, right)
    }
}

impl PhysicalModel for LinearDiffusion {
    fn points(&self) -> usize {
        self.grid.len()
    }

    fn compute_physics(&self, state: &PhysicalState) -> DiffusionResult<PhysicalState> {
        let field = state
            .profile(self.quantity)
            .ok_or(DiffusionError::MissingQuantity(self.quantity))?;

        if field.len() != self.points() {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "{} profile has {} points, grid has {}",
                self.quantity,
                field.len(),
                self.points()
            )));
        }

        let mut rate = vec![0.0; field.len()];
        second_difference(field, &mut rate);

        let factor = self.diffusivity / (self.grid.dx() * self.grid.dx());
        let mut rate = PhysicalData::from_vec(rate);
        rate.scale(factor);

        Ok(PhysicalState::new(self.quantity, rate))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        let profile = self.initial.sample(&self.grid);
        PhysicalState::new(self.quantity, PhysicalData::from_vector(profile))
    }

    fn name(&self) -> &str {
        "Linear Diffusion"
    }

    fn description(&self) -> Option<&str> {
        Some("1D diffusion with constant diffusivity and fixed end values")
    }

    fn stability_number(&self, dt: f64) -> Option<f64> {
        Some(diffusion_number(self.diffusivity, dt, self.grid.dx()))
    }
}

/// Build the diffusion scenario described by a configuration
///
/// The domain has one spatial dimension `x`, whose two boundary states carry
/// the fixed end values, and the time dimension holding the initial profile.
pub fn build_scenario(config: &DiffusionConfig) -> DiffusionResult<Scenario> {
    config.validate()?;

    let model = LinearDiffusion::from_config(config)?;
    let quantity = model.quantity();
    let (left, right) = model.boundary_values();

    debug!(
        points = model.points(),
        dx = config.dx,
        diffusivity = config.diffusivity,
        left,
        right,
        "building diffusion scenario"
    );

    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::mixed(
        &["x"],
        vec![PhysicalState::new(quantity, PhysicalData::Scalar(left))],
        vec![PhysicalState::new(quantity, PhysicalData::Scalar(right))],
        initial,
    );

    Ok(Scenario::new(Box::new(model), boundaries))
}
