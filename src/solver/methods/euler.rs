//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method advances dy/dt = f(y) with
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n)
//! ```
//!
//! When f is the central second difference of a diffusion model, this is the
//! FTCS scheme: forward in time, central in space.
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate in time
//! - **Stability**: Conditional; for diffusion r = D·dt/dx² must not exceed 0.5
//! - **Complexity**: 1 function evaluation per step
//!
//! # Read/write ordering
//!
//! f(y_n) is computed from the whole state before the state is replaced, so
//! every update uses pre-step values only.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::config::DiffusionConfig;
//! use diffusion_rs::models::build_scenario;
//! use diffusion_rs::solver::{EulerSolver, Solver, SolverConfiguration};
//!
//! let config = DiffusionConfig::default().with_time_steps(10);
//! let scenario = build_scenario(&config).unwrap();
//! let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps);
//!
//! let result = EulerSolver::new().solve(&scenario, &solver_config).unwrap();
//! assert_eq!(result.len(), 11);
//! ```

use tracing::{debug, info, warn};

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;
use crate::solver::{self, stencil::STABILITY_LIMIT};
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Start with the scenario's initial condition y_0
/// 2. For each step n = 0, 1, ..., N-1:
///    - Compute physics: k = f(y_n)
///    - Update state: y_{n+1} = y_n + dt * k
///    - Check for NaN / Inf
///    - Record the state if it falls on the snapshot interval
/// 3. Return the recorded trajectory and the final state
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> DiffusionResult<SimulationResult> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let (dt, time_steps) = config.solver_type.discretisation();

        // ====== Step 2: Setup ======

        let mut state = scenario
            .conditions
            .initial_condition()
            .cloned()
            .ok_or(DiffusionError::MissingInitialCondition)?;

        let stability = scenario.model.stability_number(dt);
        if let Some(r) = stability
            && r > STABILITY_LIMIT
        {
            warn!(r, limit = STABILITY_LIMIT, "explicit step exceeds the stability limit");
        }

        info!(
            model = scenario.get_model_name(),
            points = scenario.model.points(),
            dt,
            time_steps,
            "starting Forward Euler integration"
        );

        let capacity = time_steps / config.snapshot_interval + 2;
        let mut time_points = Vec::with_capacity(capacity);
        let mut state_trajectory = Vec::with_capacity(capacity);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            let physics: PhysicalState = scenario.model.compute_physics(&state)?;

            // Add consumes self; the rate was fully computed from the old state above
            state = state + physics * dt;

            solver::validate_state(&state, step + 1)?;

            if config.records(step + 1, time_steps) {
                // Computed from the index, not accumulated, to keep the final time exact
                let time = (step as f64 + 1.0) * dt;
                debug!(step = step + 1, time, "recording snapshot");

                time_points.push(time);
                state_trajectory.push(state.clone());
            }
        }

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, state_trajectory, state);

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &(dt * time_steps as f64).to_string());
        if let Some(r) = stability {
            result.add_metadata("diffusion number", &r.to_string());
        }

        info!(
            recorded = result.len(),
            final_time = result.final_time(),
            "Forward Euler integration finished"
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
