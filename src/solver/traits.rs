//! Numerical solver traits and types
//!
//! # Design
//!
//! - `SolverType` defines what kind of time integration is requested
//! - `SolverConfiguration` carries the `SolverType` plus output sampling
//! - `SimulationResult` holds the trajectory and string metadata
//! - `Solver` is the single entry point every method implements

use std::collections::HashMap;

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;
use crate::solver::Scenario;

// ============================================================================
// Central Solver Type Enumeration
// ============================================================================

/// Type of time integration
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::solver::SolverType;
///
/// // Total time split into equal steps
/// let by_duration = SolverType::TimeEvolution { total_time: 6.25, time_steps: 5000 };
///
/// // Explicit step size, as derived from the stability bound
/// let by_step = SolverType::FixedStep { dt: 0.00125, time_steps: 5000 };
///
/// assert!(by_duration.validate().is_ok());
/// assert!(by_step.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SolverType {
    /// Integrate over `total_time` with `time_steps` equal steps
    ///
    /// # Parameters
    /// - `total_time`: Total simulation time (seconds), > 0
    /// - `time_steps`: Number of time steps, > 0
    TimeEvolution { total_time: f64, time_steps: usize },

    /// Integrate `time_steps` steps of size `dt`
    ///
    /// `time_steps` may be zero: the result then holds the initial state only.
    FixedStep { dt: f64, time_steps: usize },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            SolverType::TimeEvolution { .. } => "TimeEvolution",
            SolverType::FixedStep { .. } => "FixedStep",
        }
    }

    /// Step size and number of steps
    pub fn discretisation(&self) -> (f64, usize) {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                (total_time / (*time_steps as f64), *time_steps)
            }
            SolverType::FixedStep { dt, time_steps } => (*dt, *time_steps),
        }
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> DiffusionResult<()> {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                if !total_time.is_finite() || *total_time <= 0.0 {
                    return Err(DiffusionError::invalid(
                        "total_time",
                        *total_time,
                        "must be finite and positive",
                    ));
                }
                if *time_steps == 0 {
                    return Err(DiffusionError::InvalidConfiguration(
                        "TimeSteps must be greater than 0".to_string(),
                    ));
                }
                Ok(())
            }
            SolverType::FixedStep { dt, .. } => {
                if !dt.is_finite() || *dt <= 0.0 {
                    return Err(DiffusionError::invalid("dt", *dt, "must be finite and positive"));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::fixed_step(0.00125, 5000).with_snapshot_interval(500);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.snapshot_interval, 500);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,

    /// Keep every n-th state in the trajectory (final state is always kept)
    pub snapshot_interval: usize,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self {
            solver_type,
            snapshot_interval: 1,
        }
    }

    /// Create a time evolution configuration
    pub fn time_evolution(total_time: f64, time_steps: usize) -> Self {
        Self::new(SolverType::TimeEvolution { total_time, time_steps })
    }

    /// Create a fixed step configuration
    pub fn fixed_step(dt: f64, time_steps: usize) -> Self {
        Self::new(SolverType::FixedStep { dt, time_steps })
    }

    /// Builder pattern: set snapshot interval
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> DiffusionResult<()> {
        if self.snapshot_interval == 0 {
            return Err(DiffusionError::InvalidConfiguration(
                "Snapshot interval must be at least 1".to_string(),
            ));
        }
        self.solver_type.validate()
    }

    /// Whether the state after `step` (1-based) goes into the trajectory
    pub(crate) fn records(&self, step: usize, last_step: usize) -> bool {
        step == last_step || step % self.snapshot_interval == 0
    }
}

// =================================================================================================
// Simulation Result
// =================================================================================================

/// Result of a simulation
///
/// `time_points[k]` is the time of `state_trajectory[k]`. The first entry is
/// always the initial condition at t = 0.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Times of the recorded states
    pub time_points: Vec<f64>,

    /// Recorded states
    pub state_trajectory: Vec<PhysicalState>,

    /// State after the last step
    pub final_state: PhysicalState,

    /// Diagnostics (solver name, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        Self {
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Initial state (first recorded state)
    pub fn initial_state(&self) -> Option<&PhysicalState> {
        self.state_trajectory.first()
    }

    /// Final simulated time
    pub fn final_time(&self) -> f64 {
        self.time_points.last().copied().unwrap_or(0.0)
    }

    /// Number of recorded states
    pub fn len(&self) -> usize {
        self.state_trajectory.len()
    }

    /// Whether no state was recorded
    pub fn is_empty(&self) -> bool {
        self.state_trajectory.is_empty()
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Numerical solver
///
/// A solver is stateless: the same instance can solve any number of scenarios.
pub trait Solver {
    /// Integrate the scenario according to the configuration
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> DiffusionResult<SimulationResult>;

    /// Name of the method
    fn name(&self) -> &'static str;
}
