//! Numerical solvers
//!
//! This module provides the time integration of a physical model within a
//! specific scenario, plus the FTCS stencil kernel used by diffusion models.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Domain boundaries (initial and boundary conditions)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Step size and number of steps
//!    - Snapshot interval of the recorded trajectory
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the time-stepping scheme
//!    - Independent of physics
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverType`, `SolverConfiguration`, `SimulationResult`
//! - **`boundary`**: `DomainBoundaries` and factory methods
//! - **`scenario`**: `Scenario`, model + boundaries
//! - **`stencil`**: FTCS kernel, stability number, double-buffered stepping
//! - **`methods`**: `EulerSolver`
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffusion_rs::config::DiffusionConfig;
//! use diffusion_rs::models::build_scenario;
//! use diffusion_rs::physics::PhysicalQuantity;
//! use diffusion_rs::solver::{EulerSolver, Solver, SolverConfiguration};
//!
//! // 1. Scenario (WHAT to solve)
//! let config = DiffusionConfig::default().with_time_steps(100);
//! let scenario = build_scenario(&config)?;
//!
//! // 2. Configuration (HOW to solve)
//! let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps)
//!     .with_snapshot_interval(50);
//!
//! // 3. Solve
//! let result = EulerSolver::new().solve(&scenario, &solver_config)?;
//!
//! let profile = result.final_state.profile(PhysicalQuantity::Concentration).unwrap();
//! assert_eq!(profile[0], 500.0);
//! assert_eq!(result.len(), 3);
//! # Ok::<(), diffusion_rs::error::DiffusionError>(())
//! ```
//!
//! # Stability
//!
//! The explicit scheme is stable only for r = D·dt/dx² ≤ 0.5
//! ([`STABILITY_LIMIT`]). Beyond that, the highest-frequency grid mode is
//! amplified at every step and the profile develops growing oscillations of
//! alternating sign. Configurations validate r before the first step; the
//! solver additionally rejects states that became NaN or infinite.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod methods;
pub mod stencil;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is a numerical-execution concern,
// not a physics concern, so it lives here rather than in physics/data.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (benchmarks, tests) without a mutex on every stencil sweep.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which a stencil sweep or
/// [`PhysicalData::apply()`](crate::physics::PhysicalData::apply) switches to
/// parallel iteration.
///
/// Below roughly 1 000 points the cost of Rayon's dispatch outweighs the
/// three-point update.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Parallel iteration is used only when the crate is compiled with the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that sets the threshold on construction and restores the
/// previous value on drop.
///
/// Guards are serialised through a lock, so two tests never observe each
/// other's threshold.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 and is restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, Solver, SolverConfiguration, SolverType};

pub use boundary::{DimensionBoundary, DomainBoundaries, TimeAxisConvention};
pub use scenario::Scenario;

pub use methods::EulerSolver;
pub use stencil::{
    FtcsStepper, STABILITY_LIMIT, diffusion_number, second_difference, stable_time_step,
};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalState;

/// Validate physical state for numerical issues
///
/// Checks that the state does not contain NaN or Inf values, which would
/// indicate numerical instability (typically r above the stability limit)
/// or errors in the physics computation.
///
/// `step` is the number of completed steps, used for error reporting.
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> DiffusionResult<()> {
    for (quantity, data) in &state.quantities {
        // NaN can arise from 0/0 or Inf - Inf
        if data.values().any(|x| x.is_nan()) {
            return Err(DiffusionError::NonFinite {
                kind: "NaN",
                quantity: *quantity,
                step,
            });
        }

        if data.values().any(|x| x.is_infinite()) {
            return Err(DiffusionError::NonFinite {
                kind: "Infinity",
                quantity: *quantity,
                step,
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
