//! diffusion-rs: One-dimensional diffusion simulation
//!
//! Explicit finite-difference (FTCS) solution of ∂C/∂t = D·∂²C/∂x² on a
//! uniform grid with fixed end values, plus plotting and CSV export of the
//! resulting profiles.
//!
//! # Architecture
//!
//! diffusion-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Explicit configuration**
//!    - Every parameter lives in a [`DiffusionConfig`](config::DiffusionConfig)
//!    - The time step is derived from the stability bound, `dt = r·dx²/D` with `r <= 0.5`
//!
//! # Quick Start
//!
//! ```rust
//! use diffusion_rs::prelude::*;
//!
//! # fn main() -> Result<(), DiffusionError> {
//! // 1. Configure the run (reference case: D=100, Lx=300, dx=0.5)
//! let config = DiffusionConfig::default().with_time_steps(500);
//! let scenario = build_scenario(&config)?;
//!
//! // 2. Configure solver
//! let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps);
//!
//! // 3. Run simulation
//! let result = EulerSolver::new().solve(&scenario, &solver_config)?;
//!
//! // 4. Access results
//! let profile = result.final_state.profile(PhysicalQuantity::Concentration).unwrap();
//! assert_eq!(profile.len(), 600);
//! assert_eq!(profile[0], 500.0);
//! assert_eq!(profile[599], 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! For a bare field without the solver machinery, use
//! [`FtcsStepper`](solver::FtcsStepper) directly.
//!
//! # Modules
//!
//! - [`config`]: Run parameters and JSON loading
//! - [`physics`]: Physical model traits and state containers
//! - [`models`]: Grid, initial profiles, linear diffusion model
//! - [`solver`]: Numerical solvers and the FTCS stencil
//! - [`output`]: Result visualization and export
//! - [`error`]: Error type

pub mod config;
pub mod error;
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffusion_rs::prelude::*;
    //! ```
    pub use crate::config::DiffusionConfig;
    pub use crate::error::{DiffusionError, DiffusionResult};
    pub use crate::models::{Grid, InitialProfile, LinearDiffusion, build_scenario};
    pub use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};
    pub use crate::solver::{
        DomainBoundaries, EulerSolver, FtcsStepper, Scenario, SimulationResult, Solver,
        SolverConfiguration, SolverType,
    };
}
