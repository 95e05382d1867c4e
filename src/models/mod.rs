//! Diffusion models
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The solver calls `compute_physics` at each time step. Models are responsible
//! for the spatial discretisation and the boundary conditions, the solver for
//! the time integration.
//!
//! # Available Models
//!
//! ## [`LinearDiffusion`]
//!
//! One quantity diffusing with a constant diffusivity on a uniform [`Grid`],
//! both end values held fixed.
//!
//! # Initial condition
//!
//! [`InitialProfile`] defines C(x, 0): a step (the default), a top-hat pulse
//! or a uniform value. [`build_scenario`] assembles grid, model, initial state
//! and boundaries from a [`DiffusionConfig`](crate::config::DiffusionConfig).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod diffusion;
pub mod grid;
pub mod profile;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use diffusion::{LinearDiffusion, build_scenario};
pub use grid::Grid;
pub use profile::InitialProfile;
