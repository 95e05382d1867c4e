//! Numerical methods for solving the semi-discrete equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 function evaluation per step
//!   - Combined with a central second difference in space it is the FTCS scheme
//!
//! Each solver is stateless and can be reused for multiple simulations.

pub mod euler;

pub use euler::EulerSolver;
