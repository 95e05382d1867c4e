//! Physical models
//!
//! This module provides the traits and containers shared by every model.
//! A physical model encapsulates the equations of a system (here the 1D
//! diffusion equation); it does not integrate them in time.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes the right-hand side at a given state
//! - **Physical State**: Container for all physical quantities (concentration, temperature, ...)
//! - **Physical Quantity**: Type-safe identifier for physical variables
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::physics::{PhysicalModel, PhysicalState, PhysicalQuantity, PhysicalData};
//! use diffusion_rs::error::DiffusionResult;
//!
//! struct Frozen;
//!
//! impl PhysicalModel for Frozen {
//!     fn points(&self) -> usize { 3 }
//!     fn compute_physics(&self, _state: &PhysicalState) -> DiffusionResult<PhysicalState> {
//!         let rate = PhysicalData::uniform_vector(3, 0.0);
//!         Ok(PhysicalState::new(PhysicalQuantity::Concentration, rate))
//!     }
//!     fn setup_initial_state(&self) -> PhysicalState {
//!         let initial = PhysicalData::uniform_vector(3, 1.0);
//!         PhysicalState::new(PhysicalQuantity::Concentration, initial)
//!     }
//!     fn name(&self) -> &str { "Frozen" }
//! }
//!
//! let model = Frozen;
//! let initial = model.setup_initial_state();
//! let rate = model.compute_physics(&initial).unwrap();
//! assert_eq!(rate.profile(PhysicalQuantity::Concentration), Some(&[0.0, 0.0, 0.0][..]));
//! ```

pub mod data;
pub mod traits;

pub use data::PhysicalData;
pub use traits::{PhysicalModel, PhysicalQuantity, PhysicalState};
