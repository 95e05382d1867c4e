//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: flexible state container
//! - `PhysicalQuantity`: type-safe quantity identifiers

use std::collections::HashMap;
use std::fmt;

use crate::error::DiffusionResult;
use crate::physics::PhysicalData;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// The diffusion equation is the same for a solute and for heat, so a model
/// is told which quantity it transports.
///
/// # Example
/// ```
/// use diffusion_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
///
/// let tracer = PhysicalQuantity::Custom("Tracer");
/// let mut state = PhysicalState::empty();
/// state.set(tracer, PhysicalData::uniform_vector(10, 0.0));
/// assert!(state.get(tracer).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Concentration (arbitrary units per length)
    Concentration,

    /// Temperature (K)
    Temperature,

    /// Custom quantity (for use extension)
    Custom(&'static str),
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalQuantity::Concentration => write!(f, "Concentration"),
            PhysicalQuantity::Temperature => write!(f, "Temperature"),
            PhysicalQuantity::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Physical State (Flexible State Container)
// =================================================================================================

/// Physical state of the system
///
/// Contains all physical quantities at a given time step.
///
/// # Example
/// ```
/// use diffusion_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
///
/// let state = PhysicalState::new(
///     PhysicalQuantity::Concentration,
///     PhysicalData::from_vec(vec![500.0, 500.0, 0.0]),
/// );
/// assert_eq!(state.get(PhysicalQuantity::Concentration).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalState {
    /// Physical quantities stored in a dictionary
    pub(crate) quantities: HashMap<PhysicalQuantity, PhysicalData>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, value: PhysicalData) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, value);

        Self { quantities }
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    /// Get a quantity by type
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&PhysicalData> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a quantity
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut PhysicalData> {
        self.quantities.get_mut(&quantity)
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: PhysicalData) {
        self.quantities.insert(quantity, value);
    }

    /// List of available physical state quantities
    pub fn available_quantities(&self) -> Vec<PhysicalQuantity> {
        self.quantities.keys().cloned().collect()
    }

    /// Profile of a vector quantity as a plain slice
    ///
    /// Returns `None` when the quantity is missing or is not a vector.
    pub fn profile(&self, quantity: PhysicalQuantity) -> Option<&[f64]> {
        self.get(quantity)
            .and_then(PhysicalData::try_as_vector)
            .map(|vector| vector.as_slice())
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (quantity, value) in rhs.quantities {
            if let Some(existing_value) = self.quantities.remove(&quantity) {
                self.quantities.insert(quantity, existing_value + value);
            } else {
                self.quantities.insert(quantity, value);
            }
        }
        self
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        for data in self.quantities.values_mut() {
            data.scale(scalar);
        }
        self
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Computes the physics equations of a system at a given state.
/// Does NOT solve them (that's the Solver's job).
///
/// For the diffusion equation ∂C/∂t = D·∂²C/∂x² the model returns the
/// spatially discretised right-hand side; the solver integrates it in time.
pub trait PhysicalModel: Send + Sync {
    /// Number of spatial points
    ///
    /// Used by the solver to allocate vectors
    fn points(&self) -> usize;

    /// Computes the right-hand side f(y) of dy/dt = f(y) at a given state
    ///
    /// Encapsulates the spatial derivatives and the boundary conditions:
    /// a Dirichlet boundary is expressed as a zero rate at that point.
    fn compute_physics(&self, state: &PhysicalState) -> DiffusionResult<PhysicalState>;

    /// Creates the initial state for this physical model
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Dimensionless stability number of an explicit step of size `dt`
    ///
    /// Diffusion models return r = D·dt/dx²; models without such a bound return `None`.
    fn stability_number(&self, _dt: f64) -> Option<f64> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_physical_state() {
        let physics = PhysicalState::empty();

        assert_eq!(physics.quantities.len(), 0);
        assert!(physics.available_quantities().is_empty());
    }

    #[test]
    fn test_new_physical_state() {
        let quantity = PhysicalQuantity::Custom("Tracer");
        let physics = PhysicalState::new(quantity, PhysicalData::from_vec(vec![1.0, 2.0]));

        assert_eq!(physics.quantities.len(), 1);
        assert!(physics.available_quantities().contains(&quantity));
        assert_eq!(physics.get(quantity).unwrap().len(), 2);
    }

    #[test]
    fn test_profile_slice() {
        let physics = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![500.0, 250.0, 0.0]),
        );

        assert_eq!(
            physics.profile(PhysicalQuantity::Concentration),
            Some(&[500.0, 250.0, 0.0][..])
        );
        assert!(physics.profile(PhysicalQuantity::Temperature).is_none());

        let scalar = PhysicalState::new(PhysicalQuantity::Temperature, PhysicalData::Scalar(3.0));
        assert!(scalar.profile(PhysicalQuantity::Temperature).is_none());
    }

    #[test]
    fn test_addition() {
        let state_one = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![780.0, 1024.0]),
        );
        let state_two = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![230.0, -24.0]),
        );
        let other = PhysicalState::new(
            PhysicalQuantity::Temperature,
            PhysicalData::from_vec(vec![0.0, 273.15]),
        );

        let sum = state_one.clone() + state_two;
        let merged = other + state_one;

        assert_eq!(sum.profile(PhysicalQuantity::Concentration), Some(&[1010.0, 1000.0][..]));
        assert_eq!(merged.profile(PhysicalQuantity::Temperature), Some(&[0.0, 273.15][..]));
        assert_eq!(merged.profile(PhysicalQuantity::Concentration), Some(&[780.0, 1024.0][..]));
    }

    #[test]
    fn test_multiplication() {
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![1.0, 2.0]),
        ) * 10.0;

        assert_eq!(state.profile(PhysicalQuantity::Concentration), Some(&[10.0, 20.0][..]));
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(PhysicalQuantity::Concentration.to_string(), "Concentration");
        assert_eq!(PhysicalQuantity::Custom("Dye").to_string(), "Dye");
    }
}
