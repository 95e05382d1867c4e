//! Simulation scenario definition
//!
//! A scenario combines a physical model with boundary conditions.

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::PhysicalModel;
use crate::solver::boundary::DomainBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Boundary conditions (domain boundaries)
///
/// This is the "WHAT to solve"; the solver and its configuration are the "HOW".
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Conditions and boundaries
    pub conditions: DomainBoundaries,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, conditions: DomainBoundaries) -> Self {
        Self { model, conditions }
    }

    /// Verify boundaries and that the initial condition fits the model
    pub fn validate(&self) -> DiffusionResult<()> {
        self.conditions.validate()?;

        if let Some(initial) = self.conditions.initial_condition() {
            let points = self.model.points();
            for quantity in initial.available_quantities() {
                if let Some(data) = initial.get(quantity)
                    && data.is_vector()
                    && data.len() != points
                {
                    return Err(DiffusionError::InvalidConfiguration(format!(
                        "Initial {} has {} points but model '{}' expects {}",
                        quantity,
                        data.len(),
                        self.model.name(),
                        points
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.conditions.ndim()
    }

    /// Spatial dimension
    pub fn sdim(&self) -> usize {
        self.conditions.sdim()
    }

    /// Time dependant equations
    pub fn is_time_dependent(&self) -> bool {
        self.conditions.is_time_dependent()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("dimension", &self.ndim())
            .field("spatial dim", &self.sdim())
            .field("is time dependent", &self.is_time_dependent())
            .field("Boundaries / conditions", &self.conditions)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{PhysicalData, PhysicalQuantity, PhysicalState};

    struct MockModel;

    impl PhysicalModel for MockModel {
        fn points(&self) -> usize {
            10
        }

        fn compute_physics(&self, state: &PhysicalState) -> DiffusionResult<PhysicalState> {
            Ok(state.clone())
        }

        fn setup_initial_state(&self) -> PhysicalState {
            let profile = PhysicalData::uniform_vector(10, 0.0);
            PhysicalState::new(PhysicalQuantity::Concentration, profile)
        }

        fn name(&self) -> &str {
            "MockModel"
        }
    }

    #[test]
    fn test_scenario_creation() {
        let model = Box::new(MockModel);
        let initial = model.setup_initial_state();
        let scenario = Scenario::new(model, DomainBoundaries::temporal(initial));

        assert_eq!(scenario.get_model_name(), "MockModel");
        assert!(scenario.is_time_dependent());
        assert!(scenario.validate().is_ok());
        assert!(format!("{:?}", scenario).contains("MockModel"));
    }

    #[test]
    fn test_scenario_rejects_mismatched_initial_state() {
        let field = PhysicalData::uniform_vector(4, 0.0);
        let initial = PhysicalState::new(PhysicalQuantity::Concentration, field);
        let scenario = Scenario::new(Box::new(MockModel), DomainBoundaries::temporal(initial));

        let error = scenario.validate().unwrap_err();
        assert!(error.to_string().contains("expects 10"));
    }

    #[test]
    fn test_scenario_rejects_empty_boundaries() {
        let scenario = Scenario::new(Box::new(MockModel), DomainBoundaries::default());
        assert!(scenario.validate().is_err());
    }
}
