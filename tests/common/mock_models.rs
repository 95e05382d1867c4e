//! Mock physical models for testing
//!
//! These models have known analytical solutions and no spatial coupling,
//! which isolates the time integration from the stencil.

use diffusion_rs::error::{DiffusionError, DiffusionResult};
use diffusion_rs::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
pub struct ExponentialDecay {
    pub points: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(points: usize, decay_rate: f64) -> Self {
        Self { points, decay_rate }
    }

    /// Analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl PhysicalModel for ExponentialDecay {
    fn points(&self) -> usize {
        self.points
    }

    fn compute_physics(&self, state: &PhysicalState) -> DiffusionResult<PhysicalState> {
        let mut rate = state
            .get(PhysicalQuantity::Concentration)
            .cloned()
            .ok_or(DiffusionError::MissingQuantity(PhysicalQuantity::Concentration))?;

        let k = self.decay_rate;
        rate.apply(|y| -k * y);

        Ok(PhysicalState::new(PhysicalQuantity::Concentration, rate))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::uniform_vector(self.points, 1.0),
        )
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}
