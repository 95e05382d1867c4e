//! FTCS three-point stencil
//!
//! # Mathematical Background
//!
//! Forward-Time Central-Space discretisation of ∂C/∂t = D·∂²C/∂x²:
//!
//! ```text
//! C'[i] = C[i] + r · (C[i-1] - 2·C[i] + C[i+1]),    r = D·dt/dx²
//! ```
//!
//! applied on interior points `1..nx-1`. Points `0` and `nx-1` are Dirichlet
//! boundaries and are copied unchanged.
//!
//! # Stability
//!
//! The scheme is stable for `r <= 0.5`. Above that the highest grid mode is
//! amplified by `|1 - 4r| > 1` every step and the profile develops growing,
//! sign-alternating oscillations.
//!
//! # Read/write ordering
//!
//! Every new value must be computed from the field as it was at the start of
//! the step. [`FtcsStepper::step`] therefore reads from one buffer and writes
//! into another; [`FtcsStepper::advance`] swaps the two buffers between steps.

use nalgebra::DVector;
use tracing::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{DiffusionError, DiffusionResult};
use crate::solver::parallel_threshold;

/// Largest diffusion number for which the 1D explicit scheme is stable
pub const STABILITY_LIMIT: f64 = 0.5;

/// Diffusion number r = D·dt/dx²
pub fn diffusion_number(diffusivity: f64, dt: f64, dx: f64) -> f64 {
    diffusivity * dt / (dx * dx)
}

/// Time step giving diffusion number `r`: dt = r·dx²/D
///
/// With `r = 0.5` this is the marginal stability limit used by default.
pub fn stable_time_step(diffusivity: f64, dx: f64, r: f64) -> f64 {
    r * dx * dx / diffusivity
}

/// Undivided second difference `C[i-1] - 2C[i] + C[i+1]`
///
/// Written into `out` for interior points; both boundary entries are set to zero.
///
/// # Panics
///
/// Panics if `field` and `out` have different lengths.
pub fn second_difference(field: &[f64], out: &mut [f64]) {
    assert_eq!(field.len(), out.len(), "Field and output lengths must match");

    let n = field.len();
    if n < 3 {
        out.fill(0.0);
        return;
    }

    out[0] = 0.0;
    out[n - 1] = 0.0;
    for i in 1..n - 1 {
        out[i] = field[i - 1] - 2.0 * field[i] + field[i + 1];
    }
}

#[inline]
fn ftcs_point(field: &[f64], r: f64, i: usize) -> f64 {
    field[i] + r * (field[i - 1] - 2.0 * field[i] + field[i + 1])
}

// =================================================================================================
// FTCS Stepper
// =================================================================================================

/// Explicit FTCS diffusion stepper with fixed (Dirichlet) end points
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::FtcsStepper;
/// use nalgebra::DVector;
///
/// let stepper = FtcsStepper::stable(100.0, 0.5).unwrap();
/// let mut field = DVector::from_vec(vec![500.0, 500.0, 0.0, 0.0]);
///
/// stepper.advance(&mut field, 1);
///
/// assert_eq!(field[0], 500.0);
/// assert_eq!(field[1], 250.0);
/// assert_eq!(field[2], 250.0);
/// assert_eq!(field[3], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FtcsStepper {
    r: f64,
}

impl FtcsStepper {
    /// Build a stepper from physical parameters
    ///
    /// Checks positivity of `diffusivity`, `dx` and `dt` but not stability:
    /// an unstable stepper can be built on purpose (a warning is logged).
    pub fn new(diffusivity: f64, dx: f64, dt: f64) -> DiffusionResult<Self> {
        check_positive("diffusivity", diffusivity)?;
        check_positive("dx", dx)?;
        check_positive("dt", dt)?;

        Self::from_diffusion_number(diffusion_number(diffusivity, dt, dx))
    }

    /// Stepper at the marginal stability limit (dt = 0.5·dx²/D)
    pub fn stable(diffusivity: f64, dx: f64) -> DiffusionResult<Self> {
        check_positive("diffusivity", diffusivity)?;
        check_positive("dx", dx)?;

        Self::from_diffusion_number(STABILITY_LIMIT)
    }

    /// Build a stepper directly from the diffusion number
    pub fn from_diffusion_number(r: f64) -> DiffusionResult<Self> {
        check_positive("diffusion_number", r)?;

        if r > STABILITY_LIMIT {
            warn!(r, limit = STABILITY_LIMIT, "FTCS stepper is numerically unstable");
        }

        Ok(Self { r })
    }

    /// Diffusion number r = D·dt/dx²
    pub fn diffusion_number(&self) -> f64 {
        self.r
    }

    /// Whether r is within the explicit stability limit
    pub fn is_stable(&self) -> bool {
        self.r <= STABILITY_LIMIT
    }

    /// Compute one step from `current` into `next`
    ///
    /// `current` is only read and `next` is fully overwritten, so every
    /// interior update sees pre-step neighbours. Fields shorter than three
    /// points have no interior and are copied unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the two buffers have different lengths.
    pub fn step(&self, current: &[f64], next: &mut [f64]) {
        assert_eq!(current.len(), next.len(), "Field buffers must have the same length");

        let n = current.len();
        if n < 3 {
            next.copy_from_slice(current);
            return;
        }

        next[0] = current[0];
        next[n - 1] = current[n - 1];

        let r = self.r;
        let interior = &mut next[1..n - 1];

        if n > parallel_threshold() {
            #[cfg(feature = "parallel")]
            interior
                .par_iter_mut()
                .enumerate()
                .for_each(|(k, value)| *value = ftcs_point(current, r, k + 1));
            #[cfg(not(feature = "parallel"))]
            interior
                .iter_mut()
                .enumerate()
                .for_each(|(k, value)| *value = ftcs_point(current, r, k + 1));
        } else {
            interior
                .iter_mut()
                .enumerate()
                .for_each(|(k, value)| *value = ftcs_point(current, r, k + 1));
        }
    }

    /// Apply `steps` successive steps to `field` in place
    ///
    /// Uses one scratch buffer and swaps it with `field` after every step.
    /// Zero steps leave `field` untouched.
    pub fn advance(&self, field: &mut DVector<f64>, steps: usize) {
        if steps == 0 {
            return;
        }

        let mut scratch = field.clone();
        for _ in 0..steps {
            self.step(field.as_slice(), scratch.as_mut_slice());
            std::mem::swap(field, &mut scratch);
        }
    }
}

pub(crate) fn check_positive(parameter: &'static str, value: f64) -> DiffusionResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DiffusionError::invalid(parameter, value, "must be finite and positive"));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ThresholdGuard;
    use approx::assert_relative_eq;

    #[test]
    fn test_diffusion_number_and_time_step() {
        let dt = stable_time_step(100.0, 0.5, STABILITY_LIMIT);
        assert_relative_eq!(dt, 0.00125, epsilon = 1e-15);
        assert_relative_eq!(diffusion_number(100.0, dt, 0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_second_difference() {
        let field = [1.0, 4.0, 9.0, 16.0, 25.0];
        let mut out = [f64::NAN; 5];
        second_difference(&field, &mut out);
        assert_eq!(out, [0.0, 2.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn test_second_difference_degenerate() {
        let mut out = [7.0, 7.0];
        second_difference(&[1.0, 2.0], &mut out);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(FtcsStepper::new(0.0, 0.5, 0.001).is_err());
        assert!(FtcsStepper::new(100.0, -0.5, 0.001).is_err());
        assert!(FtcsStepper::new(100.0, 0.5, f64::NAN).is_err());
        assert!(FtcsStepper::from_diffusion_number(0.0).is_err());
    }

    #[test]
    fn test_stable_is_marginal() {
        let stepper = FtcsStepper::stable(100.0, 0.5).unwrap();
        assert_eq!(stepper.diffusion_number(), 0.5);
        assert!(stepper.is_stable());

        let unstable = FtcsStepper::new(100.0, 0.5, 0.0025).unwrap();
        assert_relative_eq!(unstable.diffusion_number(), 1.0, epsilon = 1e-12);
        assert!(!unstable.is_stable());
    }

    #[test]
    fn test_single_step_matches_formula() {
        let stepper = FtcsStepper::from_diffusion_number(0.25).unwrap();
        let current = [10.0, 6.0, 2.0, 4.0, 0.0];
        let mut next = [0.0; 5];

        stepper.step(&current, &mut next);

        assert_eq!(next[0], 10.0);
        assert_relative_eq!(next[1], 6.0 + 0.25 * (10.0 - 12.0 + 2.0));
        assert_relative_eq!(next[2], 2.0 + 0.25 * (6.0 - 4.0 + 4.0));
        assert_relative_eq!(next[3], 4.0 + 0.25 * (2.0 - 8.0 + 0.0));
        assert_eq!(next[4], 0.0);
    }

    #[test]
    fn test_step_uses_pre_step_neighbours() {
        // A naive in-place left-to-right sweep would see the already-updated
        // left neighbour and give a different value at index 2.
        let stepper = FtcsStepper::from_diffusion_number(0.5).unwrap();
        let mut field = DVector::from_vec(vec![1.0, 0.0, 0.0, 0.0]);

        stepper.advance(&mut field, 1);

        assert_eq!(field.as_slice(), &[1.0, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_fields_unchanged() {
        let stepper = FtcsStepper::from_diffusion_number(0.5).unwrap();
        for values in [vec![], vec![3.0], vec![3.0, 1.0]] {
            let mut field = DVector::from_vec(values.clone());
            stepper.advance(&mut field, 10);
            assert_eq!(field.as_slice(), values.as_slice());
        }
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let stepper = FtcsStepper::from_diffusion_number(0.5).unwrap();
        let mut field = DVector::from_vec(vec![5.0, 1.0, 3.0, 0.0]);
        stepper.advance(&mut field, 0);
        assert_eq!(field.as_slice(), &[5.0, 1.0, 3.0, 0.0]);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let stepper = FtcsStepper::from_diffusion_number(0.4).unwrap();
        let initial: Vec<f64> = (0..257).map(|i| ((i * 37) % 11) as f64).collect();

        let mut sequential = DVector::from_vec(initial.clone());
        stepper.advance(&mut sequential, 25);

        let _guard = ThresholdGuard::save(16);
        let mut parallel = DVector::from_vec(initial);
        stepper.advance(&mut parallel, 25);

        assert_eq!(sequential, parallel);
    }

    #[test]
    #[should_panic(expected = "Field buffers must have the same length")]
    fn test_step_length_mismatch_panics() {
        let stepper = FtcsStepper::from_diffusion_number(0.5).unwrap();
        let mut next = [0.0; 3];
        stepper.step(&[1.0, 2.0, 3.0, 4.0], &mut next);
    }
}
