//! Uniform one-dimensional grid
//!
//! Positions are `x[i] = i · dx` for `i in 0..nx`, starting at the left end
//! of the domain. The grid is immutable once built.

use crate::error::{DiffusionError, DiffusionResult};
use crate::solver::stencil::check_positive;

/// Relative tolerance applied before rounding `length / dx` up
const RATIO_TOLERANCE: f64 = 1e-9;

/// Largest grid accepted, 10⁸ points (800 MB per field buffer)
pub const MAX_GRID_POINTS: usize = 100_000_000;

/// Evenly spaced positions over `[0, length)`
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::Grid;
///
/// let grid = Grid::uniform(300.0, 0.5).unwrap();
///
/// assert_eq!(grid.len(), 600);
/// assert_eq!(grid.position(300), Some(150.0));
/// assert_eq!(grid.positions().last(), Some(&299.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    length: f64,
    dx: f64,
    positions: Vec<f64>,
}

impl Grid {
    /// Build a uniform grid of `ceil(length / dx)` points
    ///
    /// # Errors
    ///
    /// Returns an error when `length` or `dx` is not finite and positive, or
    /// when the grid would hold no point or more than [`MAX_GRID_POINTS`].
    pub fn uniform(length: f64, dx: f64) -> DiffusionResult<Self> {
        let nx = Self::checked_point_count(length, dx)?;
        let positions = (0..nx).map(|i| i as f64 * dx).collect();

        Ok(Self { length, dx, positions })
    }

    /// Number of points for a domain of `length` with spacing `dx`
    ///
    /// `length / dx` is rounded up, except that ratios within a relative
    /// 1e-9 of an integer are taken as that integer, so 300 / 0.5 gives 600
    /// and not 601 after floating-point noise.
    ///
    /// Returns `None` when the ratio is not finite or exceeds [`MAX_GRID_POINTS`].
    pub fn point_count(length: f64, dx: f64) -> Option<usize> {
        let ratio = length / dx;
        if !ratio.is_finite() || ratio > MAX_GRID_POINTS as f64 {
            return None;
        }
        if ratio <= 0.0 {
            return Some(0);
        }

        let nearest = ratio.round();
        let count = if (ratio - nearest).abs() <= RATIO_TOLERANCE * ratio.max(1.0) {
            nearest
        } else {
            ratio.ceil()
        };

        Some(count as usize)
    }

    /// [`point_count`](Self::point_count) for positive parameters, as an error
    /// naming the offending grid when it is empty or too large
    pub fn checked_point_count(length: f64, dx: f64) -> DiffusionResult<usize> {
        check_positive("length", length)?;
        check_positive("dx", dx)?;

        match Self::point_count(length, dx) {
            Some(0) => Err(DiffusionError::InvalidConfiguration(format!(
                "Grid of length {} with dx = {} has no point",
                length, dx
            ))),
            Some(nx) => Ok(nx),
            None => Err(DiffusionError::InvalidConfiguration(format!(
                "Grid of length {} with dx = {} exceeds {} points",
                length, dx, MAX_GRID_POINTS
            ))),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a successfully built grid
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Spacing between two neighbours
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Configured domain length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// All positions
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Position of point `index`
    pub fn position(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    /// Middle of the configured domain, `length / 2`
    pub fn midpoint(&self) -> f64 {
        self.length / 2.0
    }

    /// First position where `profile` crosses `level`, linearly interpolated
    ///
    /// Returns `None` when the profile never reaches `level` or when its
    /// length differs from the grid.
    ///
    /// ```rust
    /// use diffusion_rs::models::Grid;
    ///
    /// let grid = Grid::uniform(4.0, 1.0).unwrap();
    /// assert_eq!(grid.crossing(&[500.0, 400.0, 200.0, 0.0], 300.0), Some(1.5));
    /// ```
    pub fn crossing(&self, profile: &[f64], level: f64) -> Option<f64> {
        if profile.len() != self.len() {
            return None;
        }

        for (i, pair) in profile.windows(2).enumerate() {
            let (a, b) = (pair[0] - level, pair[1] - level);
            if a == 0.0 {
                return Some(self.positions[i]);
            }
            if a * b < 0.0 {
                let fraction = a / (a - b);
                return Some(self.positions[i] + fraction * self.dx);
            }
        }

        match profile.last() {
            Some(&last) if last == level => self.positions.last().copied(),
            _ => None,
        }
    }
}
