//! Physical data types
//!
//! Container for physical quantities that are either a uniform scalar
//! or a 1D profile sampled on the grid.

use nalgebra::DVector;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::solver::parallel_threshold;

/// Physical data container
///
/// # Storage Types
///
/// - **Scalar**: Single uniform value (boundary values, totals)
/// - **Vector**: 1D profile, index-aligned with the grid
///
/// # Example
///
/// ```rust
/// use diffusion_rs::physics::PhysicalData;
///
/// let profile = PhysicalData::uniform_vector(600, 0.0);
/// assert!(profile.is_vector());
/// assert_eq!(profile.len(), 600);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalData {
    /// Scalar value
    Scalar(f64),

    /// Vector, one value per grid point
    Vector(DVector<f64>),
}

impl PhysicalData {
    // ======================================= constructors =======================================

    /// Create from scalar
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Create from vector
    pub fn from_vec(vector: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(vector))
    }

    /// Create from DVector
    pub fn from_vector(vector: DVector<f64>) -> Self {
        Self::Vector(vector)
    }

    /// Create uniform vector
    pub fn uniform_vector(size: usize, value: f64) -> Self {
        Self::Vector(DVector::from_element(size, value))
    }

    // ========================================== Queries ==========================================

    /// Check data is scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check data is a vector
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// Get length
    pub fn len(&self) -> usize {
        match self {
            PhysicalData::Scalar(_) => 1,
            PhysicalData::Vector(v) => v.len(),
        }
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every stored value
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            PhysicalData::Scalar(value) => Box::new(std::iter::once(*value)),
            PhysicalData::Vector(v) => Box::new(v.iter().copied()),
        }
    }

    // ======================================== Extractions ========================================

    /// Try to extract as a scalar
    pub fn try_as_scalar(&self) -> Option<f64> {
        match self {
            PhysicalData::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to extract as a DVector
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            PhysicalData::Vector(value) => Some(value),
            _ => None,
        }
    }

    // ====================================== Apply functions ======================================

    /// Apply a function f to every value
    ///
    /// Large vectors are mapped in parallel when the `parallel` feature is enabled.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            PhysicalData::Scalar(value) => *value = f(*value),

            PhysicalData::Vector(value) => {
                if value.len() > parallel_threshold() {
                    #[cfg(feature = "parallel")]
                    value.as_mut_slice().par_iter_mut().for_each(|x| *x = f(*x));
                    #[cfg(not(feature = "parallel"))]
                    value.iter_mut().for_each(|x| *x = f(*x));
                } else {
                    value.iter_mut().for_each(|x| *x = f(*x));
                }
            }
        }
    }

    /// Multiply in place
    pub fn scale(&mut self, factor: f64) {
        match self {
            PhysicalData::Scalar(value) => *value *= factor,
            PhysicalData::Vector(value) => *value *= factor,
        }
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Add for PhysicalData {
    type Output = PhysicalData;

    fn add(self, rhs: Self) -> Self::Output {
        use PhysicalData::*;
        match (self, rhs) {
            (Scalar(x), Scalar(y)) => Scalar(x + y),
            (Scalar(x), Vector(y)) | (Vector(y), Scalar(x)) => Vector(y.add_scalar(x)),
            (Vector(x), Vector(y)) => {
                assert_eq!(x.len(), y.len(), "Vector length must match");
                Vector(x + y)
            }
        }
    }
}

impl std::ops::Mul<f64> for PhysicalData {
    type Output = PhysicalData;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self.scale(scalar);
        self
    }
}

impl std::ops::Mul<PhysicalData> for f64 {
    type Output = PhysicalData;

    fn mul(self, rhs: PhysicalData) -> Self::Output {
        rhs * self
    }
}

// ======================== Display ============================

impl fmt::Display for PhysicalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalData::Scalar(value) => write!(f, "Scalar ({})", value),
            PhysicalData::Vector(value) => write!(f, "Vector [{}]", value.len()),
        }
    }
}

// ==================== Tests ====================
