//! Domain boundaries with time convention
//!
//! A domain is a list of named dimensions. Spatial dimensions hold their
//! two end states (left, right); the temporal dimension holds the initial
//! condition. `TimeAxisConvention` tells which dimension is time.

use std::fmt;

use crate::error::{DiffusionError, DiffusionResult};
use crate::physics::{PhysicalQuantity, PhysicalState};

// =================================================================================================
// Domain Boundaries
// =================================================================================================

/// Domain boundaries
///
/// # Design
///
/// Stores boundary states directly, without typing them as Dirichlet/Neumann.
/// For the diffusion scenario the spatial states are the fixed end values,
/// which the model enforces by leaving the end points untouched.
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
/// use diffusion_rs::solver::DomainBoundaries;
///
/// let initial = PhysicalState::new(
///     PhysicalQuantity::Concentration,
///     PhysicalData::from_vec(vec![500.0, 500.0, 0.0, 0.0]),
/// );
/// let left = PhysicalState::new(PhysicalQuantity::Concentration, PhysicalData::Scalar(500.0));
/// let right = PhysicalState::new(PhysicalQuantity::Concentration, PhysicalData::Scalar(0.0));
///
/// let boundaries = DomainBoundaries::mixed(&["x"], vec![left], vec![right], initial);
///
/// assert_eq!(boundaries.ndim(), 2);
/// assert_eq!(boundaries.sdim(), 1);
/// assert!(boundaries.is_time_dependent());
/// assert_eq!(
///     boundaries.dirichlet_values("x", PhysicalQuantity::Concentration),
///     Some((500.0, 0.0))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DomainBoundaries {
    /// Boundaries for each dimension
    pub dimensions: Vec<DimensionBoundary>,

    /// Convention for identifying time dimensions
    pub convention: TimeAxisConvention,
}

impl DomainBoundaries {
    /// Create with the default convention (time is the last dimension)
    pub fn new(dimensions: Vec<DimensionBoundary>) -> Self {
        Self {
            dimensions,
            convention: TimeAxisConvention::Last,
        }
    }

    // ====================================== Factory methods ======================================

    /// Create temporal-only domain
    pub fn temporal(initial: PhysicalState) -> Self {
        Self::new(vec![DimensionBoundary::new("t", vec![initial])])
    }

    /// Create spatial + temporal domain
    ///
    /// # Panics
    ///
    /// Panics if `names`, `begins`, and `ends` have different lengths.
    pub fn mixed(
        names: &[&str],
        begins: Vec<PhysicalState>,
        ends: Vec<PhysicalState>,
        initial: PhysicalState,
    ) -> Self {
        assert_eq!(names.len(), begins.len());
        assert_eq!(names.len(), ends.len());

        let mut dimensions: Vec<_> = names
            .iter()
            .zip(begins.into_iter().zip(ends))
            .map(|(name, (begin, end))| DimensionBoundary::new(*name, vec![begin, end]))
            .collect();

        dimensions.push(DimensionBoundary::new("t", vec![initial]));

        Self::new(dimensions)
    }

    // ===================================== Query methods =========================================

    /// Total number of dimensions
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Total number of spatial dimensions
    pub fn sdim(&self) -> usize {
        match self.convention {
            TimeAxisConvention::None => self.ndim(),
            TimeAxisConvention::Last => self.ndim().saturating_sub(1),
        }
    }

    /// Check time dependant equation
    pub fn is_time_dependent(&self) -> bool {
        self.convention != TimeAxisConvention::None
    }

    /// Get time dimension index
    pub fn time_index(&self) -> Option<usize> {
        match self.convention {
            TimeAxisConvention::Last => self.ndim().checked_sub(1),
            TimeAxisConvention::None => None,
        }
    }

    /// Get temporal boundary
    pub fn time_boundary(&self) -> Option<&DimensionBoundary> {
        self.time_index().and_then(|index| self.dimensions.get(index))
    }

    /// Get initial condition as the first physical state of temporal boundary
    pub fn initial_condition(&self) -> Option<&PhysicalState> {
        self.time_boundary().and_then(|boundary| boundary.first())
    }

    /// Get spatial boundaries
    pub fn spatial_boundaries(&self) -> Vec<&DimensionBoundary> {
        let excl_idx = self.time_index();

        self.dimensions
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != excl_idx)
            .map(|(_, dimension)| dimension)
            .collect()
    }

    /// Get dimension by its name
    pub fn get_boundary(&self, name: &str) -> Option<&DimensionBoundary> {
        self.dimensions.iter().find(|boundary| boundary.name == name)
    }

    /// Scalar (left, right) values of `quantity` on spatial dimension `name`
    pub fn dirichlet_values(&self, name: &str, quantity: PhysicalQuantity) -> Option<(f64, f64)> {
        let boundary = self.get_boundary(name)?;
        let left = boundary.first()?.get(quantity)?.try_as_scalar()?;
        let right = boundary.last()?.get(quantity)?.try_as_scalar()?;
        Some((left, right))
    }

    /// Validate the object contents
    pub fn validate(&self) -> DiffusionResult<()> {
        if self.dimensions.is_empty() {
            return Err(DiffusionError::InvalidConfiguration(
                "Dimension boundaries cannot be empty.".into(),
            ));
        }

        for dimension in &self.dimensions {
            dimension.validate()?;
        }

        let names: Vec<&str> = self.dimensions.iter().map(|d| d.name.as_str()).collect();
        let unicity: std::collections::HashSet<&str> = names.iter().copied().collect();

        if unicity.len() != names.len() {
            return Err(DiffusionError::InvalidConfiguration(
                "It is impossible to store two dimensions with the same name.".into(),
            ));
        }

        Ok(())
    }
}

impl Default for DomainBoundaries {
    fn default() -> Self {
        Self {
            dimensions: Vec::new(),
            convention: TimeAxisConvention::None,
        }
    }
}

// =================================================================================================
// Dimension Boundary
// =================================================================================================

/// Boundary for one dimension
///
/// - 1 state: temporal dimension (initial condition)
/// - 2 states: spatial dimension (left, right boundaries)
#[derive(Debug, Clone)]
pub struct DimensionBoundary {
    /// Dimension name
    pub name: String,

    /// Physical states at boundaries
    pub states: Vec<PhysicalState>,
}

impl DimensionBoundary {
    /// Generic constructor
    pub fn new(name: impl Into<String>, states: Vec<PhysicalState>) -> Self {
        Self { name: name.into(), states }
    }

    /// Get first boundary state
    pub fn first(&self) -> Option<&PhysicalState> {
        self.states.first()
    }

    /// Get last boundary state
    pub fn last(&self) -> Option<&PhysicalState> {
        self.states.last()
    }

    /// Get size of boundaries
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Verify if there are no boundaries
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Validate dimension
    pub fn validate(&self) -> DiffusionResult<()> {
        if self.is_empty() {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "Dimension '{}' must have at least one boundary state",
                self.name
            )));
        }

        Ok(())
    }
}

// =================================================================================================
// Time Axis Convention
// =================================================================================================

/// Convention for identifying registration of time variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAxisConvention {
    /// No time dimension
    None,

    /// Last dimension is time (x, ..., t)
    Last,
}

impl fmt::Display for TimeAxisConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeAxisConvention::None => write!(f, "None"),
            TimeAxisConvention::Last => write!(f, "Last"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicalData;

    fn scalar(value: f64) -> PhysicalState {
        PhysicalState::new(PhysicalQuantity::Concentration, PhysicalData::Scalar(value))
    }

    #[test]
    fn test_axis_convention_display() {
        assert_eq!(format!("{}", TimeAxisConvention::Last), "Last");
        assert_eq!(format!("{}", TimeAxisConvention::None), "None");
    }

    #[test]
    fn test_dimension_boundary() {
        let dimension = DimensionBoundary::new("x", vec![scalar(1.0), scalar(2.0)]);

        assert_eq!(dimension.name, "x");
        assert_eq!(dimension.size(), 2);
        assert_eq!(
            dimension.last().unwrap().get(PhysicalQuantity::Concentration).unwrap().try_as_scalar(),
            Some(2.0)
        );
    }

    #[test]
    fn test_empty_dimension_first_is_none() {
        let dimension = DimensionBoundary::new("x", vec![]);
        assert!(dimension.first().is_none());
        assert!(dimension.validate().is_err());
    }

    #[test]
    fn test_temporal_only() {
        let boundary = DomainBoundaries::temporal(PhysicalState::empty());

        assert_eq!(boundary.ndim(), 1);
        assert_eq!(boundary.sdim(), 0);
        assert!(boundary.is_time_dependent());
        assert!(boundary.initial_condition().is_some());
        assert!(boundary.spatial_boundaries().is_empty());
    }

    #[test]
    fn test_mixed() {
        let initial = PhysicalState::new(
            PhysicalQuantity::Concentration,
            PhysicalData::from_vec(vec![2.0]),
        );

        let boundary =
            DomainBoundaries::mixed(&["x"], vec![scalar(500.0)], vec![scalar(0.0)], initial);

        assert_eq!(boundary.ndim(), 2);
        assert_eq!(boundary.sdim(), 1);
        assert_eq!(boundary.time_index(), Some(1));
        assert_eq!(boundary.spatial_boundaries().len(), 1);
        assert_eq!(
            boundary.dirichlet_values("x", PhysicalQuantity::Concentration),
            Some((500.0, 0.0))
        );
        assert_eq!(boundary.dirichlet_values("y", PhysicalQuantity::Concentration), None);
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn test_default_is_invalid() {
        let boundary = DomainBoundaries::default();
        assert!(!boundary.is_time_dependent());
        assert!(boundary.initial_condition().is_none());
        assert!(boundary.validate().is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let boundary = DomainBoundaries::new(vec![
            DimensionBoundary::new("x", vec![scalar(0.0), scalar(1.0)]),
            DimensionBoundary::new("x", vec![scalar(0.0)]),
        ]);
        assert!(boundary.validate().is_err());
    }
}
