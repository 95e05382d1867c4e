//! Error types
//!
//! Every fallible operation of the crate returns [`DiffusionResult`]. Configuration
//! problems are reported before the first time step; numerical problems carry the
//! step at which they were detected.

use thiserror::Error;

use crate::physics::PhysicalQuantity;

/// Crate result type
pub type DiffusionResult<T> = Result<T, DiffusionError>;

/// Errors raised while configuring, running or exporting a diffusion simulation
#[derive(Error, Debug)]
pub enum DiffusionError {
    /// A scalar parameter is outside its admissible range
    #[error("invalid parameter `{parameter}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (as written in the configuration file)
        parameter: &'static str,
        /// Offending value
        value: f64,
        /// What the parameter must satisfy
        reason: &'static str,
    },

    /// Explicit scheme would be unstable (r = D·dt/dx² above the limit)
    #[error("diffusion number r = {r:.4} exceeds the explicit stability limit {limit}")]
    UnstableTimeStep {
        /// Requested diffusion number
        r: f64,
        /// Stability limit of the 1D FTCS scheme
        limit: f64,
    },

    /// Structural configuration problem (empty boundaries, bad grid, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A solver was handed a configuration kind it does not implement
    #[error("{solver} only supports TimeEvolution or FixedStep configuration, got {requested}")]
    UnsupportedConfiguration {
        /// Solver name
        solver: &'static str,
        /// Name of the rejected solver type
        requested: String,
    },

    /// The scenario has no temporal boundary to start from
    #[error("no initial condition found in domain boundaries")]
    MissingInitialCondition,

    /// A model expected a quantity that the state does not carry
    #[error("{0} not found in physical state")]
    MissingQuantity(PhysicalQuantity),

    /// NaN or infinity appeared during time stepping
    #[error("{kind} detected in {quantity} at step {step}; reduce the diffusion number")]
    NonFinite {
        /// "NaN" or "Infinity"
        kind: &'static str,
        /// Affected quantity
        quantity: PhysicalQuantity,
        /// Step after which the value was found
        step: usize,
    },

    /// Data handed to an exporter is unusable
    #[error("export failed: {0}")]
    Export(String),

    /// Rendering a plot failed
    #[error("plotting failed: {0}")]
    Plot(String),

    /// Configuration file could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiffusionError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { parameter, value, reason }
    }
}
