//! Initial concentration profiles
//!
//! Defines C(x, t=0) over the grid. The default is the step of the
//! classic diffusion example: high on the left half, low on the right half.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::{Grid, InitialProfile};
//!
//! let grid = Grid::uniform(300.0, 0.5).unwrap();
//! let field = InitialProfile::step(500.0, 0.0).sample(&grid);
//!
//! assert_eq!(field[300], 500.0);   // x = 150, the midpoint, is on the left side
//! assert_eq!(field[301], 0.0);     // x = 150.5
//! ```

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{DiffusionError, DiffusionResult};
use crate::models::Grid;

/// Initial profile C(x, 0)
///
/// Serialised with a `kind` tag, e.g.
/// `{"kind": "step", "left": 500.0, "right": 0.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialProfile {
    /// Step discontinuity at `split`
    ///
    /// Points with `x <= split` take `left`, points with `x > split` take
    /// `right`. Without `split` the middle of the domain is used.
    Step {
        left: f64,
        right: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        split: Option<f64>,
    },

    /// Top-hat pulse: `value` on `[start, end]`, `background` elsewhere
    Rectangle {
        background: f64,
        value: f64,
        start: f64,
        end: f64,
    },

    /// Same value everywhere
    Uniform { value: f64 },
}

impl InitialProfile {
    /// Step at the middle of the domain
    pub fn step(left: f64, right: f64) -> Self {
        Self::Step { left, right, split: None }
    }

    /// Step at an explicit position
    pub fn step_at(left: f64, right: f64, split: f64) -> Self {
        Self::Step { left, right, split: Some(split) }
    }

    /// Top-hat pulse
    pub fn rectangle(background: f64, value: f64, start: f64, end: f64) -> Self {
        Self::Rectangle { background, value, start, end }
    }

    /// Value of the profile at `x` on a domain of `length`
    pub fn evaluate(&self, x: f64, length: f64) -> f64 {
        match self {
            Self::Step { left, right, split } => {
                let split = split.unwrap_or(length / 2.0);
                if x <= split { *left } else { *right }
            }
            Self::Rectangle { background, value, start, end } => {
                if x >= *start && x <= *end { *value } else { *background }
            }
            Self::Uniform { value } => *value,
        }
    }

    /// Profile sampled at every grid position
    pub fn sample(&self, grid: &Grid) -> DVector<f64> {
        DVector::from_iterator(
            grid.len(),
            grid.positions().iter().map(|&x| self.evaluate(x, grid.length())),
        )
    }

    /// Check that every parameter is finite and the pulse bounds are ordered
    pub fn validate(&self) -> DiffusionResult<()> {
        let values: Vec<(&'static str, f64)> = match self {
            Self::Step { left, right, split } => {
                let mut values = vec![("initial.left", *left), ("initial.right", *right)];
                if let Some(split) = split {
                    values.push(("initial.split", *split));
                }
                values
            }
            Self::Rectangle { background, value, start, end } => {
                if start > end {
                    return Err(DiffusionError::InvalidConfiguration(format!(
                        "Rectangle profile starts at {} after its end {}",
                        start, end
                    )));
                }
                vec![
                    ("initial.background", *background),
                    ("initial.value", *value),
                    ("initial.start", *start),
                    ("initial.end", *end),
                ]
            }
            Self::Uniform { value } => vec![("initial.value", *value)],
        };

        for (parameter, value) in values {
            if !value.is_finite() {
                return Err(DiffusionError::invalid(parameter, value, "must be finite"));
            }
        }

        Ok(())
    }
}

impl Default for InitialProfile {
    fn default() -> Self {
        Self::step(500.0, 0.0)
    }
}
