//! Spatial profile plotting
//!
//! Plots of C(x) at one or several times. The backend is chosen from the
//! file extension: `.svg` gives an SVG file, anything else a PNG bitmap.
//!
//! # Usage
//!
//! ```rust,ignore
//! use diffusion_rs::output::visualization::{plot_profile_comparison, plot_profile_evolution};
//!
//! let result = solver.solve(&scenario, &config)?;
//! plot_profile_comparison(
//!     &[("Initial", grid.positions(), initial), ("Final", grid.positions(), last)],
//!     "profile.png",
//!     None,
//! )?;
//! let quantity = PhysicalQuantity::Concentration;
//! plot_profile_evolution(&result, &grid, quantity, 5, "evolution.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::{NO_TITLE, PlotConfig};
use crate::error::{DiffusionError, DiffusionResult};
use crate::models::Grid;
use crate::output::{snapshot_indices, state_profile};
use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;

/// One labelled curve: (label, positions, values)
pub type ProfileSeries<'a> = (&'a str, &'a [f64], &'a [f64]);

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot one profile C(x)
///
/// # Errors
///
/// [`DiffusionError::Plot`] when the data is empty or inconsistent, or when
/// rendering fails.
pub fn plot_profile(
    positions: &[f64],
    values: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> DiffusionResult<()> {
    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let mut single = config.clone();
    single.series_colors = Some(vec![config.line_color]);

    plot_profile_comparison(&[("Profile", positions, values)], output_path, Some(&single))
}

/// Overlay several profiles on the same axes
///
/// Used for the initial vs final comparison of a run.
///
/// # Example
///
/// ```rust,ignore
/// plot_profile_comparison(
///     &[("t = 0", &x, &c_initial), ("t = 6.25", &x, &c_final)],
///     "comparison.png",
///     None,
/// )?;
/// ```
pub fn plot_profile_comparison(
    profiles: &[ProfileSeries<'_>],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> DiffusionResult<()> {
    if profiles.is_empty() {
        return Err(DiffusionError::Plot("No profiles provided".into()));
    }

    for (label, positions, values) in profiles {
        if positions.is_empty() {
            return Err(DiffusionError::Plot(format!("Profile '{}' is empty", label)));
        }
        if positions.len() != values.len() {
            return Err(DiffusionError::Plot(format!(
                "Profile '{}' has {} positions but {} values",
                label,
                positions.len(),
                values.len()
            )));
        }
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_range = axis_range(profiles.iter().flat_map(|(_, x, _)| x.iter().copied()), false);
    let y_range = axis_range(profiles.iter().flat_map(|(_, _, c)| c.iter().copied()), true);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let rendered = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, profiles, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, profiles, config, x_range, y_range)
        }
    };

    rendered.map_err(|e| DiffusionError::Plot(e.to_string()))
}

/// Plot profile evolution (several recorded snapshots)
///
/// Picks `n_snapshots` states uniformly from the trajectory, always including
/// the first and the last, and overlays them labelled by their time.
pub fn plot_profile_evolution(
    result: &SimulationResult,
    grid: &Grid,
    quantity: PhysicalQuantity,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> DiffusionResult<()> {
    if result.is_empty() {
        return Err(DiffusionError::Plot("Empty trajectory".into()));
    }

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for index in snapshot_indices(result.len(), n_snapshots) {
        let profile = state_profile(&result.state_trajectory[index], quantity)
            .map_err(|e| DiffusionError::Plot(e.to_string()))?;
        labels.push(format!("t = {:.4}", result.time_points[index]));
        values.push(profile);
    }

    let profiles: Vec<ProfileSeries<'_>> = labels
        .iter()
        .zip(&values)
        .map(|(label, profile)| (label.as_str(), grid.positions(), *profile))
        .collect();

    let default_config = PlotConfig::evolution(NO_TITLE);
    plot_profile_comparison(&profiles, output_path, Some(config.unwrap_or(&default_config)))
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Implementation with concrete backend
fn plot_profiles_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[ProfileSeries<'_>],
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    for (idx, (label, positions, values)) in profiles.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                positions.iter().zip(values.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Min/max of finite values, padded so the range is never empty
///
/// The value axis keeps 0 in view and gets a 10% head room.
fn axis_range(values: impl Iterator<Item = f64>, value_axis: bool) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() {
        return (0.0, 1.0);
    }

    let (min, max) = if value_axis {
        let span = (max - min).max(1e-10);
        let lo = if min < 0.0 { min - 0.05 * span } else { 0.0 };
        (lo, max + 0.1 * span)
    } else {
        (min, max)
    };

    if max - min < 1e-12 { (min - 0.5, max + 0.5) } else { (min, max) }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_range_positions() {
        assert_eq!(axis_range([0.0, 0.5, 299.5].into_iter(), false), (0.0, 299.5));
    }

    #[test]
    fn test_axis_range_values_keeps_zero_and_head_room() {
        let (lo, hi) = axis_range([500.0, 250.0, 0.0].into_iter(), true);
        assert_eq!(lo, 0.0);
        assert!((hi - 550.0).abs() < 1e-9);

        let (lo, _) = axis_range([10.0, 20.0].into_iter(), true);
        assert_eq!(lo, 0.0);
    }

    #[test]
    fn test_axis_range_degenerate() {
        assert_eq!(axis_range(std::iter::empty(), true), (0.0, 1.0));
        assert_eq!(axis_range([3.0].into_iter(), false), (2.5, 3.5));
        assert_eq!(axis_range([f64::NAN].into_iter(), false), (0.0, 1.0));
    }

    #[test]
    fn test_comparison_rejects_bad_input() {
        let x = [0.0, 1.0, 2.0];
        let c = [1.0, 2.0];

        assert!(matches!(
            plot_profile_comparison(&[], "unused.png", None),
            Err(DiffusionError::Plot(_))
        ));
        assert!(matches!(
            plot_profile_comparison(&[("bad", &x, &c)], "unused.png", None),
            Err(DiffusionError::Plot(_))
        ));
        assert!(plot_profile(&[], &[], "unused.png", None).is_err());
    }

    #[test]
    fn test_evolution_rejects_empty_result() {
        let grid = Grid::uniform(1.0, 0.5).unwrap();
        let result = SimulationResult::new(vec![], vec![], crate::physics::PhysicalState::empty());

        let quantity = PhysicalQuantity::Concentration;
        assert!(plot_profile_evolution(&result, &grid, quantity, 3, "unused.svg", None).is_err());
    }

    #[test]
    fn test_plot_profile_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.svg");

        let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.5).collect();
        let c: Vec<f64> = x.iter().map(|&x| if x <= 12.0 { 500.0 } else { 0.0 }).collect();

        plot_profile(&x, &c, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }
}
