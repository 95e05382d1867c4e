//! End-to-end checks of the reference run
//!
//! D = 100, Lx = 300, dx = 0.5 (600 points), r = 0.5 (dt = 0.00125) and
//! 5000 steps, from a step of 500 on the left half down to 0.

use approx::assert_relative_eq;
use diffusion_rs::config::DiffusionConfig;
use diffusion_rs::models::InitialProfile;
use diffusion_rs::solver::FtcsStepper;

mod common;
use common::{concentration, is_non_increasing, run_euler, total_mass};

fn reference_field() -> nalgebra::DVector<f64> {
    let config = DiffusionConfig::default();
    config.initial.sample(&config.grid().unwrap())
}

fn reference_profile() -> Vec<f64> {
    let config = DiffusionConfig::default();
    let result = run_euler(&config, 1000);

    assert_eq!(result.len(), 6);
    assert_relative_eq!(result.final_time(), 6.25, epsilon = 1e-9);

    concentration(&result.final_state).to_vec()
}

#[test]
fn test_reference_run_profile() {
    let profile = reference_profile();
    let grid = DiffusionConfig::default().grid().unwrap();

    assert_eq!(profile.len(), 600);

    // End points are never updated
    assert_eq!(profile[0], 500.0);
    assert_eq!(profile[599], 0.0);

    assert!(is_non_increasing(&profile, 1e-9), "profile is not monotone");
    assert!(profile.iter().all(|&c| (-1e-9..=500.0 + 1e-9).contains(&c)));

    // Front centred near the initial discontinuity at x = 150.25
    let crossing = grid.crossing(&profile, 250.0).unwrap();
    assert!((145.0..=155.0).contains(&crossing), "250 crossing at x = {}", crossing);

    // 250·erfc((x - 150.25) / 50) gives about 461 and 40
    assert!(profile[200] > 440.0 && profile[200] < 480.0, "C(100) = {}", profile[200]);
    assert!(profile[400] > 20.0 && profile[400] < 60.0, "C(200) = {}", profile[400]);

    // At r = 0.5 neighbours come in equal pairs, so each drop spans two
    // points: 2·dx·500 / sqrt(4π·D·t) ≈ 5.64 at the front
    let largest_jump = profile
        .windows(3)
        .map(|triple| (triple[0] - triple[2]).abs())
        .fold(0.0, f64::max);
    assert!(largest_jump < 6.5, "largest jump over two points {}", largest_jump);
}

/// Largest |C[i] - C[i + 1]| over the pairs starting at `offset`
fn pair_mismatch(profile: &[f64], offset: usize) -> f64 {
    profile[offset..]
        .chunks_exact(2)
        .map(|pair| (pair[0] - pair[1]).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_marginal_r_decouples_even_and_odd_points() {
    // C'[i] = (C[i-1] + C[i+1]) / 2 never reads C[i]: the field forms a
    // staircase whose pairs shift by one point every step
    let mut field = reference_field();
    let stepper = FtcsStepper::stable(100.0, 0.5).unwrap();

    stepper.advance(&mut field, 5000);
    let profile = field.as_slice();
    assert!(pair_mismatch(profile, 1) < 1e-2);
    assert!(pair_mismatch(profile, 0) > 5.0);
    assert!((profile[297] - profile[298]).abs() < 1e-9);

    stepper.advance(&mut field, 1);
    let profile = field.as_slice();
    assert!(pair_mismatch(profile, 0) < 1e-2);
    assert!(pair_mismatch(profile, 1) > 5.0);
}

#[test]
fn test_reference_run_is_deterministic() {
    assert_eq!(reference_profile(), reference_profile());
}

#[test]
fn test_zero_steps_leave_initial_profile() {
    let config = DiffusionConfig::default().with_time_steps(0);
    let result = run_euler(&config, 1);

    let sampled = config.initial.sample(&config.grid().unwrap());
    assert_eq!(result.len(), 1);
    assert_eq!(concentration(&result.final_state), sampled.as_slice());
}

#[test]
fn test_initial_midpoint_takes_left_value() {
    let config = DiffusionConfig::default();
    let sampled = config.initial.sample(&config.grid().unwrap());

    assert_eq!(sampled[300], 500.0);
    assert_eq!(sampled[301], 0.0);
    assert_eq!(sampled.iter().filter(|&&c| c == 500.0).count(), 301);
}

#[test]
fn test_mass_conserved_while_front_is_interior() {
    let config = DiffusionConfig::default();
    let grid = config.grid().unwrap();
    let stepper = FtcsStepper::stable(config.diffusivity, config.dx).unwrap();

    let mut field = config.initial.sample(&grid);
    let initial_mass = total_mass(field.as_slice(), config.dx);

    // Early steps: the front has not reached either end
    stepper.advance(&mut field, 100);
    let early = total_mass(field.as_slice(), config.dx);
    assert_relative_eq!(early, initial_mass, max_relative = 1e-12);

    // Full run: only a tiny flux through the held ends
    stepper.advance(&mut field, 4900);
    let full = total_mass(field.as_slice(), config.dx);
    assert!((full - initial_mass).abs() / initial_mass < 1e-4);
}

#[test]
fn test_pulse_with_zero_ends_loses_mass() {
    let config = DiffusionConfig::default()
        .with_diffusivity(1.0)
        .with_length(10.0)
        .with_time_steps(2000)
        .with_initial(InitialProfile::rectangle(0.0, 100.0, 4.0, 6.0));

    let result = run_euler(&config, 1);
    assert_eq!(result.len(), 2001);

    let masses: Vec<f64> = result
        .state_trajectory
        .iter()
        .map(|state| total_mass(concentration(state), config.dx))
        .collect();

    for pair in masses.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-9, "mass grew from {} to {}", pair[0], pair[1]);
    }
    assert!(masses[2000] < 0.5 * masses[0]);

    let last = concentration(&result.final_state);
    assert_eq!(last[0], 0.0);
    assert_eq!(last[last.len() - 1], 0.0);
}

#[test]
fn test_grid_without_interior_is_unchanged() {
    // Two points: both are end points
    let config = DiffusionConfig::default().with_length(1.0).with_time_steps(10);
    assert_eq!(config.grid_points(), 2);

    let result = run_euler(&config, 1);
    let initial = concentration(result.initial_state().unwrap());

    assert_eq!(concentration(&result.final_state), initial);
}
