//! Integration tests: physics module + solver module
//!
//! These tests verify that the physical models and the Euler solver work
//! correctly together, and that the generic solver path reproduces the bare
//! FTCS stepper.

use diffusion_rs::config::DiffusionConfig;
use diffusion_rs::error::DiffusionError;
use diffusion_rs::models::{Grid, InitialProfile, LinearDiffusion, build_scenario};
use diffusion_rs::physics::{PhysicalModel, PhysicalQuantity};
use diffusion_rs::solver::{
    DomainBoundaries, EulerSolver, FtcsStepper, Scenario, Solver, SolverConfiguration,
};

mod common;
use common::{
    ExponentialDecay, assert_profiles_close, concentration, create_simple_scenario,
    relative_error, run_euler,
};

// =================================================================================================
// Basic Integration Tests
// =================================================================================================

#[test]
fn test_euler_with_exponential_decay() {
    let scenario = create_simple_scenario(Box::new(ExponentialDecay::new(5, 0.1)));

    let config = SolverConfiguration::time_evolution(10.0, 1000);
    let result = EulerSolver::new().solve(&scenario, &config).unwrap();

    assert_eq!(result.time_points.len(), 1001);
    assert!(result.time_points[0].abs() < 1e-10);
    assert!((result.final_time() - 10.0).abs() < 1e-10);

    // y(10) = exp(-1); Euler with dt = 0.01 stays within ~1%
    let final_value = concentration(&result.final_state)[0];
    let expected = ExponentialDecay::new(5, 0.1).analytical_solution(10.0, 1.0);
    let error = relative_error(final_value, expected);

    assert!(error < 0.02, "Error {} too large", error);
}

#[test]
fn test_euler_matches_ftcs_stepper() {
    let config = DiffusionConfig::default().with_time_steps(400);
    let result = run_euler(&config, config.time_steps);

    let grid = config.grid().unwrap();
    let mut field = config.initial.sample(&grid);
    FtcsStepper::new(config.diffusivity, config.dx, config.time_step())
        .unwrap()
        .advance(&mut field, config.time_steps);

    assert_profiles_close(
        concentration(&result.final_state),
        field.as_slice(),
        1e-9,
        "Euler + LinearDiffusion vs FtcsStepper",
    );
}

#[test]
fn test_temperature_quantity() {
    // Rod at 20 degrees with its left end held at 100
    let grid = Grid::uniform(10.0, 0.5).unwrap();
    let model = LinearDiffusion::new(grid, 1.0, InitialProfile::step_at(100.0, 20.0, 0.0))
        .unwrap()
        .with_quantity(PhysicalQuantity::Temperature);

    let scenario = create_simple_scenario(Box::new(model));
    let config = SolverConfiguration::fixed_step(0.1, 500);
    let result = EulerSolver::new().solve(&scenario, &config).unwrap();

    assert!(result.final_state.profile(PhysicalQuantity::Concentration).is_none());
    let temperature = result.final_state.profile(PhysicalQuantity::Temperature).unwrap();

    assert_eq!(temperature[0], 100.0);
    assert_eq!(temperature[19], 20.0);
    assert!(temperature[1] > 20.0);
    assert!(temperature.iter().all(|&t| (20.0 - 1e-9..=100.0 + 1e-9).contains(&t)));
}

#[test]
fn test_trajectory_snapshots_match_interval() {
    let config = DiffusionConfig::default().with_time_steps(100);
    let result = run_euler(&config, 25);

    assert_eq!(result.len(), 5);
    let dt = config.time_step();
    for (k, &t) in result.time_points.iter().enumerate() {
        assert!((t - (k * 25) as f64 * dt).abs() < 1e-12);
    }

    let initial = concentration(result.initial_state().unwrap());
    let sampled = config.initial.sample(&config.grid().unwrap());
    assert_eq!(initial, sampled.as_slice());
}

// =================================================================================================
// Error Detection Tests
// =================================================================================================

#[test]
fn test_solver_detects_invalid_config() {
    let scenario = build_scenario(&DiffusionConfig::default()).unwrap();

    let config = SolverConfiguration::fixed_step(-0.1, 10);
    let result = EulerSolver::new().solve(&scenario, &config);

    assert!(result.is_err());
}

#[test]
fn test_solver_reports_mismatched_initial_state() {
    // Initial state sized for another grid
    let profile = InitialProfile::step(1.0, 0.0);
    let grid = Grid::uniform(10.0, 1.0).unwrap();
    let other_grid = Grid::uniform(5.0, 1.0).unwrap();
    let model = LinearDiffusion::new(grid, 1.0, profile.clone()).unwrap();
    let wrong = LinearDiffusion::new(other_grid, 1.0, profile).unwrap();

    let boundaries = DomainBoundaries::temporal(wrong.setup_initial_state());
    let scenario = Scenario::new(Box::new(model), boundaries);
    let result = EulerSolver::new().solve(&scenario, &SolverConfiguration::fixed_step(0.1, 3));

    assert!(matches!(result, Err(DiffusionError::InvalidConfiguration(_))));
}
