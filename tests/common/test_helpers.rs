//! Helper functions for integration tests

use diffusion_rs::config::DiffusionConfig;
use diffusion_rs::models::build_scenario;
use diffusion_rs::physics::{PhysicalModel, PhysicalQuantity, PhysicalState};
use diffusion_rs::solver::{
    DomainBoundaries, EulerSolver, Scenario, SimulationResult, Solver, SolverConfiguration,
};

/// Run `config` through the Euler solver, keeping every `interval`-th state
pub fn run_euler(config: &DiffusionConfig, interval: usize) -> SimulationResult {
    let scenario = build_scenario(config).unwrap();
    let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps)
        .with_snapshot_interval(interval);

    EulerSolver::new().solve(&scenario, &solver_config).unwrap()
}

/// Concentration profile of a state
pub fn concentration(state: &PhysicalState) -> &[f64] {
    state
        .profile(PhysicalQuantity::Concentration)
        .expect("state has no concentration profile")
}

/// Discrete mass Σ C[i]·dx
pub fn total_mass(profile: &[f64], dx: f64) -> f64 {
    profile.iter().sum::<f64>() * dx
}

/// Assert that two profiles agree point by point
pub fn assert_profiles_close(a: &[f64], b: &[f64], tolerance: f64, message: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", message);

    for (i, (&va, &vb)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (va - vb).abs();
        assert!(
            diff <= tolerance,
            "{}: point {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Whether `profile[i + 1] <= profile[i] + tolerance` everywhere
pub fn is_non_increasing(profile: &[f64], tolerance: f64) -> bool {
    profile.windows(2).all(|pair| pair[1] <= pair[0] + tolerance)
}

/// Number of sign changes between neighbours, zeros skipped
pub fn sign_changes(profile: &[f64]) -> usize {
    let signs: Vec<bool> = profile
        .iter()
        .filter(|v| **v != 0.0)
        .map(|v| *v > 0.0)
        .collect();

    signs.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

/// Create a temporal scenario from any model's own initial state
pub fn create_simple_scenario(model: Box<dyn PhysicalModel>) -> Scenario {
    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::temporal(initial);
    Scenario::new(model, boundaries)
}

/// Relative error |computed - expected| / |expected|
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-15 {
        computed.abs()
    } else {
        ((computed - expected) / expected).abs()
    }
}
