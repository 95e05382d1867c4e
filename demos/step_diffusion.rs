//! Step Profile Diffusion (reference run)
//!
//! ∂C/∂t = D·∂²C/∂x²
//!
//! - D = 100, Lx = 300, dx = 0.5 (600 points)
//! - C = 500 for x <= 150, 0 beyond; both end values held fixed
//! - r = 0.5, dt = 0.00125, 5000 steps (t = 6.25)
//!
//! Runs the bare FTCS stepper and the Euler solver on the same problem,
//! then writes `initial.png`, `final.png` and `profiles.csv` to `demo_output/`.

use diffusion_rs::{
    config::DiffusionConfig,
    models::build_scenario,
    output::{
        CsvConfig, CsvMetadata, PlotConfig, export_profiles_csv, plot_profile,
    },
    physics::PhysicalQuantity,
    solver::{EulerSolver, FtcsStepper, Solver, SolverConfiguration},
};
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== 1D Diffusion: Step Profile ===\n");

    let config = DiffusionConfig::default();
    config.validate()?;
    let grid = config.grid()?;

    println!("Physical Parameters:");
    println!("  Diffusivity D: {}", config.diffusivity);
    println!("  Domain length: {}", config.length);
    println!("  Grid: {} points, dx = {}", grid.len(), grid.dx());
    println!("\nSimulation:");
    println!("  r = {}, dt = {}", config.diffusion_number, config.time_step());
    println!("  Time steps: {} (t = {})\n", config.time_steps, config.total_time());

    let initial = config.initial.sample(&grid);

    // Bare stepper
    println!("Advancing with FtcsStepper...");
    let start = Instant::now();
    let mut field = initial.clone();
    FtcsStepper::new(config.diffusivity, config.dx, config.time_step())?
        .advance(&mut field, config.time_steps);
    println!("✓ Stepper completed in {:.3}s", start.elapsed().as_secs_f64());

    // Same run through the generic solver
    println!("Solving with Forward Euler...");
    let scenario = build_scenario(&config)?;
    let solver_config = SolverConfiguration::fixed_step(config.time_step(), config.time_steps)
        .with_snapshot_interval(config.time_steps);

    let start = Instant::now();
    let result = EulerSolver::new().solve(&scenario, &solver_config)?;
    println!("✓ Euler completed in {:.3}s\n", start.elapsed().as_secs_f64());

    let last = result
        .final_state
        .profile(PhysicalQuantity::Concentration)
        .ok_or("final state has no concentration")?;

    let max_diff = last
        .iter()
        .zip(field.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("Max |Euler - stepper|: {:.3e}", max_diff);

    println!("\nBoundary values:");
    println!("  C(x=0)  = {}", last[0]);
    println!("  C(x=Lx) = {}", last[grid.len() - 1]);

    if let Some(x) = grid.crossing(last, 250.0) {
        println!("  C = 250 at x = {:.3}", x);
    }

    std::fs::create_dir_all("demo_output")?;

    plot_profile(
        grid.positions(),
        initial.as_slice(),
        "demo_output/initial.png",
        Some(&PlotConfig::profile("Initial Concentration")),
    )?;
    plot_profile(
        grid.positions(),
        last,
        "demo_output/final.png",
        Some(&PlotConfig::profile(format!("Concentration at t = {}", result.final_time()))),
    )?;

    let csv_config = CsvConfig::default().with_metadata(Some(CsvMetadata::from_result(&result)));
    export_profiles_csv(
        grid.positions(),
        &[("initial", initial.as_slice()), ("final", last)],
        "demo_output/profiles.csv",
        Some(&csv_config),
    )?;

    println!("\n✓ Plots and CSV written to demo_output/");
    Ok(())
}
