//! `diffuse run`: simulate and write outputs

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use diffusion_rs::models::build_scenario;
use diffusion_rs::output::{
    CsvConfig, CsvExporter, Exporter, PlotConfig, plot_profile_comparison, plot_profile_evolution,
};
use diffusion_rs::physics::PhysicalQuantity;
use diffusion_rs::solver::{EulerSolver, Solver, SolverConfiguration};

use super::ConfigArgs;

/// Run arguments
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Number of profiles kept for the evolution plot and the CSV file
    #[arg(long, default_value = "6")]
    pub snapshots: usize,

    /// Skip the PNG plots
    #[arg(long)]
    pub no_plot: bool,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,
}

/// Execute the run command
pub fn execute(args: RunArgs) -> Result<()> {
    info!("=== diffuse: simulation start ===");

    let config = args.config.load()?;
    let grid = config.grid()?;
    let dt = config.time_step();

    info!(
        "D = {}, Lx = {}, dx = {}, nx = {}",
        config.diffusivity,
        config.length,
        config.dx,
        grid.len()
    );
    info!(
        "dt = {}, r = {}, steps = {}, total time = {}",
        dt,
        config.diffusion_number,
        config.time_steps,
        config.total_time()
    );

    let scenario = build_scenario(&config).context("failed to build scenario")?;
    let quantity = PhysicalQuantity::Concentration;

    let (left, right) = scenario
        .conditions
        .dirichlet_values("x", quantity)
        .context("scenario has no fixed end values")?;
    info!("fixed boundaries: C(0) = {}, C(Lx) = {}", left, right);

    let snapshots = args.snapshots.max(2);
    let interval = (config.time_steps / (snapshots - 1)).max(1);
    let solver_config =
        SolverConfiguration::fixed_step(dt, config.time_steps).with_snapshot_interval(interval);

    let start = Instant::now();
    let result = EulerSolver::new()
        .solve(&scenario, &solver_config)
        .context("simulation failed")?;
    info!("{} steps in {:.3?}", config.time_steps, start.elapsed());

    let initial = result
        .initial_state()
        .and_then(|state| state.profile(quantity))
        .context("result has no initial profile")?;
    let last = result
        .final_state
        .profile(quantity)
        .context("result has no final profile")?;

    let level = 0.5 * (left + right);
    match grid.crossing(last, level) {
        Some(x) => info!("C = {} reached at x = {:.3}", level, x),
        None => warn!("final profile never crosses C = {}", level),
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    if !args.no_plot {
        let profile_path = args.output.join("profile.png");
        let comparison = PlotConfig::profile(format!("Diffusion, D = {}", config.diffusivity));
        let final_label = format!("t = {:.4}", result.final_time());

        // Rendering needs system fonts; a missing font is not worth losing the run
        match plot_profile_comparison(
            &[("t = 0", grid.positions(), initial), (final_label.as_str(), grid.positions(), last)],
            &profile_path.to_string_lossy(),
            Some(&comparison),
        ) {
            Ok(()) => info!("profile plot written to {}", profile_path.display()),
            Err(e) => warn!("profile plot skipped: {}", e),
        }

        let evolution_path = args.output.join("evolution.png");
        match plot_profile_evolution(
            &result,
            &grid,
            quantity,
            snapshots,
            &evolution_path.to_string_lossy(),
            None,
        ) {
            Ok(()) => info!("evolution plot written to {}", evolution_path.display()),
            Err(e) => warn!("evolution plot skipped: {}", e),
        }
    }

    if !args.no_csv {
        let csv_path = args.output.join("profile.csv");
        CsvExporter::new(CsvConfig::default().with_metadata(None))
            .export_result(&result, &grid, Some(snapshots), &csv_path.to_string_lossy())
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        info!("profiles written to {}", csv_path.display());
    }

    info!("=== diffuse: done ===");
    Ok(())
}
