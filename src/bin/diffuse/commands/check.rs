//! `diffuse check`: validate a configuration

use anyhow::Result;
use clap::Args;
use tracing::info;

use diffusion_rs::solver::STABILITY_LIMIT;

use super::ConfigArgs;

/// Check arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Also print the effective configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    info!("=== diffuse: configuration check ===");

    let config = args.config.load()?;

    println!("grid points (nx) : {}", config.grid_points());
    println!("dx               : {}", config.dx);
    println!("dt               : {}", config.time_step());
    println!("diffusion number : {} (limit {})", config.diffusion_number, STABILITY_LIMIT);
    println!("time steps       : {}", config.time_steps);
    println!("total time       : {}", config.total_time());

    if config.grid_points() < 3 {
        println!("note: fewer than 3 points, the profile will not change");
    }

    if args.json {
        println!("{}", config.to_json_pretty()?);
    }

    info!("configuration is valid");
    Ok(())
}
