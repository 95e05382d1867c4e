//! `diffuse` command line interface
//!
//! Runs the 1D diffusion simulation from a JSON configuration and/or
//! command-line overrides, and writes plots and CSV profiles.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// One-dimensional FTCS diffusion solver
#[derive(Parser)]
#[command(name = "diffuse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explicit finite-difference solver for the 1D diffusion equation")]
#[command(long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write its outputs
    Run(commands::run::RunArgs),
    /// Validate a configuration and print the derived quantities
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    }
}
