//! Sub-commands of `diffuse`

pub mod check;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diffusion_rs::config::DiffusionConfig;

/// Configuration file plus per-parameter overrides
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON configuration file (reference case when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Diffusivity D
    #[arg(long)]
    pub diffusivity: Option<f64>,

    /// Domain length Lx
    #[arg(long)]
    pub length: Option<f64>,

    /// Grid spacing dx
    #[arg(long)]
    pub dx: Option<f64>,

    /// Number of time steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Diffusion number r = D·dt/dx² (at most 0.5)
    #[arg(long)]
    pub diffusion_number: Option<f64>,
}

impl ConfigArgs {
    /// Load the file (if any), apply overrides and validate
    pub fn load(&self) -> Result<DiffusionConfig> {
        let mut config = match &self.config {
            Some(path) => DiffusionConfig::from_json_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => DiffusionConfig::default(),
        };

        if let Some(diffusivity) = self.diffusivity {
            config = config.with_diffusivity(diffusivity);
        }
        if let Some(length) = self.length {
            config = config.with_length(length);
        }
        if let Some(dx) = self.dx {
            config = config.with_dx(dx);
        }
        if let Some(steps) = self.steps {
            config = config.with_time_steps(steps);
        }
        if let Some(r) = self.diffusion_number {
            config = config.with_diffusion_number(r);
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}
