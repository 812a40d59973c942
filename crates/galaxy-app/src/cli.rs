use std::path::PathBuf;

use clap::Parser;
use galaxy_common::ConfigError;
use galaxy_config::{validation, GalaxyConfig};

/// Galaxy: a procedural spiral galaxy point cloud with live parameter tweaks.
#[derive(Parser, Debug)]
#[command(name = "galaxy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `galaxy_core=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial particle count, overriding the config file (100 to 1000000).
    #[arg(long, value_parser = clap::value_parser!(u32).range(100..=1_000_000))]
    pub count: Option<u32>,

    /// Print the resolved config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Apply command-line overrides to the loaded config.
    ///
    /// The resulting galaxy parameters must still lie within the control bounds.
    pub fn apply_overrides(&self, config: &mut GalaxyConfig) -> Result<(), ConfigError> {
        if let Some(count) = self.count {
            tracing::info!("Particle count override: {count}");
            config.galaxy.count = count;
        }
        validation::validate_params(&config.galaxy)
    }
}
