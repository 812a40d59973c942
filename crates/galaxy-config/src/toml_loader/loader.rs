//! TOML config loading.

use crate::schema::{GalaxyConfig, GalaxyParams};
use crate::validation;
use galaxy_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Parse config TOML text, using serde defaults for missing fields.
pub fn parse_str(content: &str) -> Result<GalaxyConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Read and parse a config file without any validation.
pub fn read_from_path(path: &Path) -> Result<GalaxyConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::io(path, e),
    })?;
    parse_str(&content)
}

/// Load the config used at startup.
///
/// A `[galaxy]` section outside the control bounds is replaced by the
/// defaults. Problems in the other sections are logged and the parsed
/// values kept.
pub fn load_from_path(path: &Path) -> Result<GalaxyConfig, ConfigError> {
    let mut config = read_from_path(path)?;

    if let Err(e) = validation::validate_params(&config.galaxy) {
        warn!("{e}; using default [galaxy] parameters");
        config.galaxy = GalaxyParams::default();
    }
    if let Err(e) = validation::validate(&config) {
        warn!("{e}; continuing with the parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}
