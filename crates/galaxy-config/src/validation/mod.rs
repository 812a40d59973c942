//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod galaxy;
mod helpers;
mod scene;


use crate::schema::{GalaxyConfig, GalaxyParams};
use galaxy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GalaxyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    galaxy::validate_galaxy(&mut errors, &config.galaxy);
    scene::validate_camera(&mut errors, config);
    scene::validate_animation(&mut errors, config);
    scene::validate_window(&mut errors, config);

    finish(errors)
}

/// Validate only the galaxy parameters against the control bounds.
pub fn validate_params(params: &GalaxyParams) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    galaxy::validate_galaxy(&mut errors, params);
    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
