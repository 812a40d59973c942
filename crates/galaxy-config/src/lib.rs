//! Galaxy configuration system.
//!
//! Provides the TOML-backed scene configuration, the control surface that
//! edits galaxy parameters at runtime, validation, and live reload. All
//! config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use galaxy_config::{config_to_json, toml_loader};
//!
//! # fn main() -> Result<(), galaxy_common::ConfigError> {
//! let path = toml_loader::default_config_path()?;
//! let config = toml_loader::load_from_path(&path)?;
//! println!("{}", config_to_json(&config));
//! # Ok(())
//! # }
//! ```

pub mod colors;
pub mod controls;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use controls::{ControlEvent, ControlId, ControlKind, ControlSpec, TweakPanel, CONTROLS};
pub use reload::ReloadManager;
pub use schema::{GalaxyConfig, GalaxyParams, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GalaxyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&GalaxyConfig::default());
        for section in ["galaxy", "camera", "animation", "window", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }

    #[test]
    fn config_to_json_contains_defaults() {
        let json = config_to_json(&GalaxyConfig::default());
        assert!(json.contains("\"#ff6030\""));
        assert!(json.contains("\"#1b3984\""));
        assert!(json.contains("100000"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GalaxyConfig::default();
        let parsed: GalaxyConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
