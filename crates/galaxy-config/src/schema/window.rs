//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title prefix.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    /// Upper bound on the device pixel ratio used for the surface (valid range: 1.0-4.0).
    pub max_pixel_ratio: f64,
    /// Show frames-per-second in the title bar.
    pub show_fps: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Galaxy".into(),
            width: 1280,
            height: 800,
            max_pixel_ratio: 2.0,
            show_fps: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Galaxy");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert!((config.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert!(config.show_fps);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Spiral"
width = 1920
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Spiral");
        assert_eq!(config.width, 1920);
        // Defaults preserved
        assert_eq!(config.height, 800);
    }
}
