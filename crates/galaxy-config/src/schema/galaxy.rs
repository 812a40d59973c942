//! Galaxy generation parameters.

use serde::{Deserialize, Serialize};

/// The parameter set that drives galaxy generation.
///
/// `size` only affects rendering. `randomness` is exposed as a control but
/// does not enter the generation math; jitter is shaped by
/// `randomness_power` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParams {
    /// Number of particles (valid range: 100-1000000).
    pub count: u32,
    /// Rendered point size in world units (valid range: 0.01-0.1).
    pub size: f64,
    /// Maximum galaxy radius (valid range: 0.01-20).
    pub radius: f64,
    /// Number of spiral arms (valid range: 3-20).
    pub branches: u32,
    /// Angular twist in radians per unit radius (valid range: -5-5).
    pub spin: f64,
    /// Configured jitter scale (valid range: -2-2).
    pub randomness: f64,
    /// Exponent applied to each jitter draw (valid range: 1-10).
    pub randomness_power: f64,
    /// Color at the galactic center.
    pub inside_color: String,
    /// Color at `radius`.
    pub outside_color: String,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: "#ff6030".into(),
            outside_color: "#1b3984".into(),
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
    fn galaxy_params_defaults() {
        let params = GalaxyParams::default();
        assert_eq!(params.count, 100_000);
        assert!((params.size - 0.01).abs() < f64::EPSILON);
        assert!((params.radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(params.branches, 3);
        assert!((params.spin - 1.0).abs() < f64::EPSILON);
        assert!((params.randomness - 0.2).abs() < f64::EPSILON);
        assert!((params.randomness_power - 3.0).abs() < f64::EPSILON);
        assert_eq!(params.inside_color, "#ff6030");
        assert_eq!(params.outside_color, "#1b3984");
    }

    #[test]
    fn galaxy_params_partial_toml() {
        let toml_str = r##"
count = 2500
branches = 5
outside_color = "#00ff00"
"##;
        let params: GalaxyParams = toml::from_str(toml_str).unwrap();
        assert_eq!(params.count, 2500);
        assert_eq!(params.branches, 5);
        assert_eq!(params.outside_color, "#00ff00");
        // Defaults preserved
        assert!((params.radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(params.inside_color, "#ff6030");
    }
}
