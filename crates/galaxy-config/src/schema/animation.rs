//! Animation configuration.

use serde::{Deserialize, Serialize};

/// Per-frame animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Galaxy rotation around Y, in radians per elapsed second.
    pub rotation_speed: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.02,
        }
    }
}
