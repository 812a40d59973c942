//! Camera and orbit-control configuration.

use serde::{Deserialize, Serialize};

/// Perspective camera and orbit controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-150).
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Initial eye position; the camera always looks at the origin.
    pub position: [f64; 3],
    /// Smooth orbit motion after the pointer is released.
    pub damping: bool,
    /// Fraction of remaining motion applied per frame (valid range: 0.01-1.0).
    pub damping_factor: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            position: [3.0, 3.0, 3.0],
            damping: true,
            damping_factor: 0.05,
        }
    }
}
