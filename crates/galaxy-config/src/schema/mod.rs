//! Configuration schema types for the galaxy viewer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields take the stock galaxy defaults.

mod animation;
mod camera;
mod galaxy;
mod system;
mod window;

pub use animation::*;
pub use camera::*;
pub use galaxy::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GalaxyConfig {
    pub galaxy: GalaxyParams,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
