//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll the config reload channel (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Minimum spacing between window title refreshes.
pub(super) const TITLE_INTERVAL: Duration = Duration::from_millis(250);

/// Wheel pixels treated as one zoom notch for touchpads.
pub(super) const PIXELS_PER_NOTCH: f64 = 50.0;

/// Slider steps per key press while Shift is held.
pub(super) const COARSE_STEPS: i32 = 10;
