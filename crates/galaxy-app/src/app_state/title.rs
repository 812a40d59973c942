//! Window title management: selected control, its value, and FPS.

use std::time::Instant;

use super::core::GalaxyApp;
use super::types::TITLE_INTERVAL;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Compose the title.
///
/// Format: "{base} | {label}: {value}[*] | {fps} fps", where `*` marks a
/// slider change that has not been committed yet.
pub(super) fn title_text(
    base: &str,
    label: &str,
    value: &str,
    uncommitted: bool,
    fps: Option<f64>,
) -> String {
    let marker = if uncommitted { "*" } else { "" };
    let mut title = format!("{base} | {label}: {value}{marker}");
    if let Some(fps) = fps {
        title.push_str(&format!(" | {fps:.0} fps"));
    }
    title
}

impl GalaxyApp {
    /// Refresh the window title, at most once per [`TITLE_INTERVAL`] unless
    /// the panel changed since the last refresh.
    pub(super) fn update_window_title(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };

        let now = Instant::now();
        if let Some(last) = self.last_title {
            if now.duration_since(last) < TITLE_INTERVAL {
                return;
            }
        }
        self.last_title = Some(now);

        let id = self.selected;
        let fps = self
            .config
            .window
            .show_fps
            .then(|| self.frame_timer.fps());
        window.set_title(&title_text(
            &self.config.window.title,
            id.spec().label,
            &self.panel.value_label(id),
            self.panel.is_uncommitted(id),
            fps,
        ));
    }
}

// =============================================================================
// TESTS
// =============================================================================
