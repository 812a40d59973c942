//! Config reload polling and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use galaxy_config::GalaxyConfig;
use galaxy_renderer::OrbitCamera;

use super::core::GalaxyApp;
use super::types::POLL_INTERVAL;

impl GalaxyApp {
    /// Run polling and schedule the next frame.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_config_reload();
        }

        // The galaxy rotates continuously; presentation paces the loop.
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    /// Pick up a config published by the reload manager, if any.
    pub(super) fn poll_config_reload(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        match rx.has_changed() {
            Ok(true) => {
                let config = rx.borrow_and_update().clone();
                self.apply_config(config);
            }
            Ok(false) => {}
            Err(_) => {
                tracing::warn!("Config reload channel closed, live reload disabled");
                self.config_rx = None;
            }
        }
    }

    /// Apply a reloaded config section by section.
    ///
    /// Galaxy parameters replace the panel snapshot and regenerate when they
    /// differ. The camera is only rebuilt when its own section changed so a
    /// reload does not undo the user's orbit.
    pub(super) fn apply_config(&mut self, config: GalaxyConfig) {
        tracing::info!("Applying reloaded config");

        if config.camera != self.config.camera {
            self.camera = OrbitCamera::from_config(&config.camera);
        }

        if config.window.max_pixel_ratio != self.config.window.max_pixel_ratio {
            if let Some(ref mut rs) = self.render_state {
                rs.set_max_pixel_ratio(config.window.max_pixel_ratio);
            }
        }

        if config.logging != self.config.logging {
            tracing::info!("Log level changes take effect on restart");
        }

        let event = self.panel.replace(config.galaxy.clone());
        self.adjusting = None;
        self.config = config;
        self.apply_control_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::watch;

    #[test]
    fn reload_replaces_panel_params() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        let mut config = GalaxyConfig::default();
        config.galaxy.branches = 7;
        config.animation.rotation_speed = 0.5;

        app.apply_config(config);

        assert_eq!(app.panel.params().branches, 7);
        assert!((app.config.animation.rotation_speed - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn reload_drops_held_slider() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.adjusting = Some(galaxy_config::ControlId::Spin);
        app.apply_config(GalaxyConfig::default());
        assert!(app.adjusting.is_none());
    }

    #[test]
    fn camera_kept_when_section_unchanged() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.camera.zoom(3.0);
        let zoomed = app.camera.distance();

        app.apply_config(GalaxyConfig::default());
        assert!((app.camera.distance() - zoomed).abs() < f32::EPSILON);

        let mut config = GalaxyConfig::default();
        config.camera.position = [0.0, 0.0, 10.0];
        app.apply_config(config);
        assert!((app.camera.distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn poll_picks_up_published_config() {
        let (tx, rx) = watch::channel(GalaxyConfig::default());
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.config_rx = Some(rx);

        app.poll_config_reload();
        assert_eq!(app.panel.params().count, 100_000);

        let mut config = GalaxyConfig::default();
        config.galaxy.count = 2_000;
        tx.send(config).unwrap();

        app.poll_config_reload();
        assert_eq!(app.panel.params().count, 2_000);
    }

    #[test]
    fn closed_channel_disables_reload() {
        let (tx, rx) = watch::channel(GalaxyConfig::default());
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.config_rx = Some(rx);
        drop(tx);

        app.poll_config_reload();
        assert!(app.config_rx.is_none());
    }
}
