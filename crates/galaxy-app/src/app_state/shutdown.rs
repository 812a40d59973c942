//! Graceful shutdown: release the galaxy, stop live reload, drop the GPU.

use std::time::Duration;

use super::core::GalaxyApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl GalaxyApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Tear down the galaxy (its buffers belong to the device)
    /// 2. Drop the reload receiver
    /// 3. Shut down the tokio runtime (stops the config watcher)
    /// 4. Release GPU resources
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(rs) = self.render_state.as_ref() {
            let mut factory = rs.points_factory();
            self.galaxy.teardown(&mut factory);
        }

        self.config_rx = None;
        self.adjusting = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.render_state = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::GalaxyApp;
    use galaxy_config::GalaxyConfig;
    use tokio::sync::watch;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());

        app.shutdown();

        assert!(app.config_rx.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(app.render_state.is_none());
        assert!(!app.galaxy.is_attached());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());

        app.shutdown();
        app.shutdown();

        assert!(app.render_state.is_none());
    }

    #[test]
    fn shutdown_stops_attached_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (_tx, rx) = watch::channel(GalaxyConfig::default());
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.attach_reload(runtime, rx);

        app.shutdown();

        assert!(app.tokio_runtime.is_none());
        assert!(app.config_rx.is_none());
    }
}
