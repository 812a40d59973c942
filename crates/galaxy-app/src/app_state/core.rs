//! GalaxyApp struct definition, constructor, and regeneration plumbing.

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Runtime;
use tokio::sync::watch;
use winit::window::Window;

use galaxy_config::{ControlEvent, ControlId, GalaxyConfig, GalaxyParams, TweakPanel};
use galaxy_core::GalaxyInstance;
use galaxy_renderer::{FrameTimer, GalaxyPoints, OrbitCamera, RenderState};

/// Top-level application state.
pub struct GalaxyApp {
    pub(super) config: GalaxyConfig,
    pub(super) panel: TweakPanel,
    pub(super) galaxy: GalaxyInstance<GalaxyPoints>,
    pub(super) camera: OrbitCamera,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Tweak panel input
    pub(super) selected: ControlId,
    /// Slider currently held with Left/Right, committed on key release.
    pub(super) adjusting: Option<ControlId>,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Orbit drag
    pub(super) dragging: bool,
    pub(super) cursor: Option<(f64, f64)>,

    // Live reload
    pub(super) config_rx: Option<watch::Receiver<GalaxyConfig>>,
    pub(super) tokio_runtime: Option<Runtime>,

    // Timing
    pub(super) started: Instant,
    pub(super) frame_timer: FrameTimer,
    pub(super) last_poll: Instant,
    pub(super) last_title: Option<Instant>,

    pub(super) should_exit: bool,
}

impl GalaxyApp {
    pub fn new(config: GalaxyConfig) -> Self {
        let panel = TweakPanel::new(config.galaxy.clone());
        let camera = OrbitCamera::from_config(&config.camera);
        Self {
            config,
            panel,
            galaxy: GalaxyInstance::new(),
            camera,
            window: None,
            render_state: None,
            selected: ControlId::Count,
            adjusting: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            dragging: false,
            cursor: None,
            config_rx: None,
            tokio_runtime: None,
            started: Instant::now(),
            frame_timer: FrameTimer::new(),
            last_poll: Instant::now(),
            last_title: None,
            should_exit: false,
        }
    }

    /// Hand over the runtime running the config watcher and its receiver.
    pub fn attach_reload(&mut self, runtime: Runtime, config_rx: watch::Receiver<GalaxyConfig>) {
        self.tokio_runtime = Some(runtime);
        self.config_rx = Some(config_rx);
    }

    /// Act on a tweak panel outcome.
    pub(super) fn apply_control_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Regenerate(params) => self.regenerate(&params),
            ControlEvent::Pending | ControlEvent::Unchanged => {}
        }
        self.last_title = None;
    }

    /// Rebuild the galaxy from `params`.
    ///
    /// Without a renderer there is nothing to build into; the panel keeps the
    /// parameters and the first regeneration happens once the window exists.
    pub(super) fn regenerate(&mut self, params: &GalaxyParams) {
        let Some(render_state) = self.render_state.as_ref() else {
            tracing::debug!("no renderer yet, deferring regeneration");
            return;
        };

        let started = Instant::now();
        let mut factory = render_state.points_factory();
        match self.galaxy.regenerate(params, &mut factory) {
            Ok(()) => tracing::info!(
                "Galaxy regenerated: {} particles, {} arms in {:.1}ms",
                params.count,
                params.branches,
                started.elapsed().as_secs_f64() * 1000.0
            ),
            Err(e) => tracing::warn!("Regeneration rejected, keeping current galaxy: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_first_control() {
        let app = GalaxyApp::new(GalaxyConfig::default());
        assert_eq!(app.selected, ControlId::Count);
        assert_eq!(app.panel.params(), &GalaxyParams::default());
        assert!(!app.galaxy.is_attached());
        assert!(app.window.is_none());
    }

    #[test]
    fn regeneration_without_renderer_is_deferred() {
        let mut app = GalaxyApp::new(GalaxyConfig::default());
        app.regenerate(&GalaxyParams::default());
        assert!(!app.galaxy.is_attached());
        assert_eq!(app.galaxy.generation(), 0);
    }
}
