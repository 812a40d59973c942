//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use galaxy_renderer::RenderState;

use super::core::GalaxyApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl GalaxyApp {
    /// Create the window, initialize the GPU renderer and build the first galaxy.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let max_pixel_ratio = window_config.max_pixel_ratio;
        match pollster::block_on(RenderState::new(window.clone(), max_pixel_ratio)) {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");

        let params = self.panel.snapshot();
        self.regenerate(&params);
        self.started = std::time::Instant::now();
        true
    }
}
