//! Per-frame update: rotation, camera damping, and drawing.

use galaxy_core::GalaxyInstance;
use galaxy_renderer::{GalaxyPoints, OrbitCamera, RenderState, RendererError};

use super::core::GalaxyApp;

/// Everything one frame touches, borrowed from the app for the duration of a tick.
pub(super) struct FrameContext<'a> {
    pub render_state: Option<&'a mut RenderState>,
    pub camera: &'a mut OrbitCamera,
    pub galaxy: &'a mut GalaxyInstance<GalaxyPoints>,
    /// Seconds since the scene started.
    pub elapsed: f32,
    pub rotation_speed: f32,
}

/// Advance the scene to `ctx.elapsed` and draw it.
///
/// Rotation depends only on elapsed time, so it survives regeneration and
/// frame drops. Without a renderer only the scene state advances.
pub(super) fn tick(ctx: FrameContext<'_>) -> Result<(), RendererError> {
    ctx.galaxy.set_elapsed(ctx.elapsed, ctx.rotation_speed);
    ctx.camera.update();

    match ctx.render_state {
        Some(rs) => rs.render_frame(ctx.camera, ctx.galaxy.points(), ctx.galaxy.rotation_y()),
        None => Ok(()),
    }
}

impl GalaxyApp {
    /// Run one frame from the app's own state.
    pub(super) fn render_frame(&mut self) {
        self.frame_timer.begin_frame();

        let ctx = FrameContext {
            render_state: self.render_state.as_mut(),
            camera: &mut self.camera,
            galaxy: &mut self.galaxy,
            elapsed: self.started.elapsed().as_secs_f32(),
            rotation_speed: self.config.animation.rotation_speed as f32,
        };
        if let Err(e) = tick(ctx) {
            tracing::error!("Render error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_config::schema::CameraConfig;

    #[test]
    fn tick_without_renderer_advances_rotation() {
        let mut camera = OrbitCamera::from_config(&CameraConfig::default());
        let mut galaxy = GalaxyInstance::new();

        tick(FrameContext {
            render_state: None,
            camera: &mut camera,
            galaxy: &mut galaxy,
            elapsed: 10.0,
            rotation_speed: 0.02,
        })
        .unwrap();

        assert!((galaxy.rotation_y() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn rotation_follows_elapsed_not_frame_count() {
        let mut camera = OrbitCamera::default();
        let mut galaxy = GalaxyInstance::new();

        for elapsed in [1.0, 1.0, 1.0, 3.0] {
            tick(FrameContext {
                render_state: None,
                camera: &mut camera,
                galaxy: &mut galaxy,
                elapsed,
                rotation_speed: 0.5,
            })
            .unwrap();
        }

        assert!((galaxy.rotation_y() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn tick_applies_camera_damping() {
        let mut camera = OrbitCamera::from_config(&CameraConfig::default());
        camera.rotate(300.0, 0.0, 800.0);
        let before = camera.position();
        let mut galaxy = GalaxyInstance::new();

        tick(FrameContext {
            render_state: None,
            camera: &mut camera,
            galaxy: &mut galaxy,
            elapsed: 0.0,
            rotation_speed: 0.0,
        })
        .unwrap();

        assert_ne!(camera.position(), before);
    }

    #[test]
    fn app_frame_without_window_counts_frames() {
        let mut app = GalaxyApp::new(galaxy_config::GalaxyConfig::default());
        for _ in 0..3 {
            app.render_frame();
        }
        // The first frame only sets the timing baseline
        assert_eq!(app.frame_timer.sample_count(), 2);
    }
}
