use std::sync::Arc;
use winit::window::Window;

use crate::gpu::{GpuContext, RendererError};
use crate::points::{GpuPointsFactory, PointsPipeline};

use super::helpers::render_size;
use super::target::{Blit, SceneTarget};

/// GPU context plus everything needed to draw a galaxy frame.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) points: PointsPipeline,
    pub(super) blit: Blit,
    pub(super) target: SceneTarget,
    pub(super) clear_color: wgpu::Color,
    max_pixel_ratio: f64,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, max_pixel_ratio: f64) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let points = PointsPipeline::new(&gpu.device, gpu.format());
        let blit = Blit::new(&gpu.device, gpu.format());
        let size = render_size(gpu.size, gpu.scale_factor, max_pixel_ratio);
        let target = blit.create_target(&gpu.device, gpu.format(), size);

        tracing::info!(
            "Scene target {}x{} (scale factor {:.2}, max pixel ratio {:.2})",
            size.width,
            size.height,
            gpu.scale_factor,
            max_pixel_ratio
        );

        Ok(Self {
            gpu,
            points,
            blit,
            target,
            clear_color: wgpu::Color::BLACK,
            max_pixel_ratio,
        })
    }

    /// Handle a window resize or DPI change.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.gpu.resize(width, height, scale_factor);
        self.rebuild_target();
    }

    pub fn set_max_pixel_ratio(&mut self, max_pixel_ratio: f64) {
        if (max_pixel_ratio - self.max_pixel_ratio).abs() > f64::EPSILON {
            self.max_pixel_ratio = max_pixel_ratio;
            self.rebuild_target();
        }
    }

    fn rebuild_target(&mut self) {
        let size = render_size(self.gpu.size, self.gpu.scale_factor, self.max_pixel_ratio);
        if size != self.target.size {
            self.target = self
                .blit
                .create_target(&self.gpu.device, self.gpu.format(), size);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.gpu.size.aspect()
    }

    /// Factory that uploads point clouds to this state's device.
    pub fn points_factory(&self) -> GpuPointsFactory<'_> {
        GpuPointsFactory::new(&self.gpu.device)
    }
}
