use crate::camera::OrbitCamera;
use crate::gpu::RendererError;
use crate::points::{GalaxyPoints, PointsUniforms};

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render one frame: clear, draw the galaxy rotated by `rotation_y`,
    /// then upscale onto the surface.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        galaxy: Option<&GalaxyPoints>,
        rotation_y: f32,
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("galaxy frame encoder"),
            });

        if let Some(points) = galaxy {
            let uniforms = PointsUniforms::new(
                camera.view_projection(self.aspect()),
                rotation_y,
                self.target.size,
                points.material(),
            );
            self.points.prepare(&self.gpu.queue, &uniforms);
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("galaxy scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.target.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(points) = galaxy {
                self.points.render(&mut pass, points);
            }
        }

        self.blit.draw(&mut encoder, &view, &self.target);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size, self.target.size, self.gpu.format());

        Ok(())
    }
}
