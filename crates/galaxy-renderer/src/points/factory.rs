use galaxy_core::{GalaxyBuffers, PointCloudFactory, PointsMaterial};
use wgpu::util::DeviceExt;

/// GPU-resident point cloud: one renderable galaxy.
pub struct GalaxyPoints {
    pub(crate) position_buffer: wgpu::Buffer,
    pub(crate) color_buffer: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) material: PointsMaterial,
}

impl GalaxyPoints {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn material(&self) -> &PointsMaterial {
        &self.material
    }
}

/// Uploads generated buffers to the GPU and frees them on dispose.
pub struct GpuPointsFactory<'a> {
    device: &'a wgpu::Device,
}

impl<'a> GpuPointsFactory<'a> {
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }
}

impl PointCloudFactory for GpuPointsFactory<'_> {
    type Points = GalaxyPoints;

    fn build(&mut self, buffers: &GalaxyBuffers, material: &PointsMaterial) -> GalaxyPoints {
        let position_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy positions"),
            contents: buffers.position_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let color_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy colors"),
            contents: buffers.color_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        tracing::debug!(
            "uploaded {} points ({} bytes)",
            buffers.len(),
            buffers.position_bytes().len() + buffers.color_bytes().len()
        );

        GalaxyPoints {
            position_buffer,
            color_buffer,
            count: buffers.len() as u32,
            material: *material,
        }
    }

    fn dispose(&mut self, points: GalaxyPoints) {
        points.position_buffer.destroy();
        points.color_buffer.destroy();
    }
}
