use galaxy_core::PointsMaterial;

use crate::camera::matrix::{self, Mat4};
use crate::gpu::PhysicalSize;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-frame uniforms matching the WGSL `Uniforms` struct in `points.wgsl`.
///
/// Layout: 40 × f32 = 160 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniforms {
    pub view_proj: Mat4,
    /// Galaxy model transform (Y rotation).
    pub model: Mat4,
    /// Render target size in pixels.
    pub viewport: [f32; 2],
    /// Point size: world units when attenuated, pixels otherwise.
    pub size: f32,
    /// 1.0 enables perspective size attenuation.
    pub attenuate: f32,
    /// 1.0 draws per-particle colors, 0.0 draws white.
    pub vertex_colors: f32,
    pub _pad: [f32; 3],
}

impl PointsUniforms {
    pub fn new(
        view_proj: Mat4,
        rotation_y: f32,
        viewport: PhysicalSize,
        material: &PointsMaterial,
    ) -> Self {
        Self {
            view_proj,
            model: matrix::rotate_y(rotation_y),
            viewport: [viewport.width as f32, viewport.height as f32],
            size: material.size,
            attenuate: flag(material.size_attenuation),
            vertex_colors: flag(material.vertex_colors),
            _pad: [0.0; 3],
        }
    }
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Corner of the unit point quad, centered on the particle.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Corner {
    pub offset: [f32; 2],
}

pub(crate) const CORNERS: &[Corner] = &[
    Corner {
        offset: [-0.5, -0.5],
    },
    Corner {
        offset: [0.5, -0.5],
    },
    Corner {
        offset: [0.5, 0.5],
    },
    Corner {
        offset: [-0.5, 0.5],
    },
];

pub(crate) const CORNER_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Vertex buffer layouts: corner (per vertex), position and color (per instance).
pub(crate) const BUFFER_LAYOUTS: [wgpu::VertexBufferLayout<'static>; 3] = [
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Corner>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        }],
    },
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 1,
        }],
    },
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 2,
        }],
    },
];

/// Pipeline slot for a material: one per depth-write and blending combination.
pub(crate) fn variant_index(material: &PointsMaterial) -> usize {
    ((material.depth_write as usize) << 1) | material.additive_blending as usize
}

pub(crate) const VARIANT_COUNT: usize = 4;

/// Blend state for a material's blending flag.
pub(crate) fn blend_for(additive: bool) -> wgpu::BlendState {
    if additive {
        ADDITIVE
    } else {
        wgpu::BlendState::ALPHA_BLENDING
    }
}

/// Additive blending: overlapping particles brighten.
pub(crate) const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_160_bytes() {
        assert_eq!(std::mem::size_of::<PointsUniforms>(), 160);
        assert_eq!(std::mem::size_of::<PointsUniforms>() % 16, 0);
    }

    #[test]
    fn uniforms_carry_material_size_and_attenuation() {
        let material = PointsMaterial {
            size: 0.02,
            size_attenuation: false,
            additive_blending: true,
            vertex_colors: true,
            depth_write: true,
        };
        let u = PointsUniforms::new(matrix::IDENTITY, 0.0, PhysicalSize::new(640, 480), &material);
        assert_eq!(u.size, 0.02);
        assert_eq!(u.attenuate, 0.0);
        assert_eq!(u.viewport, [640.0, 480.0]);
        assert_eq!(u.model, matrix::IDENTITY);
        assert_eq!(u.vertex_colors, 1.0);
    }

    #[test]
    fn disabling_vertex_colors_clears_the_flag() {
        let material = PointsMaterial {
            vertex_colors: false,
            ..galaxy_material()
        };
        let u = PointsUniforms::new(matrix::IDENTITY, 0.0, PhysicalSize::new(1, 1), &material);
        assert_eq!(u.vertex_colors, 0.0);
        assert_eq!(u.attenuate, 1.0);
    }

    #[test]
    fn every_flag_combination_has_its_own_variant() {
        let mut seen = [false; VARIANT_COUNT];
        for depth_write in [false, true] {
            for additive_blending in [false, true] {
                let material = PointsMaterial {
                    depth_write,
                    additive_blending,
                    ..galaxy_material()
                };
                let index = variant_index(&material);
                assert!(index < VARIANT_COUNT);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn blending_flag_selects_blend_state() {
        assert_eq!(blend_for(true), ADDITIVE);
        assert_eq!(blend_for(false), wgpu::BlendState::ALPHA_BLENDING);
        assert_eq!(ADDITIVE.color.dst_factor, wgpu::BlendFactor::One);
    }

    fn galaxy_material() -> PointsMaterial {
        PointsMaterial {
            size: 0.01,
            size_attenuation: true,
            additive_blending: true,
            vertex_colors: true,
            depth_write: true,
        }
    }

    #[test]
    fn corners_are_centered() {
        let sum = CORNERS
            .iter()
            .fold([0.0f32; 2], |acc, c| [acc[0] + c.offset[0], acc[1] + c.offset[1]]);
        assert_eq!(sum, [0.0, 0.0]);
        assert_eq!(CORNER_INDICES.len(), 6);
    }

    #[test]
    fn instance_strides_match_buffers() {
        assert_eq!(BUFFER_LAYOUTS[1].array_stride, 12);
        assert_eq!(BUFFER_LAYOUTS[2].array_stride, 12);
        assert_eq!(BUFFER_LAYOUTS[1].step_mode, wgpu::VertexStepMode::Instance);
    }
}
