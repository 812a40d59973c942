//! Point material description handed to the renderer.

use galaxy_config::GalaxyParams;

/// How the point cloud is drawn.
///
/// Points use world-space `size` shrunk with distance, per-vertex colors,
/// and additive blending so overlapping particles brighten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    pub size: f32,
    pub size_attenuation: bool,
    pub additive_blending: bool,
    pub vertex_colors: bool,
    pub depth_write: bool,
}

impl PointsMaterial {
    pub fn from_params(params: &GalaxyParams) -> Self {
        Self {
            size: params.size as f32,
            size_attenuation: true,
            additive_blending: true,
            vertex_colors: true,
            depth_write: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_takes_size_from_params() {
        let params = GalaxyParams {
            size: 0.05,
            ..GalaxyParams::default()
        };
        let material = PointsMaterial::from_params(&params);
        assert!((material.size - 0.05).abs() < 1e-7);
        assert!(material.size_attenuation);
        assert!(material.additive_blending);
        assert!(material.vertex_colors);
        assert!(material.depth_write);
    }
}
