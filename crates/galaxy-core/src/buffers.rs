//! Generated particle buffers.

/// Index-aligned per-particle positions and linear RGB colors.
///
/// Both vectors always have the same length; particle order is the
/// generation order and is consumed as-is by the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalaxyBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl GalaxyBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
        }
    }

    pub fn push(&mut self, position: [f32; 3], color: [f32; 3]) {
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as raw bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as raw bytes for GPU upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_buffers_aligned() {
        let mut buffers = GalaxyBuffers::with_capacity(2);
        assert!(buffers.is_empty());
        buffers.push([1.0, 2.0, 3.0], [0.5, 0.5, 0.5]);
        buffers.push([-1.0, 0.0, 1.0], [1.0, 0.0, 0.0]);
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers.colors.len(), 2);
        assert_eq!(buffers.positions[1], [-1.0, 0.0, 1.0]);
    }

    #[test]
    fn byte_views_are_tightly_packed() {
        let mut buffers = GalaxyBuffers::default();
        buffers.push([1.0, 2.0, 3.0], [0.0, 0.5, 1.0]);
        assert_eq!(buffers.position_bytes().len(), 12);
        assert_eq!(buffers.color_bytes().len(), 12);
        assert_eq!(&buffers.position_bytes()[0..4], &1.0f32.to_ne_bytes());
    }
}
