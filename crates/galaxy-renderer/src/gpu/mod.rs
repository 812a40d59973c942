mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_common::GalaxyError;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_converts_to_galaxy_error() {
        let err: GalaxyError = RendererError::DeviceError("lost".into()).into();
        assert!(matches!(err, GalaxyError::Renderer(_)));
        assert_eq!(err.to_string(), "renderer error: device error: lost");
    }

    #[test]
    fn preferred_format_picks_srgb() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            context::preferred_format(&formats),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn preferred_format_falls_back_to_first() {
        let formats = [wgpu::TextureFormat::Rgba16Float];
        assert_eq!(
            context::preferred_format(&formats),
            wgpu::TextureFormat::Rgba16Float
        );
        assert_eq!(
            context::preferred_format(&[]),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize::new(1600, 800);
        assert!((size.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn physical_size_never_zero() {
        let size = PhysicalSize::new(0, 0);
        assert_eq!(size, PhysicalSize::new(1, 1));
        assert!((size.aspect() - 1.0).abs() < 1e-6);
    }
}
