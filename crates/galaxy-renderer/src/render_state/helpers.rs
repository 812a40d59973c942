use crate::gpu::PhysicalSize;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(surface: PhysicalSize, render: PhysicalSize, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented (surface {}x{}, scene {}x{}, format={:?})",
            surface.width,
            surface.height,
            render.width,
            render.height,
            format,
        );
    }
}

/// Scene resolution for a surface of `physical` pixels.
///
/// When the display's `scale_factor` exceeds `max_pixel_ratio`, the scene is
/// rendered at `max_pixel_ratio` pixels per logical pixel and upscaled.
pub fn render_size(physical: PhysicalSize, scale_factor: f64, max_pixel_ratio: f64) -> PhysicalSize {
    if max_pixel_ratio <= 0.0 || scale_factor.is_nan() || scale_factor <= max_pixel_ratio {
        return physical;
    }
    let ratio = max_pixel_ratio / scale_factor;
    PhysicalSize::new(
        (physical.width as f64 * ratio).round() as u32,
        (physical.height as f64 * ratio).round() as u32,
    )
}
