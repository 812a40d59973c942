//! Camera, animation, and window validation.

use crate::schema::GalaxyConfig;

use super::helpers::check_range;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &GalaxyConfig) {
    let camera = &config.camera;
    check_range(errors, "camera.fov_degrees", camera.fov_degrees, 10.0, 150.0);
    check_range(
        errors,
        "camera.damping_factor",
        camera.damping_factor,
        0.01,
        1.0,
    );

    if !(camera.near.is_finite() && camera.near > 0.0) {
        errors.push(format!("camera.near = {} must be positive", camera.near));
    }
    if !(camera.far.is_finite() && camera.far > camera.near) {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }

    let [x, y, z] = camera.position;
    if ![x, y, z].iter().all(|v| v.is_finite()) {
        errors.push("camera.position must be finite".to_string());
    } else if x == 0.0 && y == 0.0 && z == 0.0 {
        errors.push("camera.position must not be the origin".to_string());
    }
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &GalaxyConfig) {
    check_range(
        errors,
        "animation.rotation_speed",
        config.animation.rotation_speed,
        -10.0,
        10.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GalaxyConfig) {
    let window = &config.window;
    if window.width == 0 || window.height == 0 {
        errors.push(format!(
            "window size {}x{} must be non-zero",
            window.width, window.height
        ));
    }
    check_range(
        errors,
        "window.max_pixel_ratio",
        window.max_pixel_ratio,
        1.0,
        4.0,
    );
}
