//! Frame-driven rotation.

/// Y-axis rotation in radians after `elapsed_secs` of wall time.
///
/// Rotation is a function of total elapsed time rather than an accumulated
/// per-frame delta, so any frame can be reproduced from its timestamp.
pub fn rotation_for_elapsed(elapsed_secs: f32, speed: f32) -> f32 {
    elapsed_secs * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_linear_in_elapsed() {
        assert_eq!(rotation_for_elapsed(0.0, 0.02), 0.0);
        assert!((rotation_for_elapsed(10.0, 0.02) - 0.2).abs() < 1e-6);
        assert!((rotation_for_elapsed(100.0, 0.02) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn negative_speed_rotates_backwards() {
        assert!(rotation_for_elapsed(5.0, -0.1) < 0.0);
    }
}
