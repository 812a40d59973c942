//! Spiral galaxy point generation.
//!
//! Each particle draws a radial fraction, sits on arm `i mod branches` with
//! the arm angle twisted by `spin * r`, and is pushed off the arm by an
//! independent jitter per axis. Its color is the linear blend of the inside
//! and outside colors by `r / radius`.


use crate::buffers::GalaxyBuffers;
use crate::random::{thread_source, RandomSource};
use galaxy_config::colors::parse_linear_rgb;
use galaxy_config::GalaxyParams;
use galaxy_common::ConfigError;
use std::f32::consts::TAU;
use std::time::Instant;
use tracing::debug;

/// Parameters resolved into the numeric form the generation loop needs.
struct Resolved {
    count: usize,
    radius: f32,
    branches: u32,
    spin: f32,
    power: f32,
    inside: [f32; 3],
    outside: [f32; 3],
}

fn resolve(params: &GalaxyParams) -> Result<Resolved, ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if params.branches == 0 {
        errors.push("galaxy.branches must be at least 1".into());
    }
    if !params.radius.is_finite() || params.radius <= 0.0 {
        errors.push(format!(
            "galaxy.radius must be a positive finite number, got {}",
            params.radius
        ));
    }
    if !params.spin.is_finite() {
        errors.push(format!("galaxy.spin must be finite, got {}", params.spin));
    }
    if !params.randomness_power.is_finite() {
        errors.push(format!(
            "galaxy.randomness_power must be finite, got {}",
            params.randomness_power
        ));
    }
    let mut color = |key: &str, value: &str| match parse_linear_rgb(value) {
        Ok(rgb) => Some(rgb),
        Err(e) => {
            errors.push(format!("{key}: {e}"));
            None
        }
    };
    let inside = color("galaxy.inside_color", &params.inside_color);
    let outside = color("galaxy.outside_color", &params.outside_color);

    match (inside, outside) {
        (Some(inside), Some(outside)) if errors.is_empty() => Ok(Resolved {
            count: params.count as usize,
            radius: params.radius as f32,
            branches: params.branches,
            spin: params.spin as f32,
            power: params.randomness_power as f32,
            inside,
            outside,
        }),
        _ => Err(ConfigError::ValidationError(errors.join("; "))),
    }
}

/// Reject parameters that would make generation divide by zero or emit
/// non-finite geometry.
///
/// This is narrower than the control bounds: a `branches` of 1 or a radius
/// above the slider maximum still generates fine.
pub fn check_preconditions(params: &GalaxyParams) -> Result<(), ConfigError> {
    resolve(params).map(|_| ())
}

/// Arm index for particle `i`.
///
/// # Panics
///
/// Panics if `branches` is zero.
pub fn branch_of(i: usize, branches: u32) -> u32 {
    (i % branches as usize) as u32
}

/// Base angle in radians of the arm particle `i` sits on.
pub fn branch_angle(i: usize, branches: u32) -> f32 {
    branch_of(i, branches) as f32 / branches as f32 * TAU
}

/// Generate a galaxy using the thread-local RNG.
pub fn generate(params: &GalaxyParams) -> Result<GalaxyBuffers, ConfigError> {
    generate_with(params, &mut thread_source())
}

/// Generate a galaxy drawing from `source`.
///
/// Per particle the draws are consumed in a fixed order: the radial
/// fraction, then for each of x, y and z a jitter magnitude followed by its
/// sign. `params.randomness` is not applied to the jitter.
pub fn generate_with<R: RandomSource + ?Sized>(
    params: &GalaxyParams,
    source: &mut R,
) -> Result<GalaxyBuffers, ConfigError> {
    let p = resolve(params)?;
    let started = Instant::now();

    let mut buffers = GalaxyBuffers::with_capacity(p.count);
    for i in 0..p.count {
        let t = source.next_unit();
        let r = t * p.radius;

        let spin_angle = r * p.spin;
        let arm = branch_angle(i, p.branches);

        let jx = jitter(source, p.power);
        let jy = jitter(source, p.power);
        let jz = jitter(source, p.power);

        let position = [
            (arm + spin_angle).sin() * r + jx,
            jy,
            (arm + spin_angle).cos() * r + jz,
        ];

        let mix = r / p.radius;
        let color = [
            lerp(p.inside[0], p.outside[0], mix),
            lerp(p.inside[1], p.outside[1], mix),
            lerp(p.inside[2], p.outside[2], mix),
        ];

        buffers.push(position, color);
    }

    debug!(
        "generated {} particles on {} arms in {:.2}ms",
        p.count,
        p.branches,
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(buffers)
}

fn jitter<R: RandomSource + ?Sized>(source: &mut R, power: f32) -> f32 {
    let magnitude = source.next_unit().powf(power);
    let sign = if source.next_unit() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (a + (b - a) * t).clamp(0.0, 1.0)
}
