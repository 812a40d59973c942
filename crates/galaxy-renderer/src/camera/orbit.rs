use std::f32::consts::{PI, TAU};

use galaxy_config::schema::CameraConfig;

use super::matrix::{self, Mat4, Vec3};

/// Keeps the polar angle off the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-4;
const MIN_DISTANCE: f32 = 0.1;
/// Multiplier applied to the distance per wheel notch.
const ZOOM_STEP: f32 = 0.95;

/// Perspective camera orbiting the origin.
///
/// Drag input accumulates an angular delta that [`OrbitCamera::update`]
/// applies. With damping enabled only a fraction of the pending delta is
/// applied each update, so the motion eases out after the drag stops.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    damping: bool,
    damping_factor: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let [x, y, z] = config.position.map(|v| v as f32);
        let distance = (x * x + y * y + z * z).sqrt().max(MIN_DISTANCE);

        Self {
            target: [0.0; 3],
            distance,
            theta: x.atan2(z),
            phi: (y / distance).clamp(-1.0, 1.0).acos(),
            pending_theta: 0.0,
            pending_phi: 0.0,
            fov_y: (config.fov_degrees as f32).to_radians(),
            near: config.near as f32,
            far: config.far as f32,
            damping: config.damping,
            damping_factor: config.damping_factor as f32,
        }
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels.
    ///
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * dx / h;
        self.pending_phi -= TAU * dy / h;
    }

    /// Move toward (positive `notches`) or away from the target.
    pub fn zoom(&mut self, notches: f32) {
        let max = (self.far * 0.9).max(MIN_DISTANCE);
        self.distance = (self.distance * ZOOM_STEP.powf(notches)).clamp(MIN_DISTANCE, max);
    }

    /// Apply pending rotation. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        let (dt, dp) = if self.damping {
            (
                self.pending_theta * self.damping_factor,
                self.pending_phi * self.damping_factor,
            )
        } else {
            (self.pending_theta, self.pending_phi)
        };

        self.theta = (self.theta + dt).rem_euclid(TAU);
        self.phi = (self.phi + dp).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        if self.damping {
            self.pending_theta *= 1.0 - self.damping_factor;
            self.pending_phi *= 1.0 - self.damping_factor;
            if self.pending_theta.abs() < 1e-6 {
                self.pending_theta = 0.0;
            }
            if self.pending_phi.abs() < 1e-6 {
                self.pending_phi = 0.0;
            }
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }

        dt != 0.0 || dp != 0.0
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        [
            self.target[0] + self.distance * sin_phi * self.theta.sin(),
            self.target[1] + self.distance * self.phi.cos(),
            self.target[2] + self.distance * sin_phi * self.theta.cos(),
        ]
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.position(), self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        matrix::perspective(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        matrix::mul(&self.projection(aspect), &self.view())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
