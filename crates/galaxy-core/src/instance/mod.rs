//! The live galaxy and its regeneration lifecycle.
//!
//! A [`GalaxyInstance`] holds at most one installed point cloud. Regeneration
//! builds the replacement completely, swaps it into the slot, and only then
//! hands the previous renderable back to the factory for disposal. A failed
//! regeneration leaves the previous point cloud installed.


use crate::animation::rotation_for_elapsed;
use crate::buffers::GalaxyBuffers;
use crate::generator;
use crate::material::PointsMaterial;
use crate::random::{thread_source, RandomSource};
use galaxy_common::ConfigError;
use galaxy_config::GalaxyParams;
use tracing::{debug, info};

/// Builds and releases the renderable form of a point cloud.
///
/// Implemented by the GPU renderer; tests use a counting fake.
pub trait PointCloudFactory {
    type Points;

    fn build(&mut self, buffers: &GalaxyBuffers, material: &PointsMaterial) -> Self::Points;

    /// Release everything `points` holds. Assumed infallible.
    fn dispose(&mut self, points: Self::Points);
}

struct Installed<P> {
    buffers: GalaxyBuffers,
    material: PointsMaterial,
    points: P,
}

/// Owns the currently installed buffers and renderable.
pub struct GalaxyInstance<P> {
    slot: Option<Installed<P>>,
    generation: u64,
    rotation_y: f32,
}

impl<P> Default for GalaxyInstance<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> GalaxyInstance<P> {
    /// An instance with nothing installed yet.
    pub fn new() -> Self {
        Self {
            slot: None,
            generation: 0,
            rotation_y: 0.0,
        }
    }

    /// Regenerate from `params` using the thread-local RNG.
    pub fn regenerate<F>(&mut self, params: &GalaxyParams, factory: &mut F) -> Result<(), ConfigError>
    where
        F: PointCloudFactory<Points = P>,
    {
        self.regenerate_with(params, factory, &mut thread_source())
    }

    /// Regenerate from `params`, drawing from `source`.
    ///
    /// Safe to call repeatedly, including before anything is installed.
    /// On error nothing is built and the current point cloud stays.
    pub fn regenerate_with<F, R>(
        &mut self,
        params: &GalaxyParams,
        factory: &mut F,
        source: &mut R,
    ) -> Result<(), ConfigError>
    where
        F: PointCloudFactory<Points = P>,
        R: RandomSource + ?Sized,
    {
        let buffers = generator::generate_with(params, source)?;
        let material = PointsMaterial::from_params(params);
        let points = factory.build(&buffers, &material);

        let previous = self.slot.replace(Installed {
            buffers,
            material,
            points,
        });
        if let Some(old) = previous {
            factory.dispose(old.points);
        }

        self.generation += 1;
        debug!(
            "galaxy generation {} installed ({} particles)",
            self.generation, params.count
        );
        Ok(())
    }

    pub fn points(&self) -> Option<&P> {
        self.slot.as_ref().map(|s| &s.points)
    }

    pub fn buffers(&self) -> Option<&GalaxyBuffers> {
        self.slot.as_ref().map(|s| &s.buffers)
    }

    pub fn material(&self) -> Option<&PointsMaterial> {
        self.slot.as_ref().map(|s| &s.material)
    }

    pub fn is_attached(&self) -> bool {
        self.slot.is_some()
    }

    /// Number of successful regenerations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Set the rotation from total elapsed time.
    pub fn set_elapsed(&mut self, elapsed_secs: f32, speed: f32) {
        self.rotation_y = rotation_for_elapsed(elapsed_secs, speed);
    }

    /// Dispose the installed point cloud, if any. Idempotent.
    pub fn teardown<F>(&mut self, factory: &mut F)
    where
        F: PointCloudFactory<Points = P>,
    {
        if let Some(old) = self.slot.take() {
            factory.dispose(old.points);
            info!("galaxy torn down after {} generations", self.generation);
        }
    }
}
