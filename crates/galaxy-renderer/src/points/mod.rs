//! Point-cloud rendering.
//!
//! Each particle is drawn as a camera-facing quad instanced over two
//! per-particle buffers (position and color) uploaded straight from
//! [`GalaxyBuffers`](galaxy_core::GalaxyBuffers).

mod factory;
mod pipeline;
mod types;

pub use factory::{GalaxyPoints, GpuPointsFactory};
pub use pipeline::PointsPipeline;
pub use types::PointsUniforms;
pub(crate) use types::DEPTH_FORMAT;
