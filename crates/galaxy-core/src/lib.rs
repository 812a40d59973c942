//! Galaxy point-cloud generation and the regeneration lifecycle.
//!
//! [`generate`] turns a [`GalaxyParams`] snapshot into index-aligned
//! position and color buffers. [`GalaxyInstance`] owns the live buffers and
//! the renderable built from them, and swaps both out on regeneration.
//!
//! [`GalaxyParams`]: galaxy_config::GalaxyParams

pub mod animation;
pub mod buffers;
pub mod generator;
pub mod instance;
pub mod material;
pub mod random;

pub use animation::rotation_for_elapsed;
pub use buffers::GalaxyBuffers;
pub use generator::{branch_angle, branch_of, check_preconditions, generate, generate_with};
pub use instance::{GalaxyInstance, PointCloudFactory};
pub use material::PointsMaterial;
pub use random::{thread_source, RandomSource, RngSource};
