//! wgpu rendering for the galaxy point cloud.

pub mod camera;
pub mod gpu;
pub mod perf;
pub mod points;
pub mod render_state;

pub use camera::OrbitCamera;
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::FrameTimer;
pub use points::{GalaxyPoints, GpuPointsFactory, PointsPipeline};
pub use render_state::RenderState;
