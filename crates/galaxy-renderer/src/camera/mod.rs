//! Scene camera: matrix helpers and the orbiting perspective camera.

pub mod matrix;
mod orbit;


pub use orbit::OrbitCamera;
