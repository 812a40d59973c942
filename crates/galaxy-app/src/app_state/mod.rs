//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config reload, the tweak panel, the galaxy
//! instance, the camera, and the renderer.

mod core;
mod event_handler;
mod init;
mod input;
mod polling;
mod shutdown;
mod tick;
mod title;
mod types;

pub use core::GalaxyApp;
