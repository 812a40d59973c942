//! Live config reload manager.
//!
//! Combines the file watcher with config loading so edits to the config
//! file are published to the running app.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
