//! File watcher for live config reload.
//!
//! Watches the parent directory of the config file so editors that save
//! atomically (write temp file, rename over) are still observed.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigWatcher, DEBOUNCE};
