//! [`ReloadManager`]: load, watch, and republish configuration.

use crate::schema::GalaxyConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use galaxy_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Publishes each successfully reloaded config on a [`tokio::sync::watch`]
/// channel. Reloads that fail to parse or validate are logged and dropped,
/// leaving the last good config in place.
pub struct ReloadManager {
    pub(super) config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Must be called from within a tokio runtime. A missing or unreadable
    /// file yields the defaults; the watcher keeps running so a file created
    /// later is still picked up.
    pub async fn start(config_path: PathBuf) -> (GalaxyConfig, watch::Receiver<GalaxyConfig>) {
        let initial_config = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                GalaxyConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<GalaxyConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("config reload rejected: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Reload from disk. Unlike the initial load, invalid values are refused.
    pub(crate) fn reload_config(&self) -> Result<GalaxyConfig, ConfigError> {
        let config = toml_loader::read_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
