//! Where the config file lives and how a fresh one is written.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use galaxy_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "galaxy";
const FILE_NAME: &str = "galaxy.toml";

/// Config file location inside a platform config directory.
pub(crate) fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join(FILE_NAME)
}

/// `<platform config dir>/galaxy/galaxy.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented default config to `path`, creating parent directories.
///
/// A file that already exists is left as it is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(ConfigError::io(path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| ConfigError::io(path, e))?;

    info!("wrote default galaxy config to {}", path.display());
    Ok(())
}
