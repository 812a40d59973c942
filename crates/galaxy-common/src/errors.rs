//! Error taxonomy shared by the galaxy crates.
//!
//! Configuration problems are the only errors the scene core produces;
//! everything else surfaces at the application edge as [`GalaxyError`].

use std::path::PathBuf;

/// A config file, config value, or parameter set that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// The platform has no per-user config directory.
    #[error("no config directory on this platform")]
    NoConfigDir,

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    /// Parameters outside their declared bounds, or ones the generator
    /// cannot turn into finite geometry. Several problems are joined by `"; "`.
    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

impl ConfigError {
    /// Attach the offending path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Top-level error of the `galaxy` binary.
#[derive(Debug, thiserror::Error)]
pub enum GalaxyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("event loop error: {0}")]
    EventLoop(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_errors_name_the_problem() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("galaxy.branches = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: galaxy.branches = 0"
        );

        assert_eq!(
            ConfigError::NoConfigDir.to_string(),
            "no config directory on this platform"
        );
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::io("/etc/galaxy.toml", source);
        assert_eq!(err.to_string(), "cannot access /etc/galaxy.toml: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn galaxy_error_wraps_config_transparently() {
        let err: GalaxyError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, GalaxyError::Config(_)));
        assert_eq!(err.to_string(), "config parse error: bad toml");
    }

    #[test]
    fn galaxy_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GalaxyError = io_err.into();
        assert!(matches!(err, GalaxyError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn edge_failures_are_labelled() {
        let err = GalaxyError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = GalaxyError::EventLoop("no display".into());
        assert_eq!(err.to_string(), "event loop error: no display");
    }
}
