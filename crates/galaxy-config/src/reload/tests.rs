//! Tests for the reload manager.

use super::*;
use std::path::PathBuf;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_galaxy_reload_test.toml");
    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config, crate::schema::GalaxyConfig::default());
    assert_eq!(*rx.borrow(), config);
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(
        &path,
        r#"
[galaxy]
count = 5000
spin = -1.5
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.galaxy.count, 5000);
    assert_eq!(config.galaxy.spin, -1.5);
    assert_eq!(config.galaxy.branches, 3); // default
}

#[tokio::test]
async fn start_replaces_out_of_bounds_galaxy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(&path, "[galaxy]\ncount = 4000000000\n\n[animation]\nrotation_speed = 0.1\n")
        .unwrap();

    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config.galaxy, crate::schema::GalaxyParams::default());
    assert!((config.animation.rotation_speed - 0.1).abs() < f64::EPSILON);
    assert_eq!(*rx.borrow(), config);
}

#[test]
fn reload_refuses_oversized_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(&path, "[galaxy]\ncount = 4000000000\n").unwrap();

    let manager = ReloadManager { config_path: path };
    assert!(matches!(
        manager.reload_config(),
        Err(galaxy_common::ConfigError::ValidationError(_))
    ));
}

#[test]
fn reload_refuses_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(&path, "[galaxy]\nbranches = 0\n").unwrap();

    let manager = ReloadManager {
        config_path: path.clone(),
    };
    assert_eq!(manager.config_path(), path.as_path());
    assert!(matches!(
        manager.reload_config(),
        Err(galaxy_common::ConfigError::ValidationError(_))
    ));
}

#[test]
fn reload_accepts_valid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(&path, "[galaxy]\nbranches = 7\n").unwrap();

    let manager = ReloadManager { config_path: path };
    let config = manager.reload_config().unwrap();
    assert_eq!(config.galaxy.branches, 7);
}
