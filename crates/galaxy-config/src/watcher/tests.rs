//! Tests for the config file watcher.

use super::*;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use std::path::PathBuf;

fn event(kind: EventKind, path: &str) -> Event {
    Event::new(kind).add_path(PathBuf::from(path))
}

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_galaxy_watch.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galaxy.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    assert!(ConfigWatcher::new(PathBuf::from("/")).is_err());
}

#[test]
fn modify_of_watched_file_is_relevant() {
    let watcher = ConfigWatcher::new(PathBuf::from("/cfg/galaxy.toml")).unwrap();
    let ev = event(EventKind::Modify(ModifyKind::Any), "/cfg/galaxy.toml");
    assert!(watcher.is_relevant(&ev));
}

#[test]
fn create_of_watched_file_is_relevant() {
    let watcher = ConfigWatcher::new(PathBuf::from("/cfg/galaxy.toml")).unwrap();
    let ev = event(EventKind::Create(CreateKind::File), "/cfg/galaxy.toml");
    assert!(watcher.is_relevant(&ev));
}

#[test]
fn sibling_file_is_ignored() {
    let watcher = ConfigWatcher::new(PathBuf::from("/cfg/galaxy.toml")).unwrap();
    let ev = event(EventKind::Modify(ModifyKind::Any), "/cfg/other.toml");
    assert!(!watcher.is_relevant(&ev));
}

#[test]
fn remove_is_ignored() {
    let watcher = ConfigWatcher::new(PathBuf::from("/cfg/galaxy.toml")).unwrap();
    let ev = event(EventKind::Remove(RemoveKind::File), "/cfg/galaxy.toml");
    assert!(!watcher.is_relevant(&ev));
}

#[test]
fn debounce_is_half_a_second() {
    assert_eq!(DEBOUNCE.as_millis(), 500);
}
