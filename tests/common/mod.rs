#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use tinylink::infrastructure::persistence::JsonFileRepository;
use tinylink::state::AppState;

/// Builds an [`AppState`] over a file-backed store in a fresh temp directory.
///
/// The [`TempDir`] must be kept alive for the duration of the test.
pub async fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::open(dir.path().join("links.json"))
        .await
        .unwrap();

    (AppState::new(Arc::new(repository)), dir)
}

pub async fn create_test_link(state: &AppState, code: &str, url: &str) {
    state
        .registry
        .create(url, Some(code.to_string()))
        .await
        .unwrap();
}
