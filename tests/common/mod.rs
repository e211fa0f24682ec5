//! Shared helpers for integration tests.

#![allow(dead_code, clippy::panic)]

use std::path::Path;

use axum::Router;
use latina_empire_api::api::build_app;
use latina_empire_api::app_state::AppState;
use latina_empire_api::service::ContentService;
use latina_empire_api::source::FixtureSource;
use std::sync::Arc;
use tempfile::TempDir;

/// Serves `app` on an ephemeral port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("failed to read listener address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Serves the API over a fixture directory.
pub async fn spawn_fixture_api(data_dir: &Path) -> String {
    let service = ContentService::new(Arc::new(FixtureSource::new(data_dir)));
    spawn(build_app(AppState::new(service))).await
}

/// Creates an empty temporary data directory.
pub fn data_dir() -> TempDir {
    let Ok(dir) = TempDir::new() else {
        panic!("failed to create temp dir");
    };
    dir
}

/// Writes `body` to `file` inside `dir`.
pub fn write_fixture(dir: &TempDir, file: &str, body: &serde_json::Value) {
    let Ok(text) = serde_json::to_string_pretty(body) else {
        panic!("fixture serializes");
    };
    if let Err(e) = std::fs::write(dir.path().join(file), text) {
        panic!("failed to write {file}: {e}");
    }
}

/// `GET url`, returning status and JSON body.
pub async fn get_json(url: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let Ok(response) = reqwest::get(url).await else {
        panic!("request to {url} failed");
    };
    let status = response.status();
    let Ok(body) = response.json::<serde_json::Value>().await else {
        panic!("response from {url} is not JSON");
    };
    (status, body)
}

/// `GET url`, returning status and raw bytes.
pub async fn get_bytes(url: &str) -> (reqwest::StatusCode, Vec<u8>) {
    let Ok(response) = reqwest::get(url).await else {
        panic!("request to {url} failed");
    };
    let status = response.status();
    let Ok(body) = response.bytes().await else {
        panic!("response from {url} has no body");
    };
    (status, body.to_vec())
}

/// Extracts the `slug` of every object in `body[key]`.
pub fn slugs(body: &serde_json::Value, key: &str) -> Vec<String> {
    body.get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.get("slug").and_then(serde_json::Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads `body[key]` as a list of strings.
pub fn strings(body: &serde_json::Value, key: &str) -> Vec<String> {
    body.get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
