//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;

use summarize_form::api::SummarizeClient;
use summarize_form::config::ServerConfig;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockResponse, MockServer};

/// Client pointed at `base_url` with default timeouts.
pub fn client_for(base_url: &str) -> SummarizeClient {
    let config = ServerConfig {
        base_url: base_url.to_string(),
        ..ServerConfig::default()
    };
    SummarizeClient::new(&config).expect("client builds")
}

/// A base URL nothing is listening on.
pub fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
