//! Common test infrastructure for statusgate-github tests
//!
//! - `mock_server`: wiremock setup helpers for the status endpoint
//! - status payload builders
//! - `CapturedLogs`, an in-memory log sink for asserting on emitted events

#![allow(dead_code)]

pub mod mock_server;

pub use mock_server::*;

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use statusgate_github::{ClientConfig, GitHubClient};
use wiremock::MockServer;

pub const OWNER: &str = "octo-org";
pub const REPO: &str = "widgets";
pub const SHA: &str = "6dcb09b5b57875f334f61aebed695e2e4193db5e";
pub const TOKEN: &str = "ghs_test_token";

/// One status entry as GitHub serializes it
pub fn status_json(context: &str, state: &str) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/{OWNER}/{REPO}/statuses/{SHA}"),
        "id": 1,
        "node_id": "MDY6U3RhdHVzMQ==",
        "state": state,
        "description": format!("{context} is {state}"),
        "target_url": "https://ci.example.com/builds/1",
        "context": context,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:05:00Z",
        "creator": { "login": "ci-bot", "id": 2 }
    })
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(
        ClientConfig::default()
            .with_api_url(server.uri())
            .with_token(TOKEN),
    )
    .expect("client should build")
}

/// Collects formatted log output written by a test subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a TRACE-level subscriber for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
