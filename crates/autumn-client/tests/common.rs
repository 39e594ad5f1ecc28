//! Common test utilities for Autumn client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use autumn_client::{Autumn, AutumnOptions, Environment, Logger};
use tracing::Level;
use wiremock::MockServer;

/// Secret key used by test clients.
pub const SECRET_KEY: &str = "am_sk_test_integration";

/// Publishable key used by test clients.
pub const PUBLISHABLE_KEY: &str = "am_pk_test_integration";

/// Base URL of the mock backend, including the `/v1` prefix.
pub fn api_url(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Route client diagnostics to the test output. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client pointed at the mock backend with the test secret key.
pub fn test_client(server: &MockServer) -> Autumn {
    init_tracing();
    Autumn::with_options_in(
        AutumnOptions::new()
            .with_secret_key(SECRET_KEY)
            .with_url(api_url(server)),
        &HashMap::<String, String>::new(),
    )
    .expect("Failed to build test client")
}

/// An ambient environment pointing at the mock backend.
pub fn ambient_env(server: &MockServer) -> Arc<dyn Environment> {
    let env: HashMap<String, String> = [
        ("AUTUMN_SECRET_KEY".to_string(), SECRET_KEY.to_string()),
        ("AUTUMN_API_URL".to_string(), api_url(server)),
    ]
    .into_iter()
    .collect();
    Arc::new(env)
}

/// An ambient environment with nothing set.
pub fn empty_env() -> Arc<dyn Environment> {
    Arc::new(HashMap::<String, String>::new())
}

/// Generate a unique customer ID to avoid cross-test confusion.
pub fn test_id() -> String {
    format!("cus_{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}

/// Logger that keeps every line for assertions.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    /// Lines logged so far.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}
