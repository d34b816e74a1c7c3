//! Shared helpers for the admin integration tests

#![allow(dead_code)]

use fairway_admin::ErrorReporter;
use fairway_client::ApiClient;
use fairway_core::{Error, Partner};
use serde_json::json;
use std::sync::Mutex;
use wiremock::MockServer;

/// Build a client pointed at the mock backend
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).expect("client should build")
}

/// Reporter that records every failure it is handed
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(context, error)` pairs reported so far
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().expect("reporter lock").clone()
    }

    /// Contexts reported so far
    pub fn contexts(&self) -> Vec<String> {
        self.reports().into_iter().map(|(c, _)| c).collect()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &Error) {
        self.reports
            .lock()
            .expect("reporter lock")
            .push((context.to_string(), error.to_string()));
    }
}

/// A minimal golf-course entry for list payloads
pub fn golf_entry(id: &str, name: &str, location: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "location": location,
        "holes": 18,
        "par": 72
    })
}

/// A partner value matching `golf_entry` for request bodies
pub fn golf_partner(id: &str, name: &str, location: &str) -> Partner {
    serde_json::from_value(golf_entry(id, name, location)).expect("valid partner JSON")
}
