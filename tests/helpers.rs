// Shared test helpers for the search API tests.
//
// Provides a recording fake `HttpClient` and wiremock-backed API setup.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use person_search::{
    init_client, Config, HttpClient, HttpError, HttpResponse, SearchParams,
};
use wiremock::MockServer;

/// One `HttpClient::get` call seen by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    pub params: Option<SearchParams>,
}

/// Fake client that records every call and answers with a canned result.
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    status: u16,
    body: String,
}

impl RecordingClient {
    /// Answers every request with 200 and `body`.
    #[allow(dead_code)] // Used by other test files
    pub fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            status: 200,
            body: body.to_string(),
        })
    }

    /// Fails every request with `HttpError::Status`.
    #[allow(dead_code)] // Used by other test files
    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            status,
            body: body.to_string(),
        })
    }

    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn get(
        &self,
        path: &str,
        params: Option<&SearchParams>,
    ) -> Result<HttpResponse, HttpError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(RecordedCall {
                path: path.to_string(),
                params: params.cloned(),
            });
        if (200..300).contains(&self.status) {
            Ok(HttpResponse::new(self.status, self.body.clone()))
        } else {
            Err(HttpError::status(self.status, &self.body))
        }
    }
}

/// Builds search params from string pairs.
#[allow(dead_code)] // Used by other test files
pub fn params(pairs: &[(&str, &str)]) -> SearchParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Builds the production client against a mock server.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &MockServer) -> Arc<dyn HttpClient> {
    let config = Config {
        base_url: server.uri(),
        timeout_seconds: 5,
        ..Default::default()
    };
    init_client(&config).expect("Failed to build HTTP client")
}
