//! Readiness and health probes of the search API.

use std::sync::Arc;

use serde::Deserialize;

use crate::config::{OPS_HEALTHZ_PATH, OPS_READYZ_PATH};
use crate::error_handling::HttpError;
use crate::http::HttpClient;

/// Body returned by the probes, e.g. `{"message": "api is healthy"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpsStatus {
    /// Status text, e.g. `api is ready`
    pub message: String,
}

/// Calls the `/ops` probes.
#[derive(Clone)]
pub struct OpsApi {
    client: Arc<dyn HttpClient>,
}

impl OpsApi {
    /// Wraps an HTTP client bound to the API base URL.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// `GET /ops/readyz`: the API process is up.
    pub async fn readyz(&self) -> Result<OpsStatus, HttpError> {
        self.client.get(OPS_READYZ_PATH, None).await?.json()
    }

    /// `GET /ops/healthz`: the API can reach its database.
    ///
    /// An unhealthy API answers 500, which the client reports as
    /// `HttpError::Status`.
    pub async fn healthz(&self) -> Result<OpsStatus, HttpError> {
        self.client.get(OPS_HEALTHZ_PATH, None).await?.json()
    }
}
