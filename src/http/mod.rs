//! HTTP client abstraction.
//!
//! The search API wrappers only ever need one capability: issue a GET for a
//! path (optionally with query parameters) and hand back the response. That
//! capability is the [`HttpClient`] trait, so callers can inject a fake in
//! tests and the production [`ReqwestHttpClient`] everywhere else.

mod reqwest_client;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error_handling::HttpError;

pub use reqwest_client::ReqwestHttpClient;

/// Search parameters: field name to search value.
///
/// Keys and values are passed through unmodified; encoding is left to the
/// [`HttpClient`].
pub type SearchParams = BTreeMap<String, String>;

/// Response returned by an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Decode` if the body is not a valid `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// GET-only HTTP client collaborator.
///
/// Implementations own base-URL resolution, headers, timeouts and any retry
/// policy. `path` is appended to the base URL exactly as given, including any
/// query string it already carries. `params`, when present, are encoded as
/// `key=value` pairs with standard URL encoding.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET request for `path`.
    async fn get(
        &self,
        path: &str,
        params: Option<&SearchParams>,
    ) -> Result<HttpResponse, HttpError>;
}
