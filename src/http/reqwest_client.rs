//! `reqwest`-backed implementation of [`HttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::{HttpClient, HttpResponse, SearchParams};
use crate::error_handling::{HttpError, InitializationError};

/// Production HTTP client: a shared `reqwest::Client` plus a base URL.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl ReqwestHttpClient {
    /// Wraps `client`, resolving every request path against `base_url`.
    ///
    /// A trailing `/` on `base_url` is dropped so that `"http://host/api/"`
    /// and `"http://host/api"` resolve paths the same way.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `base_url` is not an
    /// absolute URL.
    pub fn new(
        client: Arc<reqwest::Client>,
        base_url: &str,
    ) -> Result<Self, InitializationError> {
        Url::parse(base_url).map_err(|source| InitializationError::BaseUrlError {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL by plain concatenation.
    ///
    /// `Url::join` would drop the base URL's own path segments, and any
    /// re-encoding would alter a caller's pre-encoded query.
    fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(
        &self,
        path: &str,
        params: Option<&SearchParams>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.resolve(path)?;
        debug!("GET {} ({} query params)", url, params.map_or(0, |p| p.len()));

        let mut request = self.client.get(url);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", path, status.as_u16(), body.len());

        if !status.is_success() {
            return Err(HttpError::status(status.as_u16(), &body));
        }
        Ok(HttpResponse::new(status.as_u16(), body))
    }
}
