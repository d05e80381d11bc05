//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use crate::http::ReqwestHttpClient;

/// Initializes the HTTP client used to reach the search API.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Request timeout from the config, plus a fixed TCP connect timeout
///
/// and binds it to `config.base_url`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the reqwest client cannot
/// be built, or `InitializationError::BaseUrlError` if the base URL is invalid.
pub fn init_client(config: &Config) -> Result<Arc<ReqwestHttpClient>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    let client = ReqwestHttpClient::new(Arc::new(client), &config.base_url)?;
    Ok(Arc::new(client))
}
