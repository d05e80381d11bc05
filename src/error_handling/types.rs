//! Error type definitions.
//!
//! This module defines the errors produced by the HTTP client collaborator and
//! by initialization, plus the categories used when reporting them.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured base URL is not an absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrlError {
        /// The rejected base URL
        url: String,
        /// Why it was rejected
        source: url::ParseError,
    },
}

/// Failures surfaced by an [`HttpClient`](crate::HttpClient).
///
/// The search wrappers never construct these themselves; whatever the client
/// returns is handed back to the caller as-is.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Base URL and request path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (connect, timeout, body read, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Response status code
        status: u16,
        /// Response body, truncated to `MAX_ERROR_BODY_CHARS`
        body: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Builds a [`HttpError::Status`], truncating long bodies.
    pub fn status(status: u16, body: &str) -> Self {
        let max = crate::config::MAX_ERROR_BODY_CHARS;
        let body = if body.chars().count() > max {
            let truncated: String = body.chars().take(max).collect();
            format!(
                "{}... (truncated, original length: {} chars)",
                truncated,
                body.chars().count()
            )
        } else {
            body.to_string()
        };
        HttpError::Status { status, body }
    }

    /// Returns the HTTP status code when the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Request(e) => e.status().map(|s| s.as_u16()),
            HttpError::InvalidUrl(_) | HttpError::Decode(_) => None,
        }
    }
}

/// Categories of request failures, used for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Request construction
    InvalidUrlError,
    HttpRequestBuilderError,
    // HTTP/Network errors
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Status codes the search API is known to return
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestForbidden,           // 403 Forbidden
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestTooManyRequests,     // 429 Too Many Requests
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Payload
    ResponseDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrlError => "Invalid request URL",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::ResponseDecodeError => "Response decode error",
        }
    }
}
