//! Error categorization.
//!
//! Maps collaborator failures onto [`ErrorType`] for reporting.

use super::types::{ErrorType, HttpError};

/// Categorizes a status code the server answered with.
fn categorize_status(status: u16) -> ErrorType {
    match status {
        400 => ErrorType::HttpRequestBadRequest,
        401 => ErrorType::HttpRequestUnauthorized,
        403 => ErrorType::HttpRequestForbidden,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes are checked first, then the reqwest error kind. Connect
/// failures are also request errors in reqwest, so they are checked before
/// `is_request()`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes any [`HttpError`] into an `ErrorType`.
///
/// # Examples
///
/// ```
/// use person_search::{categorize_http_error, ErrorType, HttpError};
///
/// let err = HttpError::status(404, "not here");
/// assert_eq!(categorize_http_error(&err), ErrorType::HttpRequestNotFound);
/// ```
pub fn categorize_http_error(error: &HttpError) -> ErrorType {
    match error {
        HttpError::InvalidUrl(_) => ErrorType::InvalidUrlError,
        HttpError::Request(e) => categorize_reqwest_error(e),
        HttpError::Status { status, .. } => categorize_status(*status),
        HttpError::Decode(_) => ErrorType::ResponseDecodeError,
    }
}
