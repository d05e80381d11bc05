//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`HttpError`, `InitializationError`)
//! - Error categorization for user-facing reporting
//!
//! The search wrappers add no errors of their own: every `HttpError` a caller
//! sees was produced by the HTTP client.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_http_error, categorize_reqwest_error};
pub use types::{ErrorType, HttpError, InitializationError};
