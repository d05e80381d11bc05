//! person_search library: client for the person/company search API
//!
//! This library wraps the search API's GET endpoints (person search, person
//! and corporation lookups, ops probes) and carries the static tables a
//! search UI needs (searchable fields, comparison operators and the results
//! grid layout).
//!
//! # Example
//!
//! ```no_run
//! use person_search::{init_client, Config, SearchApi, SearchParams, SearchResults};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "http://localhost:5000".to_string(),
//!     ..Default::default()
//! };
//! let api = SearchApi::new(init_client(&config)?);
//!
//! let mut params = SearchParams::new();
//! params.insert("query".to_string(), "Smith".to_string());
//! let results: SearchResults = api.basic_search(&params).await?.json()?;
//! println!("{} matches", results.results.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The search calls are async and the production client is built on
//! `reqwest`, so they must run inside a Tokio runtime.

#![warn(missing_docs)]

mod api;
pub mod config;
mod error_handling;
mod http;
pub mod initialization;
pub mod tables;

// Re-export public API
pub use api::{
    advanced_search_path, AdvancedQuery, Clause, CorporationRecord, CorporationResults,
    InvalidClause, LookupApi, Mode, OfficeHeld, OfficesHeld, OpsApi, OpsStatus, PartyId,
    PersonRecord, RawRecord, SearchApi, SearchResults, SortDirection,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_http_error, categorize_reqwest_error, ErrorType, HttpError, InitializationError,
};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient, SearchParams};
pub use initialization::{init_client, init_logger, init_logger_with};
pub use tables::{
    Align, FieldOption, OperatorOption, ResultColumn, FIELD_VALUES, OPERATOR_VALUES,
    RESULT_HEADERS,
};
