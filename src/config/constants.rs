//! Configuration constants.
//!
//! Paths of the search API and defaults for the HTTP client.

/// Base path of the person search endpoint.
pub const PERSON_SEARCH_PATH: &str = "/person/search";

/// Single person record: `/person/<corp_party_id>`.
pub const PERSON_PATH: &str = "/person";
/// Offices held by a person: `/person/officesheld/<corp_party_id>`.
pub const OFFICES_HELD_PATH: &str = "/person/officesheld";
/// Single corporation record: `/corporation/<corp_num>`.
pub const CORPORATION_PATH: &str = "/corporation";
/// Corporation search, paged like the person search.
pub const CORPORATION_SEARCH_PATH: &str = "/corporation/search/";

/// Readiness probe of the search API.
pub const OPS_READYZ_PATH: &str = "/ops/readyz";
/// Health probe of the search API (checks the database behind it).
pub const OPS_HEALTHZ_PATH: &str = "/ops/healthz";

/// Base URL used when neither `--base-url` nor `PERSON_SEARCH_API_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable holding the API base URL.
/// Can also be set in a `.env` file next to the binary.
pub const BASE_URL_ENV: &str = "PERSON_SEARCH_API_URL";

/// Per-request timeout in seconds.
/// Enforced by the HTTP client only; the search layer itself never times out.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("person_search/", env!("CARGO_PKG_VERSION"));

/// Maximum number of body characters kept in a status error message
pub const MAX_ERROR_BODY_CHARS: usize = 500;
