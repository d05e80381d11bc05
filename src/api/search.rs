//! Person search request builder.

use std::sync::Arc;

use log::debug;

use super::query::AdvancedQuery;
use crate::config::PERSON_SEARCH_PATH;
use crate::error_handling::HttpError;
use crate::http::{HttpClient, HttpResponse, SearchParams};

/// Path requested by an advanced search: `/person/search/?` followed by
/// `query` exactly as given.
///
/// Unlike a basic search, the query string follows a trailing slash. Both
/// forms are kept as the existing UI sends them.
pub fn advanced_search_path(query: &str) -> String {
    format!("{}/?{}", PERSON_SEARCH_PATH, query)
}

/// Issues person searches against the API.
///
/// Stateless: every call sends exactly one GET through the injected
/// [`HttpClient`] and returns whatever the client returns. Nothing is
/// validated, retried or cached here. Cloning is cheap and clones may be used
/// concurrently; responses can complete in any order.
#[derive(Clone)]
pub struct SearchApi {
    client: Arc<dyn HttpClient>,
}

impl SearchApi {
    /// Creates a search API on top of `client`.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Basic search: `GET /person/search` with `params` as query parameters.
    ///
    /// An empty `params` is sent as-is; the backend decides what it means.
    ///
    /// # Errors
    ///
    /// Any error from the HTTP client, unchanged.
    pub async fn basic_search(&self, params: &SearchParams) -> Result<HttpResponse, HttpError> {
        debug!("Basic search with {} params", params.len());
        self.client.get(PERSON_SEARCH_PATH, Some(params)).await
    }

    /// Advanced search: `GET /person/search/?<query>`.
    ///
    /// `query` must already be URL-encoded; it is appended verbatim, so an
    /// empty query requests `/person/search/?`.
    ///
    /// # Errors
    ///
    /// Any error from the HTTP client, unchanged.
    pub async fn advanced_search(&self, query: &str) -> Result<HttpResponse, HttpError> {
        let path = advanced_search_path(query);
        debug!("Advanced search: {}", path);
        self.client.get(&path, None).await
    }

    /// Advanced search with a query built by [`AdvancedQuery`].
    pub async fn advanced_search_with(
        &self,
        query: &AdvancedQuery,
    ) -> Result<HttpResponse, HttpError> {
        self.advanced_search(&query.to_query_string()).await
    }
}
