//! Single-record lookups and the corporation search.
//!
//! These endpoints return whole database rows whose column set depends on the
//! deployment, so single records are kept as raw JSON objects. Office and
//! corporation search rows have a fixed shape and are typed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::results::PartyId;
use crate::config::{CORPORATION_PATH, CORPORATION_SEARCH_PATH, OFFICES_HELD_PATH, PERSON_PATH};
use crate::error_handling::HttpError;
use crate::http::{HttpClient, SearchParams};

/// A database row as returned by `/person/<id>` and `/corporation/<id>`.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// One office held by a corporation party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OfficeHeld {
    /// Party holding the office
    #[serde(alias = "CORP_PARTY_ID")]
    pub corp_party_id: Option<PartyId>,
    /// Officer type code, e.g. `DIR`
    #[serde(alias = "OFFICER_TYP_CD")]
    pub officer_typ_cd: Option<String>,
    /// Officer type label, e.g. `Director`
    #[serde(alias = "SHORT_DESC")]
    pub short_desc: Option<String>,
    /// Date the office was taken
    #[serde(alias = "APPOINTMENT_DT")]
    pub appointment_dt: Option<String>,
    /// First line of the party's mailing address
    #[serde(alias = "ADDR_LINE_1")]
    pub addr_line_1: Option<String>,
}

/// Body of `/person/officesheld/<id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OfficesHeld {
    /// Offices, in the order the API lists them
    #[serde(default)]
    pub results: Vec<OfficeHeld>,
}

/// One row of a corporation search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorporationRecord {
    /// Incorporation or organization number
    #[serde(alias = "CORP_NUM")]
    pub corp_num: Option<String>,
    /// Company name
    #[serde(alias = "CORP_NME")]
    pub corp_nme: Option<String>,
    /// Corporation type code
    #[serde(alias = "CORP_TYP_CD")]
    pub corp_typ_cd: Option<String>,
    /// Date of incorporation or recognition
    #[serde(alias = "RECOGNITION_DTS")]
    pub recognition_dts: Option<String>,
    /// State code; `ACT` for active
    #[serde(alias = "STATE_TYP_CD")]
    pub state_typ_cd: Option<String>,
    /// First line of the office address
    #[serde(alias = "ADDR_LINE_1")]
    pub addr_line_1: Option<String>,
    /// Postal code of the office address
    #[serde(alias = "POSTAL_CD")]
    pub postal_cd: Option<String>,
}

/// Body of `/corporation/search/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorporationResults {
    /// Rows of the requested page
    #[serde(default)]
    pub results: Vec<CorporationRecord>,
}

/// Person and corporation lookups.
///
/// Shares the [`HttpClient`] of the search wrappers; each call is one GET
/// with no retries.
#[derive(Clone)]
pub struct LookupApi {
    client: Arc<dyn HttpClient>,
}

impl LookupApi {
    /// Wraps an HTTP client bound to the API base URL.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// `GET /person/<id>`. The API answers `{}` for an unknown ID, which is
    /// returned as `None`.
    pub async fn person(&self, corp_party_id: i64) -> Result<Option<RawRecord>, HttpError> {
        let path = format!("{}/{}", PERSON_PATH, corp_party_id);
        let record: RawRecord = self.client.get(&path, None).await?.json()?;
        Ok(non_empty(record))
    }

    /// `GET /person/officesheld/<id>`.
    pub async fn offices_held(&self, corp_party_id: i64) -> Result<OfficesHeld, HttpError> {
        let path = format!("{}/{}", OFFICES_HELD_PATH, corp_party_id);
        self.client.get(&path, None).await?.json()
    }

    /// `GET /corporation/<corp_num>`, or `None` for an unknown number.
    ///
    /// `corp_num` is percent-encoded as a single path segment.
    pub async fn corporation(&self, corp_num: &str) -> Result<Option<RawRecord>, HttpError> {
        let path = format!("{}/{}", CORPORATION_PATH, urlencoding::encode(corp_num));
        let record: RawRecord = self.client.get(&path, None).await?.json()?;
        Ok(non_empty(record))
    }

    /// `GET /corporation/search/?query=...&page=...`.
    ///
    /// Matches the corporation number exactly or the company name by
    /// substring. The API rejects an empty `query` with 400.
    pub async fn corporation_search(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<CorporationResults, HttpError> {
        let mut params = SearchParams::new();
        params.insert("query".to_string(), query.to_string());
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }
        self.client
            .get(CORPORATION_SEARCH_PATH, Some(&params))
            .await?
            .json()
    }
}

fn non_empty(record: RawRecord) -> Option<RawRecord> {
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}
