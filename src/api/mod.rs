//! Wrappers around the search API endpoints.
//!
//! - [`SearchApi`]: basic and advanced person searches
//! - [`AdvancedQuery`]: builds the query string an advanced search sends
//! - [`SearchResults`] / [`PersonRecord`]: decoded search results
//! - [`LookupApi`]: person, offices held and corporation lookups
//! - [`OpsApi`]: readiness and health probes

mod lookup;
mod ops;
mod query;
mod results;
mod search;

pub use lookup::{
    CorporationRecord, CorporationResults, LookupApi, OfficeHeld, OfficesHeld, RawRecord,
};
pub use ops::{OpsApi, OpsStatus};
pub use query::{AdvancedQuery, Clause, InvalidClause, Mode, SortDirection};
pub use results::{PartyId, PersonRecord, SearchResults};
pub use search::{advanced_search_path, SearchApi};
