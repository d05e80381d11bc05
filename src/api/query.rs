//! Advanced query builder.
//!
//! The search API accepts any number of `field` / `operator` / `value`
//! triples, combined with OR unless `mode=ALL` asks for AND, plus optional
//! sorting and paging:
//!
//! ```text
//! field=ANY_NME&operator=startswith&value=Sky&field=last_nme&operator=exact&value=Little&mode=ALL
//! ```
//!
//! Field and sort keys are the lower-case record keys of the configuration
//! tables (`last_nme`, `corp_nme`, ...). The service that accepts those keys
//! sorts descending only for `sort_type=dsc`, which is what
//! [`SortDirection::Desc`] sends. Older deployments that expect upper-case
//! keys and `desc` can still be reached through a raw query string.
//!
//! [`AdvancedQuery`] produces that string for [`SearchApi::advanced_search`].
//!
//! [`SearchApi::advanced_search`]: super::SearchApi::advanced_search

use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;
use url::form_urlencoded;

use crate::tables::{FieldOption, OperatorOption};

/// How clauses are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Match any clause (OR); the backend default
    Any,
    /// Match every clause (AND)
    All,
}

impl Mode {
    /// Value sent as `mode=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Any => "ANY",
            Mode::All => "ALL",
        }
    }
}

/// Sort direction for `sort_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    /// Ascending; any `sort_type` but `dsc` sorts this way
    Asc,
    /// Descending, sent as `dsc`
    Desc,
}

impl SortDirection {
    /// Value sent as `sort_type=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "dsc",
        }
    }
}

/// One `field` / `operator` / `value` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Backend field key, e.g. `last_nme`
    pub field: String,
    /// Backend operator key, e.g. `startswith`
    pub operator: String,
    /// Search value, unencoded
    pub value: String,
}

/// A clause string that is not `FIELD:OPERATOR:VALUE`.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected FIELD:OPERATOR:VALUE, got '{0}'")]
pub struct InvalidClause(pub String);

impl FromStr for Clause {
    type Err = InvalidClause;

    /// Parses `FIELD:OPERATOR:VALUE`. The value may itself contain `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(operator), Some(value))
                if !field.is_empty() && !operator.is_empty() =>
            {
                Ok(Clause {
                    field: field.to_string(),
                    operator: operator.to_string(),
                    value: value.to_string(),
                })
            }
            _ => Err(InvalidClause(s.to_string())),
        }
    }
}

/// Builder for the query string of an advanced search.
///
/// # Examples
///
/// ```
/// use person_search::{AdvancedQuery, Mode};
///
/// let query = AdvancedQuery::new()
///     .clause("ANY_NME", "startswith", "Sky")
///     .clause("last_nme", "exact", "Little")
///     .mode(Mode::All);
/// assert_eq!(
///     query.to_query_string(),
///     "field=ANY_NME&operator=startswith&value=Sky&field=last_nme&operator=exact&value=Little&mode=ALL"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedQuery {
    clauses: Vec<Clause>,
    mode: Option<Mode>,
    sort: Option<(SortDirection, String)>,
    page: Option<u32>,
}

impl AdvancedQuery {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause by backend keys.
    pub fn clause(
        mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.clauses.push(Clause {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a clause using entries of the configuration tables.
    pub fn clause_with(
        self,
        field: &FieldOption,
        operator: &OperatorOption,
        value: impl Into<String>,
    ) -> Self {
        self.clause(field.value, operator.value, value)
    }

    /// Adds an already-built clause.
    pub fn push(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Sets how clauses are combined.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sorts results by the column whose lower-case record key is `column`,
    /// e.g. `corp_nme`.
    pub fn sort(mut self, direction: SortDirection, column: impl Into<String>) -> Self {
        self.sort = Some((direction, column.into()));
        self
    }

    /// Requests a results page, starting at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Clauses in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.mode.is_none() && self.sort.is_none() && self.page.is_none()
    }

    /// Encodes the query with `application/x-www-form-urlencoded` rules.
    ///
    /// Triples come first in insertion order, then `mode`, `sort_type`,
    /// `sort_value` and `page` when set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for clause in &self.clauses {
            serializer
                .append_pair("field", &clause.field)
                .append_pair("operator", &clause.operator)
                .append_pair("value", &clause.value);
        }
        if let Some(mode) = self.mode {
            serializer.append_pair("mode", mode.as_str());
        }
        if let Some((direction, column)) = &self.sort {
            serializer
                .append_pair("sort_type", direction.as_str())
                .append_pair("sort_value", column);
        }
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        serializer.finish()
    }
}
