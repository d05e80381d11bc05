//! Decoded person search results.

use serde::{Deserialize, Serialize};

use crate::tables::RESULT_HEADERS;

/// Corporation party ID as sent by the API.
///
/// The service writes its decimal ID columns either as JSON numbers or as
/// strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PartyId {
    /// `1234567`
    Num(i64),
    /// `"1234567"`
    Text(String),
}

impl PartyId {
    /// Numeric value of the ID, parsing the text form if needed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PartyId::Num(id) => Some(*id),
            PartyId::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyId::Num(id) => write!(f, "{id}"),
            PartyId::Text(text) => f.write_str(text),
        }
    }
}

/// One row of a person search response.
///
/// Field names are the record keys used by [`RESULT_HEADERS`]. The
/// upper-case column names some deployments send (`LAST_NME`, ...) are
/// accepted as aliases. Every field is optional because the API returns
/// `null` for missing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PersonRecord {
    /// Surname
    #[serde(alias = "LAST_NME")]
    pub last_nme: Option<String>,
    /// Middle name
    #[serde(alias = "MIDDLE_NME")]
    pub middle_nme: Option<String>,
    /// First name
    #[serde(alias = "FIRST_NME")]
    pub first_nme: Option<String>,
    /// Date the office was taken
    #[serde(alias = "APPOINTMENT_DT")]
    pub appointment_dt: Option<String>,
    /// Date the office ended
    #[serde(alias = "CESSATION_DT")]
    pub cessation_dt: Option<String>,
    /// "ACT" or "HIS"
    #[serde(alias = "ACCHISTORY")]
    pub acchistory: Option<String>,
    /// Incorporation or organization number
    #[serde(alias = "CORP_NUM")]
    pub corp_num: Option<String>,
    /// Company name
    #[serde(alias = "CORP_NME")]
    pub corp_nme: Option<String>,
    /// First line of the filing address
    #[serde(alias = "ADDR_LINE_1")]
    pub addr_line_1: Option<String>,
    /// Province code
    #[serde(alias = "PROVINCE")]
    pub province: Option<String>,
    /// Postal code
    #[serde(alias = "POSTAL_CD")]
    pub postal_cd: Option<String>,
    /// Corporation party ID
    #[serde(alias = "CORP_PARTY_ID")]
    pub corp_party_id: Option<PartyId>,
}

impl PersonRecord {
    /// Display value of the column keyed `key`, if the record has one.
    pub fn cell(&self, key: &str) -> Option<String> {
        let text = match key {
            "last_nme" => &self.last_nme,
            "middle_nme" => &self.middle_nme,
            "first_nme" => &self.first_nme,
            "appointment_dt" => &self.appointment_dt,
            "cessation_dt" => &self.cessation_dt,
            "acchistory" => &self.acchistory,
            "corp_num" => &self.corp_num,
            "corp_nme" => &self.corp_nme,
            "addr_line_1" => &self.addr_line_1,
            "province" => &self.province,
            "postal_cd" => &self.postal_cd,
            "corp_party_id" => return self.corp_party_id.as_ref().map(PartyId::to_string),
            _ => return None,
        };
        text.clone()
    }

    /// All cells in results grid order; missing values are empty strings.
    pub fn row(&self) -> Vec<String> {
        RESULT_HEADERS
            .iter()
            .map(|column| self.cell(column.value).unwrap_or_default())
            .collect()
    }
}

/// Body of a person search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResults {
    /// Rows of the requested page
    #[serde(default)]
    pub results: Vec<PersonRecord>,
    /// Number of matches across all pages, when the API reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl SearchResults {
    /// Renders the results as tab-separated text with a heading line taken
    /// from [`RESULT_HEADERS`].
    pub fn to_tsv(&self) -> String {
        let mut out = RESULT_HEADERS
            .iter()
            .map(|column| column.text)
            .collect::<Vec<_>>()
            .join("\t");
        out.push('\n');
        for record in &self.results {
            out.push_str(&record.row().join("\t"));
            out.push('\n');
        }
        out
    }
}
