//! Search criteria and results.

use serde::{Deserialize, Serialize};

use super::DocumentSummary;
use crate::http_client::QueryParams;

/// Caller-supplied search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

impl SearchCriteria {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit,
            ..Default::default()
        }
    }

    /// Program filter, if one was actually given.
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref().filter(|p| !p.is_empty())
    }
}

/// Agency whose documents are searched.
pub const SEARCH_AGENCY: &str = "EPA";
/// Document type: proposed rules and rules.
pub const SEARCH_DOCUMENT_TYPE: &str = "PR";
/// Docket type: rulemaking.
pub const SEARCH_DOCKET_TYPE: &str = "R";
/// Comment period: open.
pub const SEARCH_COMMENT_PERIOD: &str = "O";

/// Query sent to the documents search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Space-joined keywords; `None` means no keyword filter at all.
    pub search: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

impl DocumentQuery {
    /// Build from a keyword list, dropping empty entries.
    pub fn from_keywords(keywords: &[String], offset: u32, limit: u32) -> Self {
        let joined = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            search: if joined.is_empty() { None } else { Some(joined) },
            offset,
            limit,
        }
    }

    /// Parameter table for the documents search endpoint (without `api_key`).
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("a", SEARCH_AGENCY)
            .push("dct", SEARCH_DOCUMENT_TYPE)
            .push("dkt", SEARCH_DOCKET_TYPE)
            .push("cp", SEARCH_COMMENT_PERIOD)
            .push("rpp", self.limit)
            .push("po", self.offset)
            .push_opt("s", self.search.as_deref())
    }
}

/// One page of enriched search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<DocumentSummary>,
    /// Upstream record count; not derived from `items`.
    pub total: u64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_joined_with_single_space() {
        let query = DocumentQuery::from_keywords(
            &["benzene".to_string(), "".to_string(), "325110".to_string(), "60".to_string()],
            0,
            25,
        );
        assert_eq!(query.search.as_deref(), Some("benzene 325110 60"));
    }

    #[test]
    fn empty_keywords_omit_search_param() {
        let query = DocumentQuery::from_keywords(&["".to_string(), " ".to_string()], 10, 5);
        assert_eq!(query.search, None);

        let params = query.to_params();
        assert!(!params.contains("s"));
        assert_eq!(params.get("po"), Some("10"));
        assert_eq!(params.get("rpp"), Some("5"));
    }

    #[test]
    fn fixed_search_params() {
        let params = DocumentQuery::from_keywords(&["lead".to_string()], 0, 10).to_params();
        assert_eq!(params.get("a"), Some("EPA"));
        assert_eq!(params.get("dct"), Some("PR"));
        assert_eq!(params.get("dkt"), Some("R"));
        assert_eq!(params.get("cp"), Some("O"));
        assert_eq!(params.get("s"), Some("lead"));
    }

    #[test]
    fn criteria_from_json() {
        let criteria: SearchCriteria = serde_json::from_str(
            r#"{"substance": "benzene", "stateAbbr": "TX", "offset": 0, "limit": 20}"#,
        )
        .unwrap();
        assert_eq!(criteria.substance.as_deref(), Some("benzene"));
        assert_eq!(criteria.state_abbr.as_deref(), Some("TX"));
        assert_eq!(criteria.program(), None);
    }
}
