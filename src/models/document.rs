//! Regulatory document models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{Facility, Program, Regulation};
use crate::extract::NarrativeSections;

/// Full record for a single regulatory document.
///
/// Upstream metadata is kept verbatim in `extra`; the remaining fields are
/// filled in by the details service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetails {
    pub document_id: String,
    /// Raw CFR reference, e.g. `"40 CFR 60, 61"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfr_part: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_formats: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programs: Vec<Program>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_regulations: Vec<Regulation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sup_info: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facilities: Vec<Facility>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentDetails {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    /// Link to the alternate (narrative) rendering, if upstream has one.
    pub fn narrative_link(&self) -> Option<&str> {
        self.file_formats
            .get(1)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Copy extracted narrative sections onto the record.
    pub fn apply_sections(&mut self, sections: NarrativeSections) {
        self.summary = sections.summary;
        self.dates = sections.dates;
        self.addresses = sections.addresses;
        self.contact = sections.contact;
        self.sup_info = sections.sup_info;
    }
}

/// One row of a document search page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfr_part: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentSummary {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

/// Raw response of the documents search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_num_records: u64,
    #[serde(default)]
    pub documents: Option<Vec<DocumentSummary>>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
