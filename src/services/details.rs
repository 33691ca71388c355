//! Document details: metadata, facilities, programs and narrative sections.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::RegulatoryService;
use crate::extract::{extract_cfr_parts, extract_sections, narrative_text};
use crate::http_client::FetchError;
use crate::models::{DocumentDetails, FacilityQuery};

/// Arguments of a details request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl DetailsRequest {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    pub fn facility_query(&self) -> FacilityQuery {
        FacilityQuery::new(
            self.zip.as_deref(),
            self.state_abbr.as_deref(),
            self.city.as_deref(),
            self.street.as_deref(),
            self.program.as_deref(),
        )
    }
}

impl RegulatoryService {
    /// Fetch a document and everything related to it.
    ///
    /// Facilities are only looked up when zip, city or street is given.
    /// Narrative fields are only set when the document has a second file
    /// format to extract them from. Any failed upstream call fails the whole
    /// request.
    pub async fn get_details(&self, request: &DetailsRequest) -> Result<DocumentDetails, FetchError> {
        if request.document_id.trim().is_empty() {
            return Err(FetchError::InvalidRequest(
                "documentId is required".to_string(),
            ));
        }

        let mut details = self.documents.get_document(&request.document_id).await?;

        let facility_query = request.facility_query();
        let facilities = if facility_query.has_location() {
            self.facilities.get_facilities(&facility_query).await?
        } else {
            debug!("No location given, skipping facility lookup");
            Vec::new()
        };

        let parts = extract_cfr_parts(details.cfr_part.as_deref().unwrap_or_default());
        let (programs, regulations) = tokio::try_join!(
            self.lookup.programs_by_cfr(&parts),
            self.lookup.regulations_by_cfr(&parts),
        )?;
        details.programs = programs;
        details.all_regulations = regulations;

        if let Some(link) = details.narrative_link().map(str::to_string) {
            let body = self.documents.get_rendering(&link).await?;
            details.apply_sections(extract_sections(&narrative_text(&body)));
        } else {
            debug!("{} has no narrative rendering", details.document_id);
        }

        details.facilities = facilities;

        info!(
            "Details for {}: CFR parts {:?}, {} programs, {} regulations, {} facilities",
            details.document_id,
            parts,
            details.programs.len(),
            details.all_regulations.len(),
            details.facilities.len()
        );

        Ok(details)
    }
}
