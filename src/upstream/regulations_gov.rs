//! regulations.gov documents API adapter.

use async_trait::async_trait;
use tracing::debug;

use super::DocumentsApi;
use crate::http_client::{FetchError, HttpClient, QueryParams};
use crate::models::{DocumentDetails, DocumentPage, DocumentQuery};

/// regulations.gov API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.data.gov/regulations/v3";

/// Client for the documents API.
#[derive(Clone)]
pub struct RegulationsGovClient {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl RegulationsGovClient {
    pub fn new(client: HttpClient, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// URL for `document.json`.
    pub fn document_url(&self, document_id: &str) -> Result<String, FetchError> {
        let params = QueryParams::new()
            .push("api_key", &self.api_key)
            .push("documentId", document_id);
        self.build(&format!("{}/document.json", self.base_url), &params)
    }

    /// URL for `documents.json`.
    pub fn search_url(&self, query: &DocumentQuery) -> Result<String, FetchError> {
        let params = QueryParams::new()
            .push("api_key", &self.api_key)
            .extend(query.to_params());
        self.build(&format!("{}/documents.json", self.base_url), &params)
    }

    /// Rendering link with the API key appended.
    pub fn rendering_url(&self, link: &str) -> Result<String, FetchError> {
        self.build(link, &QueryParams::new().push("api_key", &self.api_key))
    }

    fn build(&self, base: &str, params: &QueryParams) -> Result<String, FetchError> {
        params
            .apply_to(base)
            .map(String::from)
            .map_err(|e| FetchError::InvalidRequest(format!("Bad URL {}: {}", base, e)))
    }
}

#[async_trait]
impl DocumentsApi for RegulationsGovClient {
    async fn get_document(&self, document_id: &str) -> Result<DocumentDetails, FetchError> {
        debug!("Fetching document {}", document_id);
        self.client.get_json(&self.document_url(document_id)?).await
    }

    async fn search_documents(&self, query: &DocumentQuery) -> Result<DocumentPage, FetchError> {
        debug!(
            "Searching documents (s={:?}, po={}, rpp={})",
            query.search, query.offset, query.limit
        );
        self.client.get_json(&self.search_url(query)?).await
    }

    async fn get_rendering(&self, link: &str) -> Result<String, FetchError> {
        self.client.get_text(&self.rendering_url(link)?).await
    }
}
