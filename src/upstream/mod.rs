//! Upstream data sources.
//!
//! Each external service is a trait so the services can be driven by the
//! HTTP adapters in production and by in-memory implementations in tests.

mod frs;
mod regulations_gov;

pub use frs::{FrsClient, DEFAULT_FACILITY_API_URL};
pub use regulations_gov::{RegulationsGovClient, DEFAULT_API_BASE_URL};

use async_trait::async_trait;

use crate::http_client::FetchError;
use crate::models::{DocumentDetails, DocumentPage, DocumentQuery, Facility, FacilityQuery};
use crate::models::{Program, Regulation};

/// Regulatory documents API.
#[async_trait]
pub trait DocumentsApi: Send + Sync {
    /// Metadata for one document.
    async fn get_document(&self, document_id: &str) -> Result<DocumentDetails, FetchError>;

    /// One page of document search results.
    async fn search_documents(&self, query: &DocumentQuery) -> Result<DocumentPage, FetchError>;

    /// Body of a rendering link from a document's `fileFormats`.
    async fn get_rendering(&self, link: &str) -> Result<String, FetchError>;
}

/// Facility registry lookup.
#[async_trait]
pub trait FacilityApi: Send + Sync {
    async fn get_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, FetchError>;
}

/// Program and regulation cross-reference keyed by CFR part.
#[async_trait]
pub trait RegulationLookup: Send + Sync {
    async fn programs_by_cfr(&self, parts: &[u32]) -> Result<Vec<Program>, FetchError>;

    async fn regulations_by_cfr(&self, parts: &[u32]) -> Result<Vec<Regulation>, FetchError>;

    async fn search_programs(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Program>, FetchError>;
}
