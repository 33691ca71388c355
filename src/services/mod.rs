//! Document details and search services.
//!
//! [`RegulatoryService`] combines the documents API, the facility registry and
//! the regulation catalog into the two operations exposed to callers:
//! [`get_details`](RegulatoryService::get_details) and
//! [`search`](RegulatoryService::search).

mod details;
mod search;

pub use details::DetailsRequest;
pub use search::PROGRAM_SEARCH_LIMIT;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::catalog::RegulationCatalog;
use crate::config::Settings;
use crate::http_client::{FetchError, HttpClient};
use crate::upstream::{DocumentsApi, FacilityApi, FrsClient, RegulationLookup, RegulationsGovClient};

/// Default cap on concurrent per-item detail lookups during search.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 10;

/// Orchestrates calls to the upstream sources.
#[derive(Clone)]
pub struct RegulatoryService {
    documents: Arc<dyn DocumentsApi>,
    facilities: Arc<dyn FacilityApi>,
    lookup: Arc<dyn RegulationLookup>,
    max_concurrent_lookups: usize,
}

impl RegulatoryService {
    pub fn new(
        documents: Arc<dyn DocumentsApi>,
        facilities: Arc<dyn FacilityApi>,
        lookup: Arc<dyn RegulationLookup>,
    ) -> Self {
        Self {
            documents,
            facilities,
            lookup,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }

    /// Set the per-item lookup concurrency cap (minimum 1).
    pub fn with_max_concurrent_lookups(mut self, max: usize) -> Self {
        self.max_concurrent_lookups = max.max(1);
        self
    }

    pub fn max_concurrent_lookups(&self) -> usize {
        self.max_concurrent_lookups
    }

    /// Build the production service from settings: HTTP adapters for the
    /// documents and facility APIs and the file-backed regulation catalog.
    pub async fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let client = HttpClient::with_user_agent(
            Duration::from_secs(settings.request_timeout),
            Some(&settings.user_agent),
        )?;

        if settings.api_key.is_empty() {
            warn!("No API key configured; documents API requests will be rejected");
        }

        let documents = RegulationsGovClient::new(
            client.clone(),
            settings.api_base_url.clone(),
            settings.api_key.clone(),
        );
        let facilities = FrsClient::new(client, settings.facility_api_url.clone());

        let catalog = match &settings.catalog_path {
            Some(path) => RegulationCatalog::load(path).await?,
            None => {
                warn!("No regulation catalog configured; programs and regulations will be empty");
                RegulationCatalog::default()
            }
        };

        Ok(Self::new(Arc::new(documents), Arc::new(facilities), Arc::new(catalog))
            .with_max_concurrent_lookups(settings.max_concurrent_lookups))
    }
}
