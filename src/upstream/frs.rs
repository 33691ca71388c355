//! EPA Facility Registry Service adapter.

use async_trait::async_trait;
use tracing::debug;

use super::FacilityApi;
use crate::http_client::{FetchError, HttpClient};
use crate::models::{Facility, FacilityQuery, FacilityResponse};

/// FRS REST facility lookup endpoint.
pub const DEFAULT_FACILITY_API_URL: &str =
    "https://ofmpub.epa.gov/enviro/frs_rest_services.get_facilities";

/// Client for the facility lookup API.
#[derive(Clone)]
pub struct FrsClient {
    client: HttpClient,
    endpoint: String,
}

impl FrsClient {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn facilities_url(&self, query: &FacilityQuery) -> Result<String, FetchError> {
        query
            .to_params()
            .push("output", "JSON")
            .apply_to(&self.endpoint)
            .map(String::from)
            .map_err(|e| FetchError::InvalidRequest(format!("Bad URL {}: {}", self.endpoint, e)))
    }
}

#[async_trait]
impl FacilityApi for FrsClient {
    async fn get_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, FetchError> {
        let response: FacilityResponse = self.client.get_json(&self.facilities_url(query)?).await?;
        let facilities = response.into_facilities();
        debug!("FRS returned {} facilities", facilities.len());
        Ok(facilities)
    }
}
