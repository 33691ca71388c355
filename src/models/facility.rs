//! Facility lookup models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http_client::QueryParams;

/// Facility record as returned by the FRS API. Not interpreted here.
pub type Facility = Value;

/// Filters accepted by the facility lookup API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

impl FacilityQuery {
    pub fn new(
        zip: Option<&str>,
        state_abbr: Option<&str>,
        city: Option<&str>,
        street: Option<&str>,
        program: Option<&str>,
    ) -> Self {
        Self {
            zip_code: non_empty(zip),
            city_name: non_empty(city),
            street_address: non_empty(street),
            state_abbr: non_empty(state_abbr),
            program_name: non_empty(program),
        }
    }

    /// Facilities are only looked up when a location narrower than a state
    /// was given.
    pub fn has_location(&self) -> bool {
        self.zip_code.is_some() || self.city_name.is_some() || self.street_address.is_some()
    }

    /// Parameter table for the FRS endpoint.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("zip_code", self.zip_code.as_deref())
            .push_opt("city_name", self.city_name.as_deref())
            .push_opt("street_address", self.street_address.as_deref())
            .push_opt("state_abbr", self.state_abbr.as_deref())
            .push_opt("program_name", self.program_name.as_deref())
    }
}

/// Raw FRS response envelope: `{ "Results": { "FRSFacility": ... } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityResponse {
    #[serde(rename = "Results", default)]
    pub results: Option<FacilityResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityResults {
    #[serde(rename = "FRSFacility", default)]
    pub frs_facility: Option<Value>,
}

impl FacilityResponse {
    /// Unwrap `Results.FRSFacility` into a list.
    ///
    /// FRS returns a bare object when there is exactly one match and omits
    /// the key when there are none.
    pub fn into_facilities(self) -> Vec<Facility> {
        match self.results.and_then(|r| r.frs_facility) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(single) => vec![single],
        }
    }
}
