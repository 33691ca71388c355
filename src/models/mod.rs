//! Data models for regwatch.

mod document;
mod facility;
mod regulation;
mod search;

pub use document::{DocumentDetails, DocumentPage, DocumentSummary};
pub use facility::{Facility, FacilityQuery, FacilityResponse, FacilityResults};
pub use regulation::{Program, Regulation};
pub use search::{
    DocumentQuery, SearchCriteria, SearchResult, SEARCH_AGENCY, SEARCH_COMMENT_PERIOD,
    SEARCH_DOCKET_TYPE, SEARCH_DOCUMENT_TYPE,
};
