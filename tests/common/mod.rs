//! In-memory upstream implementations for service tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use regwatch::catalog::RegulationCatalog;
use regwatch::models::{
    DocumentDetails, DocumentPage, DocumentQuery, DocumentSummary, Facility, FacilityQuery,
    Program, Regulation,
};
use regwatch::upstream::{DocumentsApi, FacilityApi, RegulationLookup};
use regwatch::{FetchError, RegulatoryService};

/// Documents API backed by maps, recording every call.
#[derive(Default)]
pub struct FakeDocuments {
    pub documents: HashMap<String, DocumentDetails>,
    pub renderings: HashMap<String, String>,
    pub page: Option<DocumentPage>,
    pub failing_ids: HashSet<String>,
    pub document_calls: Mutex<Vec<String>>,
    pub searches: Mutex<Vec<DocumentQuery>>,
    pub rendering_calls: Mutex<Vec<String>>,
}

impl FakeDocuments {
    pub fn with_document(mut self, doc: DocumentDetails) -> Self {
        self.documents.insert(doc.document_id.clone(), doc);
        self
    }

    pub fn with_rendering(mut self, link: &str, body: &str) -> Self {
        self.renderings.insert(link.to_string(), body.to_string());
        self
    }

    pub fn with_page(mut self, page: DocumentPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn failing(mut self, document_id: &str) -> Self {
        self.failing_ids.insert(document_id.to_string());
        self
    }

    pub fn document_calls(&self) -> Vec<String> {
        self.document_calls.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<DocumentQuery> {
        self.searches.lock().unwrap().clone()
    }

    pub fn rendering_calls(&self) -> Vec<String> {
        self.rendering_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentsApi for FakeDocuments {
    async fn get_document(&self, document_id: &str) -> Result<DocumentDetails, FetchError> {
        self.document_calls
            .lock()
            .unwrap()
            .push(document_id.to_string());

        if self.failing_ids.contains(document_id) {
            return Err(FetchError::Upstream {
                status: 500,
                message: "Internal error".to_string(),
            });
        }

        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| FetchError::Upstream {
                status: 404,
                message: format!("The document ID {} could not be found.", document_id),
            })
    }

    async fn search_documents(&self, query: &DocumentQuery) -> Result<DocumentPage, FetchError> {
        self.searches.lock().unwrap().push(query.clone());
        Ok(self.page.clone().unwrap_or_default())
    }

    async fn get_rendering(&self, link: &str) -> Result<String, FetchError> {
        self.rendering_calls.lock().unwrap().push(link.to_string());
        self.renderings
            .get(link)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: link.to_string(),
            })
    }
}

/// Facility API returning a fixed list.
#[derive(Default)]
pub struct FakeFacilities {
    pub facilities: Vec<Facility>,
    pub calls: Mutex<Vec<FacilityQuery>>,
}

impl FakeFacilities {
    pub fn returning(facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<FacilityQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FacilityApi for FakeFacilities {
    async fn get_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, FetchError> {
        self.calls.lock().unwrap().push(query.clone());
        Ok(self.facilities.clone())
    }
}

/// Catalog wrapper that records program searches.
pub struct RecordingLookup {
    pub catalog: RegulationCatalog,
    pub program_searches: Mutex<Vec<(String, usize, usize)>>,
}

impl RecordingLookup {
    pub fn new(catalog: RegulationCatalog) -> Self {
        Self {
            catalog,
            program_searches: Mutex::new(Vec::new()),
        }
    }

    pub fn program_searches(&self) -> Vec<(String, usize, usize)> {
        self.program_searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegulationLookup for RecordingLookup {
    async fn programs_by_cfr(&self, parts: &[u32]) -> Result<Vec<Program>, FetchError> {
        self.catalog.programs_by_cfr(parts).await
    }

    async fn regulations_by_cfr(&self, parts: &[u32]) -> Result<Vec<Regulation>, FetchError> {
        self.catalog.regulations_by_cfr(parts).await
    }

    async fn search_programs(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Program>, FetchError> {
        self.program_searches
            .lock()
            .unwrap()
            .push((name.to_string(), offset, limit));
        self.catalog.search_programs(name, offset, limit).await
    }
}

/// Small catalog: NSPS (part 60), NESHAP (parts 61, 63), and a program with
/// no CFR references.
pub fn catalog() -> RegulationCatalog {
    serde_json::from_value(json!({
        "programs": [
            {"name": "New Source Performance Standards", "acronym": "NSPS",
             "regulations": [{"cfr": "60"}]},
            {"name": "National Emission Standards for Hazardous Air Pollutants",
             "acronym": "NESHAP",
             "regulations": [{"cfr": 61}, {"cfr": "63"}]},
            {"name": "Environmental Justice", "acronym": "EJ",
             "regulations": [{"cfr": null}, {"cfr": ""}]}
        ],
        "regulations": [
            {"cfr": "60", "title": "Standards of Performance for New Stationary Sources"},
            {"cfr": "61", "title": "National Emission Standards for Hazardous Air Pollutants"},
            {"cfr": "63", "title": "NESHAP for Source Categories"}
        ]
    }))
    .unwrap()
}

pub fn document(document_id: &str, cfr_part: Option<&str>, file_formats: &[&str]) -> DocumentDetails {
    let mut doc = DocumentDetails::new(document_id);
    doc.cfr_part = cfr_part.map(str::to_string);
    doc.file_formats = file_formats.iter().map(|s| s.to_string()).collect();
    doc.extra
        .insert("title".to_string(), json!(format!("Title of {}", document_id)));
    doc
}

pub fn summary(document_id: &str) -> DocumentSummary {
    DocumentSummary::new(document_id)
}

pub struct Harness {
    pub service: RegulatoryService,
    pub documents: Arc<FakeDocuments>,
    pub facilities: Arc<FakeFacilities>,
    pub lookup: Arc<RecordingLookup>,
}

pub fn harness(documents: FakeDocuments, facilities: FakeFacilities) -> Harness {
    let documents = Arc::new(documents);
    let facilities = Arc::new(facilities);
    let lookup = Arc::new(RecordingLookup::new(catalog()));
    let service = RegulatoryService::new(documents.clone(), facilities.clone(), lookup.clone());

    Harness {
        service,
        documents,
        facilities,
        lookup,
    }
}
