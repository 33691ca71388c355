//! Keyword search over rulemaking documents.

use futures::future::try_join_all;
use tracing::{debug, info};

use super::RegulatoryService;
use crate::http_client::FetchError;
use crate::models::{DocumentQuery, DocumentSummary, SearchCriteria, SearchResult};

/// Page window used when resolving a program name.
pub const PROGRAM_SEARCH_LIMIT: usize = 10000;

impl RegulatoryService {
    /// Search documents by substance, NAICS code and program.
    ///
    /// A program filter is turned into its CFR numbers, which become search
    /// keywords. If the program resolves to no CFR numbers at all, the search
    /// is empty regardless of the other keywords.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult, FetchError> {
        let mut keywords: Vec<String> = [criteria.substance.as_deref(), criteria.naics.as_deref()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();

        if let Some(program) = criteria.program() {
            let cfrs = self.program_cfr_numbers(program).await?;
            if cfrs.is_empty() {
                info!("Program {:?} has no CFR references, nothing to search", program);
                return Ok(SearchResult::empty());
            }
            keywords.extend(cfrs);
        }

        let query = DocumentQuery::from_keywords(&keywords, criteria.offset, criteria.limit);
        let page = self.documents.search_documents(&query).await?;

        let Some(mut items) = page.documents else {
            debug!("Search response has no documents");
            return Ok(SearchResult::empty());
        };

        self.attach_cfr_parts(&mut items).await?;

        info!(
            "Search {:?} returned {} of {} documents",
            query.search,
            items.len(),
            page.total_num_records
        );

        Ok(SearchResult {
            items,
            total: page.total_num_records,
        })
    }

    /// CFR numbers of all programs matching `name`, in order.
    async fn program_cfr_numbers(&self, name: &str) -> Result<Vec<String>, FetchError> {
        let programs = self
            .lookup
            .search_programs(name, 0, PROGRAM_SEARCH_LIMIT)
            .await?;

        Ok(programs
            .iter()
            .flat_map(|p| p.cfr_numbers())
            .map(str::to_string)
            .collect())
    }

    /// Copy each item's CFR part from its detail record.
    ///
    /// Lookups run concurrently in batches of `max_concurrent_lookups`; the
    /// first failure aborts the search.
    async fn attach_cfr_parts(&self, items: &mut [DocumentSummary]) -> Result<(), FetchError> {
        for chunk in items.chunks_mut(self.max_concurrent_lookups) {
            let lookups = chunk
                .iter()
                .map(|item| self.documents.get_document(&item.document_id));
            let details = try_join_all(lookups).await?;

            for (item, detail) in chunk.iter_mut().zip(details) {
                item.cfr_part = detail.cfr_part;
            }
        }
        Ok(())
    }
}
