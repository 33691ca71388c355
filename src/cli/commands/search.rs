//! Search command.

use anyhow::Context;

use crate::cli::output::print_json;
use regwatch::config::Settings;
use regwatch::models::SearchCriteria;
use regwatch::RegulatoryService;

/// Run a document search and print the enriched page.
pub async fn cmd_search(
    settings: &Settings,
    criteria: &SearchCriteria,
    pretty: bool,
) -> anyhow::Result<()> {
    let service = RegulatoryService::from_settings(settings)
        .await
        .context("Failed to initialize services")?;

    let result = service.search(criteria).await.context("Search failed")?;

    print_json(&result, pretty)
}
