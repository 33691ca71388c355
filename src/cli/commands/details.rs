//! Details command.

use anyhow::Context;

use crate::cli::output::print_json;
use regwatch::config::Settings;
use regwatch::{DetailsRequest, RegulatoryService};

/// Fetch and print one document with its related records.
pub async fn cmd_details(
    settings: &Settings,
    request: &DetailsRequest,
    pretty: bool,
) -> anyhow::Result<()> {
    let service = RegulatoryService::from_settings(settings)
        .await
        .context("Failed to initialize services")?;

    let details = service
        .get_details(request)
        .await
        .with_context(|| format!("Failed to fetch details for {}", request.document_id))?;

    print_json(&details, pretty)
}
