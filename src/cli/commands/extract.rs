//! Extract command.

use std::path::Path;

use anyhow::Context;

use crate::cli::output::print_json;
use regwatch::extract::{extract_sections, narrative_text};

/// Print the narrative sections found in a local rendering.
pub async fn cmd_extract(path: &Path, pretty: bool) -> anyhow::Result<()> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    print_json(&extract_sections(&narrative_text(&body)), pretty)
}
