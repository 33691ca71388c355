//! Programs command.

use anyhow::{bail, Context};

use crate::cli::output::print_json;
use regwatch::catalog::RegulationCatalog;
use regwatch::config::Settings;

/// Search the configured regulation catalog by program name.
pub async fn cmd_programs(
    settings: &Settings,
    name: &str,
    offset: usize,
    limit: usize,
    pretty: bool,
) -> anyhow::Result<()> {
    let Some(path) = settings.catalog_path.as_deref() else {
        bail!("No regulation catalog configured (set catalog_path or REGWATCH_CATALOG)");
    };

    let catalog = RegulationCatalog::load(path)
        .await
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

    print_json(&catalog.find_programs(name, offset, limit), pretty)
}
