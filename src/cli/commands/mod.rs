//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod details;
mod extract;
mod programs;
mod search;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use regwatch::config::{load_settings, Settings};

#[derive(Parser)]
#[command(name = "regwatch")]
#[command(about = "EPA regulatory document details and search")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Show a document with its programs, regulations, facilities and narrative sections
    Details {
        /// Document ID (e.g. EPA-HQ-OAR-2010-0505-0001)
        document_id: String,
        /// ZIP code for facility lookup
        #[arg(long)]
        zip: Option<String>,
        /// State abbreviation for facility lookup
        #[arg(long = "state")]
        state_abbr: Option<String>,
        /// City for facility lookup
        #[arg(long)]
        city: Option<String>,
        /// Street address for facility lookup
        #[arg(long)]
        street: Option<String>,
        /// Program name for facility lookup
        #[arg(long)]
        program: Option<String>,
    },

    /// Search rulemaking documents
    Search {
        /// Substance keyword
        #[arg(long)]
        substance: Option<String>,
        /// NAICS code
        #[arg(long)]
        naics: Option<String>,
        /// Program name; resolved to CFR parts through the regulation catalog
        #[arg(long)]
        program: Option<String>,
        /// Result offset
        #[arg(long, default_value = "0")]
        offset: u32,
        /// Results per page
        #[arg(short, long, default_value = "25")]
        limit: u32,
    },

    /// Search programs in the regulation catalog
    Programs {
        /// Program name or acronym (substring, case-insensitive)
        name: String,
        #[arg(long, default_value = "0")]
        offset: usize,
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Extract narrative sections from a local text or HTML rendering
    Extract {
        /// File to read
        path: PathBuf,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match cli.command {
        Commands::Details {
            document_id,
            zip,
            state_abbr,
            city,
            street,
            program,
        } => {
            let settings = settings(cli.config.as_deref()).await?;
            let request = regwatch::DetailsRequest {
                document_id,
                zip,
                state_abbr,
                city,
                street,
                program,
            };
            details::cmd_details(&settings, &request, pretty).await
        }
        Commands::Search {
            substance,
            naics,
            program,
            offset,
            limit,
        } => {
            let settings = settings(cli.config.as_deref()).await?;
            let criteria = regwatch::models::SearchCriteria {
                substance,
                naics,
                program,
                ..regwatch::models::SearchCriteria::new(offset, limit)
            };
            search::cmd_search(&settings, &criteria, pretty).await
        }
        Commands::Programs {
            name,
            offset,
            limit,
        } => {
            let settings = settings(cli.config.as_deref()).await?;
            programs::cmd_programs(&settings, &name, offset, limit, pretty).await
        }
        Commands::Extract { path } => extract::cmd_extract(&path, pretty).await,
    }
}

async fn settings(config: Option<&std::path::Path>) -> anyhow::Result<Settings> {
    load_settings(config)
        .await
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")
}
