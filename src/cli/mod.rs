//! Command-line interface for regwatch.

mod commands;
mod output;

pub use commands::{is_verbose, run};
