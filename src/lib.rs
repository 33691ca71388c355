//! regwatch - EPA regulatory document details and search.
//!
//! Combines the regulations.gov documents API, the EPA Facility Registry
//! Service and a CFR program catalog into two operations: details for one
//! rulemaking document, and keyword search over rulemaking documents.

pub mod catalog;
pub mod config;
pub mod extract;
pub mod http_client;
pub mod models;
pub mod services;
pub mod upstream;

pub use http_client::FetchError;
pub use services::{DetailsRequest, RegulatoryService};
