//! File-backed regulation catalog.
//!
//! Programs and regulations keyed by CFR part, loaded from a JSON, YAML or
//! TOML file. This is the shipping implementation of
//! [`RegulationLookup`](crate::upstream::RegulationLookup).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::http_client::FetchError;
use crate::models::{Program, Regulation};
use crate::upstream::RegulationLookup;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Programs and regulations known to the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulationCatalog {
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub regulations: Vec<Regulation>,
}

impl RegulationCatalog {
    pub fn new(programs: Vec<Program>, regulations: Vec<Regulation>) -> Self {
        Self {
            programs,
            regulations,
        }
    }

    /// Load a catalog file. The format is chosen by extension, JSON by default.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::parse(&contents, path)?;
        debug!(
            "Loaded catalog {} ({} programs, {} regulations)",
            path.display(),
            catalog.programs.len(),
            catalog.regulations.len()
        );
        Ok(catalog)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, CatalogError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |message: String| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err(e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string())),
            _ => serde_json::from_str(contents).map_err(|e| parse_err(e.to_string())),
        }
    }

    /// Programs with at least one regulation in `parts`, in catalog order.
    pub fn programs_for(&self, parts: &[u32]) -> Vec<Program> {
        self.programs
            .iter()
            .filter(|p| p.covers_any(parts))
            .cloned()
            .collect()
    }

    /// Regulations whose CFR part is in `parts`, in catalog order.
    pub fn regulations_for(&self, parts: &[u32]) -> Vec<Regulation> {
        self.regulations
            .iter()
            .filter(|r| r.matches_any(parts))
            .cloned()
            .collect()
    }

    /// Case-insensitive name or acronym match, then an offset/limit window.
    pub fn find_programs(&self, name: &str, offset: usize, limit: usize) -> Vec<Program> {
        let needle = name.trim().to_lowercase();
        self.programs
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.acronym
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&needle))
            })
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RegulationLookup for RegulationCatalog {
    async fn programs_by_cfr(&self, parts: &[u32]) -> Result<Vec<Program>, FetchError> {
        Ok(self.programs_for(parts))
    }

    async fn regulations_by_cfr(&self, parts: &[u32]) -> Result<Vec<Regulation>, FetchError> {
        Ok(self.regulations_for(parts))
    }

    async fn search_programs(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Program>, FetchError> {
        Ok(self.find_programs(name, offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"{
        "programs": [
            {"name": "New Source Performance Standards", "acronym": "NSPS",
             "regulations": [{"cfr": "60"}]},
            {"name": "National Emission Standards for Hazardous Air Pollutants",
             "acronym": "NESHAP",
             "regulations": [{"cfr": 61}, {"cfr": "63"}]},
            {"name": "Toxics Release Inventory", "acronym": "TRI",
             "regulations": [{"cfr": null}]}
        ],
        "regulations": [
            {"cfr": "60", "title": "Standards of Performance for New Stationary Sources"},
            {"cfr": "61", "title": "NESHAP"},
            {"cfr": "63", "title": "NESHAP for Source Categories"}
        ]
    }"#;

    fn catalog() -> RegulationCatalog {
        serde_json::from_str(CATALOG_JSON).unwrap()
    }

    #[test]
    fn programs_by_part() {
        let names: Vec<String> = catalog()
            .programs_for(&[61])
            .into_iter()
            .map(|p| p.acronym.unwrap())
            .collect();
        assert_eq!(names, vec!["NESHAP"]);
        assert!(catalog().programs_for(&[]).is_empty());
    }

    #[test]
    fn regulations_by_part() {
        let regs = catalog().regulations_for(&[63, 60]);
        let cfrs: Vec<&str> = regs.iter().filter_map(|r| r.cfr()).collect();
        assert_eq!(cfrs, vec!["60", "63"]);
    }

    #[test]
    fn search_matches_name_or_acronym() {
        let c = catalog();
        assert_eq!(c.find_programs("hazardous", 0, 10000).len(), 1);
        assert_eq!(c.find_programs("tri", 0, 10000).len(), 1);
        assert_eq!(c.find_programs("standards", 0, 10000).len(), 2);
        assert_eq!(c.find_programs("standards", 1, 10000).len(), 1);
        assert_eq!(c.find_programs("standards", 0, 1).len(), 1);
        assert!(c.find_programs("water", 0, 10000).is_empty());
    }

    #[tokio::test]
    async fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let loaded = RegulationCatalog::load(file.path()).await.unwrap();
        assert_eq!(loaded, catalog());
    }

    #[tokio::test]
    async fn loads_yaml_file() {
        let yaml = "programs:\n  - name: Risk Management Program\n    acronym: RMP\n    regulations:\n      - cfr: 68\nregulations:\n  - cfr: 68\n    title: Chemical Accident Prevention\n";
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = RegulationCatalog::load(file.path()).await.unwrap();
        assert_eq!(loaded.programs_for(&[68]).len(), 1);
        assert_eq!(loaded.regulations[0].cfr(), Some("68"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = RegulationCatalog::load(Path::new("/nonexistent/catalog.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = RegulationCatalog::parse("{not json", Path::new("c.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
