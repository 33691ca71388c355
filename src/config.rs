//! Configuration management for regwatch using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http_client::USER_AGENT;
use crate::services::DEFAULT_MAX_CONCURRENT_LOOKUPS;
use crate::upstream::{DEFAULT_API_BASE_URL, DEFAULT_FACILITY_API_URL};

/// Environment variable overriding the documents API key.
pub const ENV_API_KEY: &str = "REGWATCH_API_KEY";
/// Environment variable overriding the documents API base URL.
pub const ENV_API_BASE_URL: &str = "REGWATCH_API_BASE_URL";
/// Environment variable overriding the facility API endpoint.
pub const ENV_FACILITY_API_URL: &str = "REGWATCH_FACILITY_API_URL";
/// Environment variable overriding the regulation catalog path.
pub const ENV_CATALOG: &str = "REGWATCH_CATALOG";

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Documents API base URL.
    pub api_base_url: String,
    /// Documents API key.
    pub api_key: String,
    /// Facility lookup endpoint.
    pub facility_api_url: String,
    /// Regulation catalog file (JSON, YAML or TOML).
    pub catalog_path: Option<PathBuf>,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Maximum concurrent detail lookups while enriching search results.
    pub max_concurrent_lookups: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            facility_api_url: DEFAULT_FACILITY_API_URL.to_string(),
            catalog_path: None,
            user_agent: USER_AGENT.to_string(),
            request_timeout: 30,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_api_url: Option<String>,
    /// Catalog path, relative to the config file unless absolute or `~`.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "catalog")]
    pub catalog_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_lookups: Option<usize>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers regwatch config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("regwatch").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            debug!("Ignoring unreadable config {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e)),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref url) = self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(ref key) = self.api_key {
            settings.api_key = key.clone();
        }
        if let Some(ref url) = self.facility_api_url {
            settings.facility_api_url = url.clone();
        }
        if let Some(ref catalog) = self.catalog_path {
            settings.catalog_path = Some(self.resolve_path(catalog, base_dir));
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(max) = self.max_concurrent_lookups {
            settings.max_concurrent_lookups = max.max(1);
        }
    }
}

/// Apply `REGWATCH_*` environment overrides from `lookup`.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = non_empty(ENV_API_KEY) {
        settings.api_key = key;
    }
    if let Some(url) = non_empty(ENV_API_BASE_URL) {
        settings.api_base_url = url;
    }
    if let Some(url) = non_empty(ENV_FACILITY_API_URL) {
        settings.facility_api_url = url;
    }
    if let Some(path) = non_empty(ENV_CATALOG) {
        settings.catalog_path = Some(PathBuf::from(shellexpand::tilde(&path).as_ref()));
    }
}

/// Load settings from an explicit config file, or discover one.
///
/// Precedence: environment, then config file, then defaults.
pub async fn load_settings(config_path: Option<&Path>) -> Result<Settings, String> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let base_dir = config
        .base_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    debug!(
        "Settings: api_base_url={}, facility_api_url={}, catalog={:?}",
        settings.api_base_url, settings.facility_api_url, settings.catalog_path
    );
    Ok(settings)
}
