//! Shared HTTP client and the upstream error boundary.
//!
//! Every outbound call made by the services goes through [`HttpClient`], which
//! is the only place where upstream failures are inspected and translated
//! into [`FetchError`].

mod error;
mod query;

pub use error::{translate_failure, FetchError};
pub use query::{redact_api_key, QueryParams};

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const USER_AGENT: &str = "regwatch/0.1 (EPA regulatory research)";

/// Resolve the user agent from a config value, falling back to the default.
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        Some(custom) if !custom.trim().is_empty() => custom.to_string(),
        _ => USER_AGENT.to_string(),
    }
}

/// HTTP client with request logging and upstream error translation.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the default user agent.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Self::with_user_agent(timeout, None)
    }

    /// Create a new HTTP client with a custom user agent.
    pub fn with_user_agent(
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, FetchError> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL and return the body text of a successful response.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let loggable = redact_api_key(url);
        debug!("GET {}", loggable);

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            "GET {} -> {} in {}ms ({} bytes)",
            loggable,
            status.as_u16(),
            start.elapsed().as_millis(),
            body.len()
        );

        if !status.is_success() {
            let err = translate_failure(status, &loggable, &body);
            warn!("Request failed: {}", err);
            return Err(err);
        }

        Ok(body)
    }

    /// GET a URL and decode a successful JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent() {
        assert_eq!(resolve_user_agent(None), USER_AGENT);
        assert_eq!(resolve_user_agent(Some("  ")), USER_AGENT);
    }

    #[test]
    fn custom_user_agent() {
        assert_eq!(resolve_user_agent(Some("custom/1.0")), "custom/1.0");
    }

    #[test]
    fn client_builds() {
        assert!(HttpClient::new(Duration::from_secs(5)).is_ok());
    }
}
