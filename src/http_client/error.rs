//! Upstream failure translation.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Error type for every outbound call made by the services.
///
/// `Upstream` is raised when a failing response carries a structured
/// `{status, message}` body. Everything else is a transport-class failure and
/// is passed through as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Regulation catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl FetchError {
    /// Whether this error came from a structured upstream error body.
    pub fn is_upstream(&self) -> bool {
        matches!(self, FetchError::Upstream { .. })
    }

    /// HTTP-style status code, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } | FetchError::Status { status, .. } => {
                Some(*status)
            }
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Translate a non-success response into a [`FetchError`].
///
/// Bodies shaped like `{"status": 404, "message": "..."}` become
/// `FetchError::Upstream`; the status reported in the body wins over the
/// transport status. Anything else is reported as a plain status failure.
pub fn translate_failure(status: StatusCode, url: &str, body: &str) -> FetchError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => FetchError::Upstream {
            status: parsed.status,
            message: parsed.message,
        },
        Err(_) => FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_becomes_upstream_error() {
        let err = translate_failure(
            StatusCode::NOT_FOUND,
            "https://api.example.gov/document.json",
            r#"{"status": 404, "message": "The document ID could not be found."}"#,
        );
        match err {
            FetchError::Upstream { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "The document ID could not be found.");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn body_status_wins_over_transport_status() {
        let err = translate_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "https://api.example.gov/",
            r#"{"status": 429, "message": "slow down", "extra": true}"#,
        );
        assert_eq!(err.status(), Some(429));
        assert!(err.is_upstream());
    }

    #[test]
    fn missing_message_is_transport_failure() {
        let err = translate_failure(
            StatusCode::BAD_GATEWAY,
            "https://api.example.gov/",
            r#"{"status": 502}"#,
        );
        assert!(!err.is_upstream());
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn non_json_body_is_transport_failure() {
        let err = translate_failure(
            StatusCode::SERVICE_UNAVAILABLE,
            "https://api.example.gov/",
            "<html>Service Unavailable</html>",
        );
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn string_status_is_not_structured() {
        let err = translate_failure(
            StatusCode::BAD_REQUEST,
            "https://api.example.gov/",
            r#"{"status": "bad", "message": "nope"}"#,
        );
        assert!(!err.is_upstream());
    }
}
