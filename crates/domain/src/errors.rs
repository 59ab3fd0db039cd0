//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rainpick
///
/// The taxonomy maps directly onto the HTTP surface: `Config` → 500,
/// `Auth` → 401, `InvalidInput` → 400, `Upstream`/`Network` → 502.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RainpickError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    InvalidInput(String),

    /// Remote service returned a non-success status; carries the status,
    /// status text and best-effort body verbatim (never retried).
    #[error("Raindrop API error {status} {status_text}{}", body_suffix(.body))]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// Result type alias for Rainpick operations
pub type Result<T> = std::result::Result<T, RainpickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_includes_status_and_body() {
        let err = RainpickError::Upstream {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: "down for maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Raindrop API error 503 Service Unavailable: down for maintenance"
        );
    }

    #[test]
    fn upstream_error_omits_empty_body() {
        let err = RainpickError::Upstream {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Raindrop API error 500 Internal Server Error");
    }

    #[test]
    fn auth_error_is_bare_message() {
        let err = RainpickError::Auth("Not authenticated".to_string());
        assert_eq!(err.to_string(), "Not authenticated");
    }
}
