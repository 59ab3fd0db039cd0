//! Configuration loader
//!
//! Loads application configuration from environment variables (a local
//! `.env` file is honored when present).
//!
//! ## Environment Variables
//! - `APP_BASE_URL`: externally visible origin, e.g. `https://rainpick.example.com`
//! - `RAINDROP_CLIENT_ID`: OAuth client identifier
//! - `RAINDROP_CLIENT_SECRET`: OAuth client secret
//! - `RAINPICK_PORT`: listen port (default 3000)
//!
//! The OAuth values and base URL are optional at load time: handlers that
//! need them answer 500 when they are missing, matching the rest of the
//! error taxonomy instead of refusing to boot.

use std::env;

use rainpick_domain::constants::{RAINDROP_API_BASE, RAINDROP_OAUTH_BASE};
use tracing::{debug, info, warn};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Externally visible origin, if configured (trailing `/` stripped)
    pub app_base_url: Option<String>,
    /// OAuth client identifier
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// Listen port
    pub port: u16,
    /// Raindrop REST base (overridable for tests)
    pub api_base: String,
    /// Raindrop OAuth base (overridable for tests)
    pub oauth_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_base_url: None,
            client_id: None,
            client_secret: None,
            port: 3000,
            api_base: RAINDROP_API_BASE.to_string(),
            oauth_base: RAINDROP_OAUTH_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Self {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let app_base_url = optional("APP_BASE_URL").map(|v| v.trim_end_matches('/').to_string());
        let client_id = optional("RAINDROP_CLIENT_ID");
        let client_secret = optional("RAINDROP_CLIENT_SECRET");

        let port = match optional("RAINPICK_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Invalid RAINPICK_PORT value: {e}, using default 3000");
                3000
            }),
            None => 3000,
        };

        info!(
            base_url_set = app_base_url.is_some(),
            client_id_set = client_id.is_some(),
            port,
            "Configuration loaded from environment"
        );

        Self { app_base_url, client_id, client_secret, port, ..Self::default() }
    }
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            debug!("Environment variable {key} not set");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_raindrop() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.raindrop.io/rest/v1");
        assert_eq!(config.oauth_base, "https://raindrop.io");
        assert_eq!(config.port, 3000);
        assert!(config.app_base_url.is_none());
    }
}
