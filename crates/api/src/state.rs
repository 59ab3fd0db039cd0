//! Shared application state

use rainpick_infra::{Config, RaindropClient, RaindropOAuth};

/// Per-process state shared by all handlers.
///
/// Nothing here is mutable: handlers are independent and stateless aside
/// from the cookies they read and write.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub raindrop: RaindropClient,
    pub oauth: RaindropOAuth,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let raindrop = RaindropClient::new(config.api_base.clone());
        let oauth = RaindropOAuth::new(config.oauth_base.clone());

        Self { config, raindrop, oauth }
    }
}
