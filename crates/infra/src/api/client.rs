//! Raindrop REST API client
//!
//! Issues bearer-authenticated HTTPS calls against the Raindrop REST base
//! and normalizes failures into `RainpickError`. No response caching and no
//! retries; upstream failures surface verbatim with status and body text.

use std::time::Duration;

use rainpick_domain::{
    Collection, Item, ItemEnvelope, ItemsEnvelope, RainpickError, Result, ResultEnvelope,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// HTTP client for the Raindrop REST API
#[derive(Debug, Clone)]
pub struct RaindropClient {
    http: Client,
    base_url: String,
}

impl RaindropClient {
    /// Create a client against the given REST base URL
    /// (e.g. `https://api.raindrop.io/rest/v1`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, base_url: base_url.into() }
    }

    /// Issue a request to `{base}{path}` with the bearer token attached and
    /// decode the JSON body.
    ///
    /// # Errors
    /// `RainpickError::Upstream` on a non-success status (body captured
    /// best-effort), `RainpickError::Network` on transport or decode
    /// failures.
    #[instrument(skip(self, token), fields(path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Raindrop request");

        let response = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| RainpickError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RainpickError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RainpickError::Network(format!("Failed to parse response: {e}")))
    }

    /// List the user's collections.
    pub async fn collections(&self, token: &str) -> Result<Vec<Collection>> {
        let envelope: ItemsEnvelope<Collection> =
            self.request(Method::GET, "/collections", token).await?;
        Ok(envelope.items)
    }

    /// Fetch one collection's metadata.
    pub async fn collection(&self, id: i64, token: &str) -> Result<Collection> {
        let envelope: ItemEnvelope<Collection> =
            self.request(Method::GET, &format!("/collection/{id}"), token).await?;
        Ok(envelope.item)
    }

    /// Fetch one page of bookmarks from a collection.
    pub async fn raindrops(
        &self,
        collection_id: i64,
        page: i64,
        per_page: i64,
        token: &str,
    ) -> Result<Vec<Item>> {
        let path = format!("/raindrops/{collection_id}?perpage={per_page}&page={page}");
        let envelope: ItemsEnvelope<Item> = self.request(Method::GET, &path, token).await?;
        Ok(envelope.items)
    }

    /// Delete one bookmark; returns the remote's result flag.
    pub async fn delete_raindrop(&self, id: i64, token: &str) -> Result<bool> {
        let envelope: ResultEnvelope =
            self.request(Method::DELETE, &format!("/raindrop/{id}"), token).await?;
        Ok(envelope.result)
    }
}
