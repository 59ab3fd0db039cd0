//! Raindrop data types
//!
//! Wire-format models for the Raindrop REST API and the OAuth token
//! exchange. Field names follow Raindrop's JSON (`_id`, `lastUpdate`), so
//! these types serialize back out unchanged when proxied to the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named folder of bookmarks in the remote service.
///
/// Fetched fresh per session load and never mutated locally. `count` is an
/// advisory size hint the random selector uses to avoid a metadata lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Vec<String>>,
}

/// A single saved bookmark within a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(rename = "lastUpdate", skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// Raindrop list envelope: `{ result, items }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsEnvelope<T> {
    #[serde(default)]
    pub result: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Raindrop single-object envelope: `{ result, item }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<T> {
    #[serde(default)]
    pub result: bool,
    pub item: T,
}

/// Raindrop delete response: `{ result }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: bool,
}

/// Raw token-endpoint response body.
///
/// Raindrop answers either the RFC 6749 success fields or `{ "error": .. }`;
/// everything is optional so an unparsable mix still deserializes and the
/// caller can decide.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub error: Option<String>,
}

/// OAuth access and refresh credential pair with advisory expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    /// Optional because some providers don't issue refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Access token lifetime in seconds, as stated by the provider
    pub expires_in: i64,
    /// Absolute expiration timestamp (UTC), calculated at creation time.
    /// Advisory only; no refresh flow consumes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    /// Create a new `TokenSet` with calculated expiration time
    #[must_use]
    pub fn new(access_token: String, refresh_token: Option<String>, expires_in: i64) -> Self {
        let expires_at = if expires_in > 0 {
            Some(Utc::now() + chrono::Duration::seconds(expires_in))
        } else {
            None
        };

        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_deserializes_raindrop_wire_names() {
        let json = r#"{"_id": 5, "title": "Reading", "count": 120, "cover": ["https://x/y.png"]}"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.id, 5);
        assert_eq!(collection.title, "Reading");
        assert_eq!(collection.count, Some(120));
    }

    #[test]
    fn item_round_trips_last_update_rename() {
        let item = Item {
            id: 42,
            title: Some("A post".to_string()),
            link: "https://example.com/post".to_string(),
            excerpt: None,
            note: None,
            cover: None,
            created: None,
            last_update: Some("2024-01-01T00:00:00Z".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], 42);
        assert_eq!(json["lastUpdate"], "2024-01-01T00:00:00Z");
        assert!(json.get("excerpt").is_none());
    }

    #[test]
    fn items_envelope_tolerates_missing_items() {
        let envelope: ItemsEnvelope<Item> = serde_json::from_str(r#"{"result": true}"#).unwrap();
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn token_response_accepts_provider_error_shape() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"error": "bad_authorization_code"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("bad_authorization_code"));
        assert!(response.access_token.is_none());
    }

    #[test]
    fn token_set_computes_expiry_for_positive_lifetime() {
        let set = TokenSet::new("tok".to_string(), Some("ref".to_string()), 3600);
        assert!(set.expires_at.is_some());
        assert_eq!(set.token_type, "Bearer");

        let no_expiry = TokenSet::new("tok".to_string(), None, 0);
        assert!(no_expiry.expires_at.is_none());
    }
}
