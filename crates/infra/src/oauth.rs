//! OAuth code-exchange client for Raindrop
//!
//! Plain authorization-code flow: build the authorize URL, then exchange the
//! returned code server-side for an access/refresh pair. Raindrop takes the
//! exchange parameters as a JSON body rather than a form. There is no PKCE
//! and no refresh flow; expiry is advisory.

use rainpick_domain::constants::{OAUTH_AUTHORIZE_PATH, OAUTH_TOKEN_PATH};
use rainpick_domain::{RainpickError, Result, TokenResponse, TokenSet};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

const EXCHANGE_FAILED: &str = "token_exchange_failed";

#[derive(Serialize)]
struct ExchangeRequest<'a> {
    grant_type: &'static str,
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
}

/// Client for the Raindrop OAuth endpoints
#[derive(Debug, Clone)]
pub struct RaindropOAuth {
    http: Client,
    base_url: String,
}

impl RaindropOAuth {
    /// Create a client against the given OAuth base URL
    /// (e.g. `https://raindrop.io`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into() }
    }

    /// Authorization URL the user's browser is redirected to.
    #[must_use]
    pub fn authorize_url(&self, client_id: &str, redirect_uri: &str) -> String {
        format!(
            "{}{}?client_id={}&redirect_uri={}",
            self.base_url,
            OAUTH_AUTHORIZE_PATH,
            urlencoding::encode(client_id),
            urlencoding::encode(redirect_uri)
        )
    }

    /// Exchange an authorization code for tokens.
    ///
    /// # Errors
    /// `RainpickError::Auth` carrying the provider's `error` string when it
    /// reports one, or `token_exchange_failed` for a non-success status or
    /// an unparsable body; `RainpickError::Network` on transport failure.
    #[instrument(skip(self, client_secret, code))]
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        code: &str,
    ) -> Result<TokenSet> {
        let body = ExchangeRequest {
            grant_type: "authorization_code",
            code,
            client_id,
            client_secret,
            redirect_uri,
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, OAUTH_TOKEN_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| RainpickError::Network(e.to_string()))?;

        let status = response.status();
        let Ok(data) = response.json::<TokenResponse>().await else {
            warn!(status = status.as_u16(), "token endpoint returned unparsable body");
            return Err(RainpickError::Auth(EXCHANGE_FAILED.to_string()));
        };

        // A provider-reported error wins over the status code.
        if let Some(error) = data.error {
            warn!(error = %error, "token exchange rejected by provider");
            return Err(RainpickError::Auth(error));
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "token exchange failed");
            return Err(RainpickError::Auth(EXCHANGE_FAILED.to_string()));
        }

        let access_token = data
            .access_token
            .ok_or_else(|| RainpickError::Auth(EXCHANGE_FAILED.to_string()))?;

        debug!("token exchange succeeded");
        Ok(TokenSet::new(access_token, data.refresh_token, data.expires_in.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn authorize_url_encodes_redirect_target() {
        let oauth = RaindropOAuth::new("https://raindrop.io");
        let url = oauth.authorize_url("abc", "https://example.com/api/auth/callback");
        assert_eq!(
            url,
            "https://raindrop.io/oauth/authorize?client_id=abc&redirect_uri=https%3A%2F%2Fexample.com%2Fapi%2Fauth%2Fcallback"
        );
    }

    #[tokio::test]
    async fn exchange_posts_json_and_returns_token_set() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .and(body_partial_json(json!({
                "grant_type": "authorization_code",
                "code": "the-code",
                "client_id": "abc",
                "redirect_uri": "https://example.com/api/auth/callback"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "at-1",
                "refresh_token": "rt-1",
                "expires_in": 1209600,
                "token_type": "Bearer"
            })))
            .mount(&server)
            .await;

        let oauth = RaindropOAuth::new(server.uri());
        let tokens = oauth
            .exchange_code("abc", "shh", "https://example.com/api/auth/callback", "the-code")
            .await
            .unwrap();

        assert_eq!(tokens.access_token, "at-1");
        assert_eq!(tokens.refresh_token.as_deref(), Some("rt-1"));
        assert_eq!(tokens.expires_in, 1209600);
    }

    #[tokio::test]
    async fn provider_error_field_surfaces_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "bad_authorization_code"})),
            )
            .mount(&server)
            .await;

        let oauth = RaindropOAuth::new(server.uri());
        let err = oauth.exchange_code("abc", "shh", "https://x/cb", "nope").await.unwrap_err();

        assert!(matches!(err, RainpickError::Auth(ref m) if m == "bad_authorization_code"));
    }

    #[tokio::test]
    async fn unparsable_body_maps_to_generic_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let oauth = RaindropOAuth::new(server.uri());
        let err = oauth.exchange_code("abc", "shh", "https://x/cb", "code").await.unwrap_err();

        assert!(matches!(err, RainpickError::Auth(ref m) if m == "token_exchange_failed"));
    }
}
