//! OAuth login flow and session endpoints
//!
//! Flow: `/api/auth/login` redirects the browser to Raindrop's authorize
//! page; Raindrop calls back with a code (or an error); the callback
//! exchanges the code server-side and stores the credential pair as
//! http-only cookies. Failures travel home as `?error=` query parameters so
//! the UI can show them inline.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rainpick_domain::constants::{ACCESS_COOKIE, REFRESH_COOKIE, REFRESH_COOKIE_MAX_AGE_SECS};
use rainpick_domain::{RainpickError, TokenSet};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::base_url::{derived_base_url, effective_base_url};
use crate::error::ApiError;
use crate::state::AppState;

/// 302 redirect; axum's `Redirect::to` answers 303, which some OAuth
/// user agents treat differently, so the header pair is built directly.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

fn resolve_base(state: &AppState, headers: &HeaderMap) -> Option<String> {
    effective_base_url(state.config.app_base_url.as_deref(), derived_base_url(headers).as_deref())
}

/// GET `/api/auth/login` — redirect to the remote authorize endpoint.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let base = resolve_base(&state, &headers);
    let (Some(base), Some(client_id)) = (base, state.config.client_id.as_deref()) else {
        warn!("login requested without APP_BASE_URL or RAINDROP_CLIENT_ID");
        return Err(RainpickError::Config(
            "Missing APP_BASE_URL or RAINDROP_CLIENT_ID".to_string(),
        )
        .into());
    };

    let redirect_uri = format!("{base}/api/auth/callback");
    let url = state.oauth.authorize_url(client_id, &redirect_uri);

    info!("redirecting to authorize endpoint");
    Ok(found(url))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    error: Option<String>,
}

/// GET `/api/auth/callback` — exchange the authorization code and persist
/// the credential pair as cookies.
#[instrument(skip_all)]
pub async fn callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Result<Response, ApiError> {
    let base = resolve_base(&state, &headers);
    let (Some(base), Some(client_id), Some(client_secret)) = (
        base,
        state.config.client_id.as_deref(),
        state.config.client_secret.as_deref(),
    ) else {
        return Err(RainpickError::Config(
            "Missing APP_BASE_URL or RAINDROP_CLIENT_ID or RAINDROP_CLIENT_SECRET".to_string(),
        )
        .into());
    };

    if let Some(error) = query.error {
        warn!(error = %error, "authorization denied by provider");
        return Ok(found(format!("{base}/?error={}", urlencoding::encode(&error))));
    }

    let Some(code) = query.code else {
        return Err(RainpickError::InvalidInput("Missing code".to_string()).into());
    };

    let redirect_uri = format!("{base}/api/auth/callback");
    let tokens = match state
        .oauth
        .exchange_code(client_id, client_secret, &redirect_uri, &code)
        .await
    {
        Ok(tokens) => tokens,
        Err(err) => {
            let message = match err {
                RainpickError::Auth(message) => message,
                other => other.to_string(),
            };
            warn!(error = %message, "token exchange failed");
            return Ok(found(format!("{base}/?error={}", urlencoding::encode(&message))));
        }
    };

    let secure = base.starts_with("https://");
    let jar = jar
        .add(session_cookie(ACCESS_COOKIE, tokens.access_token.clone(), secure, &tokens))
        .add(refresh_cookie(&tokens, secure));

    info!("authenticated, session cookies set");
    Ok((jar, found(format!("{base}/"))).into_response())
}

fn session_cookie(
    name: &'static str,
    value: String,
    secure: bool,
    tokens: &TokenSet,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(tokens.expires_in.max(0)))
        .build()
}

fn refresh_cookie(tokens: &TokenSet, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, tokens.refresh_token.clone().unwrap_or_default()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(REFRESH_COOKIE_MAX_AGE_SECS))
        .build()
}

/// POST `/api/auth/logout` — clear both session cookies. Idempotent.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar
        .remove(Cookie::build((ACCESS_COOKIE, "")).path("/").build())
        .remove(Cookie::build((REFRESH_COOKIE, "")).path("/").build());

    (jar, Json(json!({ "result": true })))
}

/// GET `/api/auth/session` — whether a server-brokered credential exists.
pub async fn session(jar: CookieJar) -> impl IntoResponse {
    let authenticated = jar
        .get(ACCESS_COOKIE)
        .map(|cookie| !cookie.value().is_empty())
        .unwrap_or(false);

    Json(json!({ "authenticated": authenticated }))
}

/// GET `/api/auth/debug` — diagnostic echo of base-URL resolution.
pub async fn debug_info(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let derived = derived_base_url(&headers);
    let effective =
        effective_base_url(state.config.app_base_url.as_deref(), derived.as_deref());

    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);

    Json(json!({
        "appBaseUrlEnv": state.config.app_base_url,
        "derivedBaseUrl": derived,
        "effectiveBaseUrl": effective,
        "headers": {
            "host": header("host"),
            "xForwardedHost": header("x-forwarded-host"),
            "xForwardedProto": header("x-forwarded-proto"),
        },
    }))
}
