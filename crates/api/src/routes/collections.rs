//! Proxied collection and bookmark endpoints
//!
//! Thin pass-throughs to the Raindrop REST API: the resolved credential is
//! attached, upstream failures surface as 502 with the remote's status and
//! body text, and nothing is cached.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use rainpick_domain::RainpickError;
use serde_json::json;
use tracing::instrument;

use crate::auth::resolve_token;
use crate::error::ApiError;
use crate::state::AppState;

fn require_token(headers: &HeaderMap, jar: &CookieJar) -> Result<String, ApiError> {
    resolve_token(headers, jar)
        .ok_or_else(|| RainpickError::Auth("Not authenticated".to_string()).into())
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| RainpickError::InvalidInput("Invalid id".to_string()).into())
}

/// GET `/api/collections` — list the user's collections.
#[instrument(skip_all)]
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let token = require_token(&headers, &jar)?;
    let collections = state.raindrop.collections(&token).await?;

    Ok(Json(json!({ "collections": collections })))
}

/// GET `/api/collection/{id}` — one collection's metadata.
#[instrument(skip_all, fields(id = %id))]
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let token = require_token(&headers, &jar)?;
    let id = parse_id(&id)?;
    let collection = state.raindrop.collection(id, &token).await?;

    Ok(Json(json!({ "collection": collection })))
}

/// DELETE `/api/raindrop/{id}` — delete one bookmark.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_one(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let token = require_token(&headers, &jar)?;
    let id = parse_id(&id)?;
    let result = state.raindrop.delete_raindrop(id, &token).await?;

    Ok(Json(json!({ "result": result })))
}
