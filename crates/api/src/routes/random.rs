//! Random draw endpoint
//!
//! Thin edge over the core selector: parse the query, resolve the
//! credential, bind a `CollectionSource`, draw. The optional `count` hint
//! (the UI passes the collection's cached size) skips a metadata lookup.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use rainpick_core::draw_random;
use rainpick_domain::RainpickError;
use rainpick_infra::CollectionSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::auth::resolve_token;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    #[serde(rename = "collectionId")]
    collection_id: Option<String>,
    count: Option<String>,
}

/// Integer parse matching the original front end: non-numeric → absent.
fn to_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|raw| raw.trim().parse().ok())
}

/// GET `/api/random?collectionId=..&count=..` — draw one random bookmark.
#[instrument(skip_all)]
pub async fn draw(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
    Query(query): Query<RandomQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(token) = resolve_token(&headers, &jar) else {
        return Err(RainpickError::Auth("Not authenticated".to_string()).into());
    };

    let Some(collection_id) = to_int(query.collection_id.as_deref()) else {
        return Err(RainpickError::InvalidInput("Missing collectionId".to_string()).into());
    };
    let count = to_int(query.count.as_deref());

    let source = CollectionSource::new(&state.raindrop, &token);
    let mut rng = StdRng::from_entropy();
    let item = draw_random(&source, collection_id, count, &mut rng).await?;

    Ok(Json(json!({ "item": item })))
}
