//! Embedded presentation layer

use axum::response::Html;

/// GET `/` — the single-page UI, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
