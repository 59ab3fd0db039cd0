//! # Rainpick App
//!
//! The HTTP surface: a small axum server that brokers OAuth login against
//! Raindrop, proxies a handful of read/delete calls with credentials
//! attached, and drives the random bookmark selector. Handlers are
//! stateless; session credentials live only in cookies.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

pub mod auth;
pub mod base_url;
pub mod error;
pub mod routes;
pub mod state;
pub mod ui;

pub use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/api/auth/login", get(routes::auth::login))
        .route("/api/auth/callback", get(routes::auth::callback))
        .route("/api/auth/logout", post(routes::auth::logout))
        .route("/api/auth/session", get(routes::auth::session))
        .route("/api/auth/debug", get(routes::auth::debug_info))
        .route("/api/collections", get(routes::collections::list))
        .route("/api/collection/{id}", get(routes::collections::get_one))
        .route("/api/raindrop/{id}", delete(routes::collections::delete_one))
        .route("/api/random", get(routes::random::draw))
        .with_state(state)
}
