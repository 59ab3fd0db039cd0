//! # Rainpick Infra
//!
//! Infrastructure adapters for Rainpick:
//! - Raindrop REST API client and the `BookmarkSource` adapter
//! - OAuth code-exchange client
//! - Environment configuration loader

pub mod api;
pub mod config;
pub mod oauth;

pub use api::{CollectionSource, RaindropClient};
pub use config::Config;
pub use oauth::RaindropOAuth;
