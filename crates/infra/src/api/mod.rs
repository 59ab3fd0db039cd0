//! Raindrop REST API access

pub mod client;
pub mod source;

pub use client::RaindropClient;
pub use source::CollectionSource;
