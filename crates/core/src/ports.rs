//! Bookmark source port interface
//!
//! The selector only needs two remote operations; infrastructure adapters
//! bind them to the Raindrop REST API.

use async_trait::async_trait;
use rainpick_domain::{Item, Result};

/// Trait for paginated bookmark collection access
#[async_trait]
pub trait BookmarkSource: Send + Sync {
    /// Item count from the collection's metadata, `None` when the remote
    /// reports no usable count.
    async fn collection_count(&self, collection_id: i64) -> Result<Option<i64>>;

    /// Fetch one page of items (zero-based page index).
    async fn fetch_page(&self, collection_id: i64, page: i64, per_page: i64) -> Result<Vec<Item>>;
}
