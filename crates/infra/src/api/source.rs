//! `BookmarkSource` adapter over the Raindrop client
//!
//! Binds a client and a per-request bearer token to the port the random
//! selector draws from.

use async_trait::async_trait;
use rainpick_core::BookmarkSource;
use rainpick_domain::{Item, Result};

use super::client::RaindropClient;

/// One collection's worth of remote access for a single request.
pub struct CollectionSource<'a> {
    client: &'a RaindropClient,
    token: &'a str,
}

impl<'a> CollectionSource<'a> {
    #[must_use]
    pub fn new(client: &'a RaindropClient, token: &'a str) -> Self {
        Self { client, token }
    }
}

#[async_trait]
impl BookmarkSource for CollectionSource<'_> {
    async fn collection_count(&self, collection_id: i64) -> Result<Option<i64>> {
        let collection = self.client.collection(collection_id, self.token).await?;
        Ok(collection.count)
    }

    async fn fetch_page(&self, collection_id: i64, page: i64, per_page: i64) -> Result<Vec<Item>> {
        self.client.raindrops(collection_id, page, per_page, self.token).await
    }
}
