//! Random item selection against a paginated remote collection
//!
//! Picks one (approximately) uniformly random bookmark without downloading
//! the whole collection: resolve a total count, choose an index, fetch only
//! the page containing it.
//!
//! When no usable count can be resolved the selector samples within the
//! first page only. That branch is not uniform over the true collection;
//! it is intentionally kept as-is.

use rainpick_domain::constants::PAGE_SIZE;
use rainpick_domain::{Item, Result};
use rand::Rng;
use tracing::{debug, warn};

use crate::ports::BookmarkSource;

/// Location of one global index within fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Zero-based page index
    pub page: i64,
    /// Offset within that page
    pub offset: i64,
}

/// Compute the page containing `index` under the fixed page size.
#[must_use]
pub fn locate(index: i64) -> PagePlan {
    PagePlan { page: index / PAGE_SIZE, offset: index % PAGE_SIZE }
}

/// Draw one random item from the collection, or `None` when it is empty.
///
/// A supplied `count_hint` skips the metadata lookup. Non-positive or
/// missing counts are treated as unknown, never as errors; only remote
/// fetch failures on the chosen path propagate.
pub async fn draw_random<S, R>(
    source: &S,
    collection_id: i64,
    count_hint: Option<i64>,
    rng: &mut R,
) -> Result<Option<Item>>
where
    S: BookmarkSource + ?Sized,
    R: Rng + Send,
{
    let mut total = count_hint.unwrap_or(0).max(0);

    if total == 0 {
        // Metadata lookup failures leave the count unknown rather than
        // aborting the draw.
        match source.collection_count(collection_id).await {
            Ok(count) => total = count.unwrap_or(0).max(0),
            Err(err) => {
                warn!(collection_id, error = %err, "collection count lookup failed");
            }
        }
    }

    if total == 0 {
        // Unknown size: sample within the first page only.
        let items = source.fetch_page(collection_id, 0, PAGE_SIZE).await?;
        if items.is_empty() {
            return Ok(None);
        }
        let picked = items[rng.gen_range(0..items.len())].clone();
        debug!(collection_id, "drew from first page (no usable count)");
        return Ok(Some(picked));
    }

    let index = rng.gen_range(0..total);
    let plan = locate(index);
    debug!(collection_id, total, index, page = plan.page, "drawing item");

    let items = source.fetch_page(collection_id, plan.page, PAGE_SIZE).await?;
    if items.is_empty() {
        return Ok(None);
    }

    // A stale count can point past the end of the page actually returned;
    // fall back to a random element of that page.
    let item = match items.get(plan.offset as usize) {
        Some(item) => item.clone(),
        None => items[rng.gen_range(0..items.len())].clone(),
    };

    Ok(Some(item))
}
