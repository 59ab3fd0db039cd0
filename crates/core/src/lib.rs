//! # Rainpick Core
//!
//! Pure selection logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The random-item selector over a remote paginated collection
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `rainpick-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod picker;
pub mod ports;

pub use picker::{draw_random, locate, PagePlan};
pub use ports::BookmarkSource;
