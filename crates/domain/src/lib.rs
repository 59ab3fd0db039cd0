//! # Rainpick Domain
//!
//! Shared types and models for Rainpick.
//!
//! This crate contains:
//! - Raindrop data types (Collection, Item, token types)
//! - Domain error types and Result definitions
//! - Domain constants (API endpoints, cookie names, paging)
//!
//! ## Architecture
//! - No dependencies on other Rainpick crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
