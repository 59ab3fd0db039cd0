//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Remote service endpoints
pub const RAINDROP_API_BASE: &str = "https://api.raindrop.io/rest/v1";
pub const RAINDROP_OAUTH_BASE: &str = "https://raindrop.io";
pub const OAUTH_AUTHORIZE_PATH: &str = "/oauth/authorize";
pub const OAUTH_TOKEN_PATH: &str = "/oauth/access_token";

// Session cookies
pub const ACCESS_COOKIE: &str = "rd_access";
pub const REFRESH_COOKIE: &str = "rd_refresh";
pub const REFRESH_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 30;

// Paging
pub const PAGE_SIZE: i64 = 50;

// Raindrop's pseudo-collection holding bookmarks outside any folder
pub const UNSORTED_COLLECTION_ID: i64 = -1;
