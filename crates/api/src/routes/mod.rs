//! HTTP route handlers

pub mod auth;
pub mod collections;
pub mod random;
