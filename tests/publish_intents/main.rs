//! Publish Intent Tests
//!
//! - lifecycle: write, read, delete, expire
//! - cache_expiry: read expiry bounded by the intent at the same path

#[path = "../common/mod.rs"]
mod common;

mod cache_expiry;
mod lifecycle;
