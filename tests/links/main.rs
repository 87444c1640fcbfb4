//! Link Resolution Tests
//!
//! Reads through the executor resolve links with locale fallback and add
//! the available translations of the item being read.

#[path = "../common/mod.rs"]
mod common;

mod locale_fallback;
mod translations;
