//! Command handlers.
//!
//! Each handler validates its input via `bridge`, calls one engine service
//! and converts the result into an [`Output`](crate::Output).

pub mod content_items;
pub mod publish_intents;
