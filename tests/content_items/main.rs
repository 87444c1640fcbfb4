//! Content Item Tests
//!
//! Writes through the executor against in-memory collaborators:
//! - end_to_end: persist, register, notify in order
//! - validation: field errors, short-circuiting decode errors
//! - routing: redirect, gone and placeholder items at the routing tier
//! - properties: route sets of persisted items always validate

#[path = "../common/mod.rs"]
mod common;

mod properties;
mod routing;
mod validation;
