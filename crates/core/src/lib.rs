//! Core types for the content store
//!
//! This crate defines the records and rules shared by every other layer:
//! - ContentDocument: a versioned document keyed by `base_path`
//! - PublishIntent: a scheduled publication at a `base_path`
//! - RouteEntry / RedirectEntry: stored routing data on both records
//! - Strict payload decoding (unknown keys, value shapes) and field validation
//! - FieldErrors / DecodeError: the validation error model
//! - ContentStoreConfig: `content-store.toml` settings
//! - Clock: injected time source

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod clock;
pub mod config;
pub mod document;
pub mod error;
pub mod intent;
pub mod path;

pub use attributes::{as_attribute_map, json_kind, FieldKind, Schema};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ContentStoreConfig, CONFIG_FILE_NAME};
pub use document::{
    ContentDocument, RedirectEntry, RouteEntry, AVAILABLE_TRANSLATIONS, GONE_FORMAT,
    REDIRECT_FORMAT,
};
pub use error::{DecodeError, FieldErrors, BASE_FIELD};
pub use intent::PublishIntent;
