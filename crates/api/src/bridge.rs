//! Bridge between the executor and the engine.
//!
//! Holds the engine services a handler needs and the input checks every
//! handler shares: path routability and body decoding.

use std::sync::Arc;

use content_store_core::{as_attribute_map, Clock, ContentStoreConfig, FieldErrors};
use content_store_engine::{ContentItemStore, LinkResolver, PublishIntentStore};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Engine services shared by all handlers.
pub(crate) struct Services {
    pub content_items: ContentItemStore,
    pub publish_intents: PublishIntentStore,
    pub links: LinkResolver,
    pub config: Arc<ContentStoreConfig>,
    pub clock: Arc<dyn Clock>,
}

/// Reject paths the surface could not have routed.
///
/// Only routability is checked here; a routable but malformed path reaches
/// field validation and is reported against `base_path`.
pub(crate) fn require_path(base_path: &str) -> Result<()> {
    if !base_path.starts_with('/') {
        return Err(Error::InvalidPath {
            path: base_path.to_string(),
        });
    }
    Ok(())
}

/// Parse a request body into write attributes.
///
/// Unparseable text is malformed input; parseable JSON that is not an
/// object is a whole-entity validation error.
pub(crate) fn parse_body(body: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::MalformedInput {
        reason: e.to_string(),
    })?;
    as_attribute_map(&value)
        .cloned()
        .map_err(|e| Error::Unprocessable {
            errors: FieldErrors::from(e),
        })
}
