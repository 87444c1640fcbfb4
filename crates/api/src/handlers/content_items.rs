//! Content item command handlers.

use content_store_engine::configured_cache_expiry;
use tracing::debug;

use crate::bridge::{parse_body, require_path, Services};
use crate::presenter::present_content_item;
use crate::types::WriteStatus;
use crate::{Error, Output, Result};

/// Handle PutContentItem command.
pub(crate) fn put_content_item(s: &Services, base_path: String, body: String) -> Result<Output> {
    require_path(&base_path)?;
    let attributes = parse_body(&body)?;
    let result = s.content_items.create_or_replace(&base_path, &attributes)?;
    match WriteStatus::from_outcome(result.outcome) {
        Some(status) => Ok(Output::Written { base_path, status }),
        None => Err(Error::Unprocessable {
            errors: result.errors,
        }),
    }
}

/// Handle GetContentItem command.
///
/// The expiry is bounded by any publish intent at the same path.
pub(crate) fn get_content_item(s: &Services, base_path: String) -> Result<Output> {
    require_path(&base_path)?;
    let doc = s
        .content_items
        .find(&base_path)?
        .ok_or_else(|| Error::NotFound {
            base_path: base_path.clone(),
        })?;
    let links = s.links.linked_items(&doc)?;
    let intent = s.publish_intents.find(&base_path)?;
    let expires_at = configured_cache_expiry(&s.config, s.clock.now(), intent.as_ref());
    debug!(
        target: "content_store::read",
        base_path = %base_path,
        link_types = links.len(),
        %expires_at,
        "Content item read"
    );
    Ok(Output::ContentItem {
        item: present_content_item(&doc, &links, &s.config),
        expires_at,
    })
}
