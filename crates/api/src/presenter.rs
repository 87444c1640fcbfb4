//! Public presentation of content items
//!
//! Readers see the public fields of a document and its links expanded into
//! summaries of the linked items. Internal routing data (routes, redirects,
//! rendering and publishing apps) is not exposed.

use crate::types::{LinkedItem, PresentedContentItem};
use content_store_core::{ContentDocument, ContentStoreConfig};
use content_store_engine::ResolvedLinks;

/// Present `doc` with its resolved links
pub fn present_content_item(
    doc: &ContentDocument,
    links: &ResolvedLinks,
    config: &ContentStoreConfig,
) -> PresentedContentItem {
    PresentedContentItem {
        base_path: doc.base_path.clone(),
        content_id: doc.content_id,
        title: doc.title.clone(),
        description: doc.description.clone(),
        format: doc.format.clone(),
        need_ids: doc.need_ids.clone(),
        locale: doc.locale.clone(),
        updated_at: doc.updated_at,
        public_updated_at: doc.public_updated_at,
        phase: doc.phase.clone(),
        analytics_identifier: doc.analytics_identifier.clone(),
        details: doc.details.clone(),
        links: links
            .iter()
            .map(|(link_type, items)| {
                let expanded = items.iter().map(|item| linked_item(item, config)).collect();
                (link_type.clone(), expanded)
            })
            .collect(),
    }
}

fn linked_item(doc: &ContentDocument, config: &ContentStoreConfig) -> LinkedItem {
    LinkedItem {
        content_id: doc.content_id,
        title: doc.title.clone(),
        base_path: doc.base_path.clone(),
        description: doc.description.clone(),
        api_url: api_url(&doc.base_path, config),
        web_url: web_url(&doc.base_path, config),
        locale: doc.locale.clone(),
    }
}

/// Where a document's JSON is served from
pub fn api_url(base_path: &str, config: &ContentStoreConfig) -> String {
    format!("{}/content{}", config.api_root.trim_end_matches('/'), base_path)
}

/// Where a document is rendered
pub fn web_url(base_path: &str, config: &ContentStoreConfig) -> String {
    format!("{}{}", config.website_root.trim_end_matches('/'), base_path)
}
