//! LinkResolver: cross-document references and translation sets
//!
//! Links name content ids, not paths. A content id is shared by every
//! translation of a piece of content, so resolving one means choosing a
//! locale. Resolution runs in two explicit passes over a single query:
//! group the candidates by content id, then pick from each group by the
//! locale preference list `[doc.locale, default_locale]`.
//!
//! Resolution only reads. The result depends on store contents, not on the
//! order the store happens to return ties in.

use crate::error::Result;
use crate::storage::{DocumentQuery, DocumentStore, QueryOrder};
use content_store_core::{ContentDocument, ContentStoreConfig, AVAILABLE_TRANSLATIONS};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use uuid::Uuid;

/// Link type -> resolved documents, in link order
pub type ResolvedLinks = BTreeMap<String, Vec<ContentDocument>>;

/// Resolves a document's links against the document store
#[derive(Clone)]
pub struct LinkResolver {
    documents: Arc<dyn DocumentStore>,
    config: Arc<ContentStoreConfig>,
}

impl LinkResolver {
    /// Create a resolver
    pub fn new(documents: Arc<dyn DocumentStore>, config: Arc<ContentStoreConfig>) -> Self {
        Self { documents, config }
    }

    /// Resolve every link of `doc`, plus its available translations
    ///
    /// Unresolvable ids are dropped; a link type whose ids all fail to
    /// resolve maps to an empty list.
    pub fn linked_items(&self, doc: &ContentDocument) -> Result<ResolvedLinks> {
        let resolved = self.resolve_ids(doc)?;

        let mut links: ResolvedLinks = doc
            .links
            .iter()
            .map(|(link_type, ids)| {
                let items = ids
                    .iter()
                    .filter_map(|id| resolved.get(id).cloned())
                    .collect();
                (link_type.clone(), items)
            })
            .collect();

        let translations = self.available_translations(doc)?;
        if !translations.is_empty() {
            links.insert(AVAILABLE_TRANSLATIONS.to_string(), translations);
        }
        Ok(links)
    }

    /// One renderable document per locale sharing `doc`'s content id, the
    /// most recently updated in each, ordered by locale
    ///
    /// A document without a content id is its own only translation.
    pub fn available_translations(&self, doc: &ContentDocument) -> Result<Vec<ContentDocument>> {
        let Some(content_id) = doc.content_id else {
            return Ok(vec![doc.clone()]);
        };

        let query = DocumentQuery::renderable()
            .content_ids(vec![content_id])
            .order(QueryOrder::LocaleThenUpdatedAtAsc);
        let mut latest: Vec<ContentDocument> = Vec::new();
        for candidate in self.documents.query(&query)? {
            match latest.last_mut() {
                Some(last) if last.locale == candidate.locale => *last = candidate,
                _ => latest.push(candidate),
            }
        }
        Ok(latest)
    }

    fn locale_preference(&self, doc: &ContentDocument) -> Vec<String> {
        let mut preference = vec![doc.locale.clone()];
        if self.config.default_locale != doc.locale {
            preference.push(self.config.default_locale.clone());
        }
        preference
    }

    fn resolve_ids(&self, doc: &ContentDocument) -> Result<HashMap<Uuid, ContentDocument>> {
        let ids = doc.linked_content_ids();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let preference = self.locale_preference(doc);
        let query = DocumentQuery::renderable()
            .content_ids(ids)
            .locales(preference.clone())
            .order(QueryOrder::UpdatedAtDesc);
        let candidates = self.documents.query(&query)?;

        let groups = group_by_content_id(candidates);
        Ok(groups
            .into_iter()
            .filter_map(|(id, group)| select_by_locale(group, &preference).map(|doc| (id, doc)))
            .collect())
    }
}

/// First pass: bucket candidates by content id, keeping query order
fn group_by_content_id(candidates: Vec<ContentDocument>) -> HashMap<Uuid, Vec<ContentDocument>> {
    let mut groups: HashMap<Uuid, Vec<ContentDocument>> = HashMap::new();
    for candidate in candidates {
        if let Some(id) = candidate.content_id {
            groups.entry(id).or_default().push(candidate);
        }
    }
    groups
}

/// Second pass: the first candidate in the most preferred locale present
fn select_by_locale(group: Vec<ContentDocument>, preference: &[String]) -> Option<ContentDocument> {
    let position = preference
        .iter()
        .find_map(|locale| group.iter().position(|doc| &doc.locale == locale))?;
    group.into_iter().nth(position)
}
