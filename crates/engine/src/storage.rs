//! Document and publish-intent storage
//!
//! The store is an external collaborator. These traits are the whole surface
//! the engine relies on: point lookup by `base_path`, upsert by `base_path`
//! (atomic per call), and a filtered, sorted query over the indexed fields.
//!
//! Thread safety: implementations are shared by concurrent writers and must
//! be `Send + Sync`. Two upserts on the same key race; the last one wins.

use chrono::{DateTime, Utc};
use content_store_core::{ContentDocument, PublishIntent};
use thiserror::Error;
use uuid::Uuid;

/// Result type for store calls
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Failures reported by a store backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend could not be reached or refused the call
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected a record
    #[error("store rejected {base_path}: {reason}")]
    Rejected {
        /// Key of the record
        base_path: String,
        /// Reason given by the backend
        reason: String,
    },
}

/// Sort order of a [`DocumentQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryOrder {
    /// Most recently updated first
    #[default]
    UpdatedAtDesc,
    /// By locale, then oldest update first within a locale
    LocaleThenUpdatedAtAsc,
}

/// A filtered, sorted range query over stored documents
///
/// Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Only documents whose `content_id` is one of these
    pub content_ids: Option<Vec<Uuid>>,
    /// Only documents in one of these locales
    pub locales: Option<Vec<String>>,
    /// Skip `redirect` and `gone` documents
    pub renderable_only: bool,
    /// Result order
    pub order: QueryOrder,
}

impl DocumentQuery {
    /// A query over renderable documents
    pub fn renderable() -> Self {
        Self {
            renderable_only: true,
            ..Self::default()
        }
    }

    /// Restrict to these content ids
    pub fn content_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.content_ids = Some(ids);
        self
    }

    /// Restrict to these locales
    pub fn locales(mut self, locales: Vec<String>) -> Self {
        self.locales = Some(locales);
        self
    }

    /// Set the result order
    pub fn order(mut self, order: QueryOrder) -> Self {
        self.order = order;
        self
    }

    /// True when `doc` passes every filter
    pub fn matches(&self, doc: &ContentDocument) -> bool {
        if self.renderable_only && !doc.is_renderable() {
            return false;
        }
        if let Some(ids) = &self.content_ids {
            if !doc.content_id.map_or(false, |id| ids.contains(&id)) {
                return false;
            }
        }
        if let Some(locales) = &self.locales {
            if !locales.contains(&doc.locale) {
                return false;
            }
        }
        true
    }

    /// Sort `docs` into the query's order
    ///
    /// `base_path` breaks ties so results are stable across backends.
    pub fn sort(&self, docs: &mut [ContentDocument]) {
        match self.order {
            QueryOrder::UpdatedAtDesc => docs.sort_by(|a, b| {
                b.updated_at
                    .cmp(&a.updated_at)
                    .then_with(|| a.base_path.cmp(&b.base_path))
            }),
            QueryOrder::LocaleThenUpdatedAtAsc => docs.sort_by(|a, b| {
                a.locale
                    .cmp(&b.locale)
                    .then_with(|| a.updated_at.cmp(&b.updated_at))
                    .then_with(|| a.base_path.cmp(&b.base_path))
            }),
        }
    }
}

/// Storage for content documents, keyed by `base_path`
pub trait DocumentStore: Send + Sync {
    /// Point lookup
    fn find(&self, base_path: &str) -> StorageResult<Option<ContentDocument>>;

    /// Insert or replace the document at `doc.base_path`
    fn upsert(&self, doc: ContentDocument) -> StorageResult<()>;

    /// Every document matching `query`, in its order
    fn query(&self, query: &DocumentQuery) -> StorageResult<Vec<ContentDocument>>;
}

/// Storage for publish intents, keyed by `base_path`
pub trait IntentStore: Send + Sync {
    /// Point lookup
    fn find(&self, base_path: &str) -> StorageResult<Option<PublishIntent>>;

    /// Insert or replace the intent at `intent.base_path`
    fn upsert(&self, intent: PublishIntent) -> StorageResult<()>;

    /// Remove the intent at `base_path`; true if one existed
    fn delete(&self, base_path: &str) -> StorageResult<bool>;

    /// Remove every intent whose publish time is before `cutoff`
    ///
    /// Returns the removed base paths.
    fn delete_published_before(&self, cutoff: DateTime<Utc>) -> StorageResult<Vec<String>>;
}
