//! In-memory stores
//!
//! `DashMap`-backed implementations of [`DocumentStore`] and [`IntentStore`].
//! Each call is atomic per key; nothing spans calls.

use crate::storage::{DocumentQuery, DocumentStore, IntentStore, StorageError, StorageResult};
use chrono::{DateTime, Utc};
use content_store_core::{ContentDocument, PublishIntent};
use dashmap::DashMap;
use parking_lot::RwLock;

/// Content documents held in memory
#[derive(Default)]
pub struct InMemoryDocumentStore {
    docs: DashMap<String, ContentDocument>,
    failure: RwLock<Option<String>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent upsert fail with `reason`
    pub fn fail_upserts(&self, reason: impl Into<String>) {
        *self.failure.write() = Some(reason.into());
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn find(&self, base_path: &str) -> StorageResult<Option<ContentDocument>> {
        Ok(self.docs.get(base_path).map(|entry| entry.value().clone()))
    }

    fn upsert(&self, doc: ContentDocument) -> StorageResult<()> {
        if let Some(reason) = self.failure.read().clone() {
            return Err(StorageError::Rejected {
                base_path: doc.base_path,
                reason,
            });
        }
        self.docs.insert(doc.base_path.clone(), doc);
        Ok(())
    }

    fn query(&self, query: &DocumentQuery) -> StorageResult<Vec<ContentDocument>> {
        let mut found: Vec<ContentDocument> = self
            .docs
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        query.sort(&mut found);
        Ok(found)
    }
}

/// Publish intents held in memory
#[derive(Default)]
pub struct InMemoryIntentStore {
    intents: DashMap<String, PublishIntent>,
}

impl InMemoryIntentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored intents
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

impl IntentStore for InMemoryIntentStore {
    fn find(&self, base_path: &str) -> StorageResult<Option<PublishIntent>> {
        Ok(self.intents.get(base_path).map(|entry| entry.value().clone()))
    }

    fn upsert(&self, intent: PublishIntent) -> StorageResult<()> {
        self.intents.insert(intent.base_path.clone(), intent);
        Ok(())
    }

    fn delete(&self, base_path: &str) -> StorageResult<bool> {
        Ok(self.intents.remove(base_path).is_some())
    }

    fn delete_published_before(&self, cutoff: DateTime<Utc>) -> StorageResult<Vec<String>> {
        let expired: Vec<String> = self
            .intents
            .iter()
            .filter(|entry| entry.value().is_published_before(cutoff))
            .map(|entry| entry.key().clone())
            .collect();
        for base_path in &expired {
            self.intents.remove(base_path);
        }
        Ok(expired)
    }
}
