//! ContentItemStore: the content-document write pipeline
//!
//! ## Pipeline
//!
//! A write runs four stages in a fixed order, each gated on the previous:
//!
//! 1. validate: strict decode (unknown keys and mis-shaped values
//!    short-circuit), then field validation and route-set validation
//!    accumulated into one set of field errors
//! 2. persist: upsert by `base_path`, stamping `updated_at`
//! 3. register: the derived route set, unless the format is a placeholder
//! 4. notify: fire-and-forget
//!
//! A registration failure is returned to the caller, but the document it
//! belongs to stays persisted. Nothing is retried.
//!
//! ## Thread Safety
//!
//! The store holds only shared handles to its collaborators. Concurrent
//! writes to one path are not serialized: the last persist wins and their
//! registrations may reach the routing tier in either order.

use crate::error::{Result, StoreError};
use crate::notify::Notifier;
use crate::outcome::WriteResult;
use crate::storage::DocumentStore;
use content_store_core::{Clock, ContentDocument, ContentStoreConfig, FieldErrors};
use content_store_routes::{RegisterableRouteSet, RouteRegistrationCoordinator, RoutingTier};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Writes and reads content documents
#[derive(Clone)]
pub struct ContentItemStore {
    documents: Arc<dyn DocumentStore>,
    registration: RouteRegistrationCoordinator,
    notifier: Arc<dyn Notifier>,
    config: Arc<ContentStoreConfig>,
    clock: Arc<dyn Clock>,
}

impl ContentItemStore {
    /// Create a store over its collaborators
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        router: Arc<dyn RoutingTier>,
        notifier: Arc<dyn Notifier>,
        config: Arc<ContentStoreConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            documents,
            registration: RouteRegistrationCoordinator::new(router, config.clone()),
            notifier,
            config,
            clock,
        }
    }

    /// The document at `base_path`, if any
    pub fn find(&self, base_path: &str) -> Result<Option<ContentDocument>> {
        Ok(self.documents.find(base_path)?)
    }

    /// Create or replace the document at `base_path` from a write payload
    ///
    /// Returns `Ok` with `Outcome::Failed` and the field errors when the
    /// payload is invalid; in that case nothing is persisted and the routing
    /// tier is not called. Returns `Err` when a collaborator fails.
    pub fn create_or_replace(
        &self,
        base_path: &str,
        attributes: &Map<String, Value>,
    ) -> Result<WriteResult<ContentDocument>> {
        let previous = self.documents.find(base_path)?;

        let (candidate, errors) = match self.validate(base_path, attributes, previous.as_ref()) {
            Ok(valid) => (valid, None),
            Err((candidate, errors)) => (candidate, Some(errors)),
        };
        if let Some(errors) = errors {
            debug!(
                target: "content_store::write",
                base_path,
                fields = ?errors.fields(),
                "Content item rejected"
            );
            return Ok(WriteResult::failed(candidate, errors));
        }

        let doc = ContentDocument {
            updated_at: Some(self.clock.now()),
            update_type: None,
            ..candidate
        };
        self.documents.upsert(doc.clone())?;
        info!(
            target: "content_store::write",
            base_path,
            format = doc.format(),
            replaced = previous.is_some(),
            "Content item persisted"
        );

        if self.config.is_placeholder_format(doc.format()) {
            debug!(target: "content_store::write", base_path, "Placeholder format, routes not registered");
        } else {
            self.registration
                .register(&RegisterableRouteSet::from_document(&doc))
                .map_err(|source| StoreError::Registration {
                    base_path: base_path.to_string(),
                    source,
                })?;
        }

        if let Err(e) = self.notifier.publish(&doc) {
            warn!(target: "content_store::notify", base_path, error = %e, "Notification failed");
        }

        Ok(WriteResult::persisted(previous.is_some(), doc))
    }

    /// Decode and validate a payload
    ///
    /// `Err` carries the best-effort candidate and every recorded failure.
    fn validate(
        &self,
        base_path: &str,
        attributes: &Map<String, Value>,
        previous: Option<&ContentDocument>,
    ) -> std::result::Result<ContentDocument, (ContentDocument, FieldErrors)> {
        let (doc, mut errors) =
            match ContentDocument::from_attributes(base_path, attributes, &self.config) {
                Ok(decoded) => decoded,
                Err(e) => {
                    return Err((ContentDocument::new(base_path, &self.config), e.into()));
                }
            };

        errors.merge(doc.validate_fields(&self.config, previous));
        errors.merge(RegisterableRouteSet::from_document(&doc).validate());

        if errors.is_empty() {
            Ok(doc)
        } else {
            Err((doc, errors))
        }
    }
}
