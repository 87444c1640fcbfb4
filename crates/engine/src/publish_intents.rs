//! PublishIntentStore: scheduled publications
//!
//! Writing an intent provisions its routes ahead of the publish time. When a
//! document already lives at the intent's path only the routes it does not
//! already have are registered, so the live routes are left alone.

use crate::error::{Result, StoreError};
use crate::outcome::WriteResult;
use crate::storage::{DocumentStore, IntentStore};
use chrono::{DateTime, Utc};
use content_store_core::{Clock, ContentStoreConfig, PublishIntent};
use content_store_routes::{RegisterableRouteSet, RouteRegistrationCoordinator, RoutingTier};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Writes, reads and expires publish intents
#[derive(Clone)]
pub struct PublishIntentStore {
    intents: Arc<dyn IntentStore>,
    documents: Arc<dyn DocumentStore>,
    registration: RouteRegistrationCoordinator,
    config: Arc<ContentStoreConfig>,
    clock: Arc<dyn Clock>,
}

impl PublishIntentStore {
    /// Create a store over its collaborators
    pub fn new(
        intents: Arc<dyn IntentStore>,
        documents: Arc<dyn DocumentStore>,
        router: Arc<dyn RoutingTier>,
        config: Arc<ContentStoreConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            intents,
            documents,
            registration: RouteRegistrationCoordinator::new(router, config.clone()),
            config,
            clock,
        }
    }

    /// The intent at `base_path`, if any
    pub fn find(&self, base_path: &str) -> Result<Option<PublishIntent>> {
        Ok(self.intents.find(base_path)?)
    }

    /// Create or replace the intent at `base_path`, then register its routes
    pub fn create_or_replace(
        &self,
        base_path: &str,
        attributes: &Map<String, Value>,
    ) -> Result<WriteResult<PublishIntent>> {
        let exists = self.intents.find(base_path)?.is_some();

        let (intent, mut errors) = match PublishIntent::from_attributes(base_path, attributes) {
            Ok(decoded) => decoded,
            Err(e) => {
                return Ok(WriteResult::failed(PublishIntent::new(base_path), e.into()));
            }
        };
        errors.merge(intent.validate_fields());

        let existing = self.documents.find(base_path)?;
        let route_set = RegisterableRouteSet::from_publish_intent(&intent, existing.as_ref());
        errors.merge(route_set.validate());

        if !errors.is_empty() {
            debug!(
                target: "content_store::intent",
                base_path,
                fields = ?errors.fields(),
                "Publish intent rejected"
            );
            return Ok(WriteResult::failed(intent, errors));
        }

        self.intents.upsert(intent.clone())?;
        info!(
            target: "content_store::intent",
            base_path,
            publish_time = ?intent.publish_time,
            supplementary = route_set.is_supplementary,
            "Publish intent persisted"
        );

        self.registration
            .register(&route_set)
            .map_err(|source| StoreError::Registration {
                base_path: base_path.to_string(),
                source,
            })?;

        Ok(WriteResult::persisted(exists, intent))
    }

    /// Remove the intent at `base_path`; true if one existed
    pub fn delete(&self, base_path: &str) -> Result<bool> {
        let deleted = self.intents.delete(base_path)?;
        debug!(target: "content_store::intent", base_path, deleted, "Publish intent delete");
        Ok(deleted)
    }

    /// Remove intents whose publish time passed more than the configured
    /// leeway ago; returns how many went
    pub fn cleanup_expired(&self) -> Result<usize> {
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(self.config.publish_intent_leeway())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let removed = self.intents.delete_published_before(cutoff)?;
        if !removed.is_empty() {
            info!(
                target: "content_store::intent",
                count = removed.len(),
                %cutoff,
                "Expired publish intents removed"
            );
        }
        Ok(removed.len())
    }
}
