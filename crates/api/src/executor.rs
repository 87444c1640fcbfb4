//! The Executor - single entry point to the content store.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! engine services and converts results to outputs.

use std::sync::Arc;

use content_store_core::{Clock, ContentStoreConfig, SystemClock};
use content_store_engine::{
    ContentItemStore, DocumentStore, InMemoryDocumentStore, InMemoryIntentStore, IntentStore,
    LinkResolver, Notifier, NullNotifier, PublishIntentStore,
};
use content_store_routes::{InMemoryRouter, RoutingTier};
use tracing::{debug, warn};

use crate::bridge::Services;
use crate::handlers::{content_items, publish_intents};
use crate::{Command, Output, Result};

/// External systems the executor writes through.
///
/// Every handle is shared: the same document store backs content items,
/// publish intents and link resolution.
#[derive(Clone)]
pub struct Collaborators {
    /// Content documents
    pub documents: Arc<dyn DocumentStore>,
    /// Publish intents
    pub intents: Arc<dyn IntentStore>,
    /// Routing tier
    pub router: Arc<dyn RoutingTier>,
    /// Message side channel
    pub notifier: Arc<dyn Notifier>,
    /// Source of "now"
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// Everything in memory, with a silent notifier and the system clock
    pub fn in_memory() -> Self {
        Self {
            documents: Arc::new(InMemoryDocumentStore::new()),
            intents: Arc::new(InMemoryIntentStore::new()),
            router: Arc::new(InMemoryRouter::new()),
            notifier: Arc::new(NullNotifier),
            clock: Arc::new(SystemClock),
        }
    }
}

/// The command executor - single entry point to the content store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Commands on
/// different paths do not interact; commands on the same path race at the
/// stores.
///
/// # Example
///
/// ```
/// use content_store_api::{Collaborators, Command, Error, Executor};
/// use content_store_core::ContentStoreConfig;
///
/// let executor = Executor::new(Collaborators::in_memory(), ContentStoreConfig::default());
/// let result = executor.execute(Command::GetContentItem {
///     base_path: "/vat-rates".into(),
/// });
/// assert!(matches!(result, Err(Error::NotFound { .. })));
/// ```
pub struct Executor {
    services: Services,
}

impl Executor {
    /// Create an executor over its collaborators.
    pub fn new(collaborators: Collaborators, config: ContentStoreConfig) -> Self {
        let config = Arc::new(config);
        let Collaborators {
            documents,
            intents,
            router,
            notifier,
            clock,
        } = collaborators;

        let services = Services {
            content_items: ContentItemStore::new(
                documents.clone(),
                router.clone(),
                notifier,
                config.clone(),
                clock.clone(),
            ),
            publish_intents: PublishIntentStore::new(
                intents,
                documents.clone(),
                router,
                config.clone(),
                clock.clone(),
            ),
            links: LinkResolver::new(documents, config.clone()),
            config,
            clock,
        };
        Self { services }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ContentStoreConfig {
        &self.services.config
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let write = cmd.is_write();
        let base_path = cmd.base_path().to_string();

        let result = match cmd {
            Command::PutContentItem { base_path, body } => {
                content_items::put_content_item(&self.services, base_path, body)
            }
            Command::GetContentItem { base_path } => {
                content_items::get_content_item(&self.services, base_path)
            }
            Command::PutPublishIntent { base_path, body } => {
                publish_intents::put_publish_intent(&self.services, base_path, body)
            }
            Command::GetPublishIntent { base_path } => {
                publish_intents::get_publish_intent(&self.services, base_path)
            }
            Command::DeletePublishIntent { base_path } => {
                publish_intents::delete_publish_intent(&self.services, base_path)
            }
        };

        match &result {
            Err(e) if write && e.status_code() >= 500 => warn!(
                target: "content_store::api",
                command = name,
                base_path = %base_path,
                error = %e,
                "Command failed"
            ),
            Err(e) => debug!(
                target: "content_store::api",
                command = name,
                base_path = %base_path,
                error = %e,
                "Command rejected"
            ),
            Ok(_) => debug!(target: "content_store::api", command = name, base_path = %base_path, "Command executed"),
        }
        result
    }

    /// Execute commands in order; one failing does not stop the rest.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Remove publish intents whose publish time is past the configured
    /// leeway; returns how many went.
    pub fn cleanup_publish_intents(&self) -> Result<usize> {
        Ok(self.services.publish_intents.cleanup_expired()?)
    }
}
