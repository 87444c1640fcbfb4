//! Content store engine
//!
//! This crate runs the write and read paths on top of the collaborators:
//! - ContentItemStore: validate -> persist -> register -> notify
//! - PublishIntentStore: scheduled publications and their routes
//! - LinkResolver: link and translation resolution with locale fallback
//! - ttl: cache expiry bounded by publish intents
//!
//! Collaborators are injected as trait objects: [`DocumentStore`],
//! [`IntentStore`], [`Notifier`] and the routing tier from
//! `content-store-routes`. In-memory implementations of each ship here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content_items;
pub mod error;
pub mod links;
pub mod memory;
pub mod notify;
pub mod outcome;
pub mod publish_intents;
pub mod storage;
pub mod ttl;

pub use content_items::ContentItemStore;
pub use error::{Result, StoreError};
pub use links::{LinkResolver, ResolvedLinks};
pub use memory::{InMemoryDocumentStore, InMemoryIntentStore};
pub use notify::{Notifier, NotifyError, NullNotifier, RecordingNotifier};
pub use outcome::{Outcome, WriteResult};
pub use publish_intents::PublishIntentStore;
pub use storage::{
    DocumentQuery, DocumentStore, IntentStore, QueryOrder, StorageError, StorageResult,
};
pub use ttl::{cache_expiry, configured_cache_expiry};
