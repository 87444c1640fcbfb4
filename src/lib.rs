//! Content Store - content documents keyed by URL path, kept in step with a
//! routing tier
//!
//! Documents are validated, persisted, and their routes registered with the
//! routing tier so the public web layer can find the right rendering backend
//! for each path. Reads resolve cross-document links with locale fallback and
//! carry a cache expiry bounded by any scheduled publish.
//!
//! # Quick Start
//!
//! ```
//! use content_store::{Collaborators, Command, ContentStoreConfig, Executor, Output};
//!
//! let executor = Executor::new(Collaborators::in_memory(), ContentStoreConfig::default());
//! executor
//!     .execute(Command::PutPublishIntent {
//!         base_path: "/budget".into(),
//!         body: r#"{"publish_time": "2030-01-01T00:00:00Z", "rendering_app": "frontend",
//!                   "routes": [{"path": "/budget", "type": "exact"}]}"#
//!             .into(),
//!     })
//!     .unwrap();
//! let intent = executor
//!     .execute(Command::GetPublishIntent {
//!         base_path: "/budget".into(),
//!     })
//!     .unwrap();
//! assert!(matches!(intent, Output::PublishIntent(_)));
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`]. The collaborators it writes
//! through (document store, intent store, routing tier, notifier, clock)
//! are injected as [`Collaborators`]; in-memory versions of each are
//! re-exported for embedding and tests.

// Re-export the public API from content-store-api
pub use content_store_api::*;

pub use content_store_core::{
    Clock, ConfigError, ContentDocument, ContentStoreConfig, FieldErrors, FixedClock,
    PublishIntent, SystemClock, BASE_FIELD, CONFIG_FILE_NAME,
};
pub use content_store_engine::{
    DocumentStore, InMemoryDocumentStore, InMemoryIntentStore, IntentStore, Notifier,
    NullNotifier, RecordingNotifier,
};
pub use content_store_routes::{InMemoryRouter, MatchType, RouteTarget, RouterCall, RoutingTier};
