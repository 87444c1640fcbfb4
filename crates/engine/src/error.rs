//! Engine errors
//!
//! Validation failures are not errors here: they come back as data inside a
//! [`WriteResult`](crate::WriteResult). `StoreError` covers the external
//! collaborators failing underneath an otherwise valid operation.

use crate::storage::StorageError;
use content_store_routes::RegistrationError;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Collaborator failures surfaced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The document or intent store failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Routing-tier registration failed after the record was persisted
    ///
    /// The record stays persisted; nothing is rolled back.
    #[error("route registration for {base_path} failed: {source}")]
    Registration {
        /// Path whose routes were being registered
        base_path: String,
        /// Underlying failure
        #[source]
        source: RegistrationError,
    },
}

impl StoreError {
    /// True for a routing-tier failure
    pub fn is_registration(&self) -> bool {
        matches!(self, StoreError::Registration { .. })
    }
}
