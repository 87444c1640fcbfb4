//! Error conversion from engine error types.

use crate::Error;
use content_store_engine::StoreError;

/// Convert an engine error to an executor Error.
///
/// Registration failures keep their own variant so callers can tell that
/// the record was persisted; everything else is a store failure.
impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Registration { base_path, source } => Error::Registration {
                base_path,
                reason: source.to_string(),
            },
            StoreError::Storage(e) => Error::Internal {
                reason: e.to_string(),
            },
        }
    }
}
