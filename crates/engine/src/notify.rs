//! Message-notification side channel
//!
//! A notifier is told about every successfully persisted document. Delivery
//! is fire-and-forget: the engine logs a failed publish and carries on.

use content_store_core::ContentDocument;
use parking_lot::Mutex;
use thiserror::Error;

/// A publish that did not go out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("notification for {base_path} failed: {reason}")]
pub struct NotifyError {
    /// Document the message was about
    pub base_path: String,
    /// Reason given by the channel
    pub reason: String,
}

/// Message-publishing collaborator
pub trait Notifier: Send + Sync {
    /// Announce a persisted document
    fn publish(&self, doc: &ContentDocument) -> Result<(), NotifyError>;
}

/// Drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn publish(&self, _doc: &ContentDocument) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Keeps every published document, and can be told to fail
#[derive(Default)]
pub struct RecordingNotifier {
    published: Mutex<Vec<ContentDocument>>,
    failure: Mutex<Option<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish fail with `reason`
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock() = Some(reason.into());
    }

    /// Documents published so far, in order
    pub fn published(&self) -> Vec<ContentDocument> {
        self.published.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, doc: &ContentDocument) -> Result<(), NotifyError> {
        if let Some(reason) = self.failure.lock().clone() {
            return Err(NotifyError {
                base_path: doc.base_path.clone(),
                reason,
            });
        }
        self.published.lock().push(doc.clone());
        Ok(())
    }
}
