//! Command enum defining every content store operation.
//!
//! Commands are:
//! - **Self-contained**: all parameters needed for execution are in the variant
//! - **Serializable**: can be converted to/from JSON
//! - **Pure data**: bodies are carried as received, unparsed
//!
//! Bodies stay raw so that an unparseable body is reported as
//! [`Error::MalformedInput`](crate::Error::MalformedInput) by the executor
//! rather than by whoever built the command.

use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Example
///
/// ```
/// use content_store_api::Command;
///
/// let cmd = Command::GetContentItem {
///     base_path: "/vat-rates".into(),
/// };
/// let json = serde_json::to_string(&cmd).unwrap();
/// assert_eq!(json, r#"{"GetContentItem":{"base_path":"/vat-rates"}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Content items ====================
    /// Create or replace the content item at `base_path`.
    /// Returns: `Output::Written`
    PutContentItem { base_path: String, body: String },

    /// Read the content item at `base_path`, with resolved links.
    /// Returns: `Output::ContentItem`
    GetContentItem { base_path: String },

    // ==================== Publish intents ====================
    /// Create or replace the publish intent at `base_path`.
    /// Returns: `Output::Written`
    PutPublishIntent { base_path: String, body: String },

    /// Read the publish intent at `base_path`.
    /// Returns: `Output::PublishIntent`
    GetPublishIntent { base_path: String },

    /// Delete the publish intent at `base_path`.
    /// Returns: `Output::Unit`
    DeletePublishIntent { base_path: String },
}

impl Command {
    /// Path the command operates on
    pub fn base_path(&self) -> &str {
        match self {
            Command::PutContentItem { base_path, .. }
            | Command::GetContentItem { base_path }
            | Command::PutPublishIntent { base_path, .. }
            | Command::GetPublishIntent { base_path }
            | Command::DeletePublishIntent { base_path } => base_path,
        }
    }

    /// Variant name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::PutContentItem { .. } => "PutContentItem",
            Command::GetContentItem { .. } => "GetContentItem",
            Command::PutPublishIntent { .. } => "PutPublishIntent",
            Command::GetPublishIntent { .. } => "GetPublishIntent",
            Command::DeletePublishIntent { .. } => "DeletePublishIntent",
        }
    }

    /// True for commands that change state
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::PutContentItem { .. }
                | Command::PutPublishIntent { .. }
                | Command::DeletePublishIntent { .. }
        )
    }
}
