//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is
//! deterministic: the same command always produces the same variant.

use chrono::{DateTime, Utc};
use content_store_core::PublishIntent;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Successful command execution results.
///
/// | Command | Output |
/// |---------|--------|
/// | `PutContentItem` | `Written` |
/// | `GetContentItem` | `ContentItem` |
/// | `PutPublishIntent` | `Written` |
/// | `GetPublishIntent` | `PublishIntent` |
/// | `DeletePublishIntent` | `Unit` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value
    Unit,

    /// A record was persisted at `base_path`
    Written {
        base_path: String,
        status: WriteStatus,
    },

    /// A presented content item and the time it may be cached until
    ContentItem {
        item: PresentedContentItem,
        expires_at: DateTime<Utc>,
    },

    /// A stored publish intent
    PublishIntent(PublishIntent),
}

impl Output {
    /// HTTP status a surface layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Output::Written { status, .. } => status.status_code(),
            _ => 200,
        }
    }
}
