//! Public types carried by [`Output`](crate::Output).

use chrono::{DateTime, Utc};
use content_store_engine::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Result of a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    /// Nothing existed at the path before
    Created,
    /// An existing record was replaced
    Replaced,
}

impl WriteStatus {
    /// Map a successful engine outcome; `None` for `Failed`
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Created => Some(WriteStatus::Created),
            Outcome::Replaced => Some(WriteStatus::Replaced),
            Outcome::Failed => None,
        }
    }

    /// HTTP status a surface layer should answer with
    pub fn status_code(self) -> u16 {
        match self {
            WriteStatus::Created => 201,
            WriteStatus::Replaced => 200,
        }
    }
}

/// A content item as served to readers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedContentItem {
    /// Path the item is served from
    pub base_path: String,
    #[serde(default)]
    pub content_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub need_ids: Vec<String>,
    pub locale: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public_updated_at: Option<DateTime<Utc>>,
    pub phase: String,
    #[serde(default)]
    pub analytics_identifier: Option<String>,
    #[serde(default)]
    pub details: Value,
    /// Link type -> expanded linked items
    #[serde(default)]
    pub links: BTreeMap<String, Vec<LinkedItem>>,
}

/// A linked item, expanded for readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedItem {
    #[serde(default)]
    pub content_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    pub base_path: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Where the linked item's JSON can be fetched
    pub api_url: String,
    /// Where the linked item is rendered
    pub web_url: String,
    pub locale: String,
}
