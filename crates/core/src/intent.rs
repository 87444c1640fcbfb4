//! Publish intents
//!
//! A publish intent announces that content at `base_path` will be published
//! at `publish_time`, so its routes can be provisioned ahead of time and
//! caches can shorten their lifetimes. It is related to the document at the
//! same path by lookup only.

use crate::attributes::{check_payload, Attributes, FieldKind, Schema};
use crate::document::{is_blank, is_valid_app_name, RedirectEntry, RouteEntry};
use crate::error::{DecodeError, FieldErrors};
use crate::path::{is_absolute_path, INVALID_PATH_MESSAGE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A scheduled publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishIntent {
    /// Absolute URL path; the primary key
    pub base_path: String,
    /// When the content is due to be published
    #[serde(default)]
    pub publish_time: Option<DateTime<Utc>>,
    /// App publishing the content
    #[serde(default)]
    pub publishing_app: Option<String>,
    /// App that will render the content
    #[serde(default)]
    pub rendering_app: Option<String>,
    /// Routes to provision
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    /// Redirects to provision
    #[serde(default)]
    pub redirects: Vec<RedirectEntry>,
}

impl PublishIntent {
    /// Fields a write payload may carry
    pub const SCHEMA: Schema = &[
        ("base_path", FieldKind::String),
        ("publish_time", FieldKind::Timestamp),
        ("publishing_app", FieldKind::String),
        ("rendering_app", FieldKind::String),
        ("routes", FieldKind::Array),
        ("redirects", FieldKind::Array),
    ];

    /// An empty intent at `base_path`
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            publish_time: None,
            publishing_app: None,
            rendering_app: None,
            routes: Vec::new(),
            redirects: Vec::new(),
        }
    }

    /// Build a candidate intent from a write payload
    pub fn from_attributes(
        base_path: &str,
        attributes: &Map<String, Value>,
    ) -> Result<(Self, FieldErrors), DecodeError> {
        check_payload(Self::SCHEMA, attributes)?;

        let mut reader = Attributes::new(attributes);
        let mut errors = FieldErrors::new();
        if let Some(given) = reader.string("base_path") {
            if given != base_path {
                errors.add("base_path", "does not match the path being written");
            }
        }

        let intent = Self {
            base_path: base_path.to_string(),
            publish_time: reader.timestamp("publish_time"),
            publishing_app: reader.string("publishing_app"),
            rendering_app: reader.string("rendering_app"),
            routes: reader.routes("routes"),
            redirects: reader.redirects("redirects"),
        };
        errors.merge(reader.into_errors());
        Ok((intent, errors))
    }

    /// Field-level validation; route-set structure is validated separately
    pub fn validate_fields(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !is_absolute_path(&self.base_path) {
            errors.add("base_path", INVALID_PATH_MESSAGE);
        }
        if self.publish_time.is_none() {
            errors.add("publish_time", "can't be blank");
        }
        match self.rendering_app.as_deref() {
            app if is_blank(app) => errors.add("rendering_app", "can't be blank"),
            Some(app) if !is_valid_app_name(app) => errors.add("rendering_app", "is invalid"),
            _ => {}
        }
        errors
    }

    /// True when the publish time is not in the future (or unknown)
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.publish_time.map_or(true, |t| t <= now)
    }

    /// True when the publish time is before `cutoff` (or unknown)
    pub fn is_published_before(&self, cutoff: DateTime<Utc>) -> bool {
        self.publish_time.map_or(true, |t| t < cutoff)
    }
}
