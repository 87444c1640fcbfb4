//! Content documents
//!
//! A [`ContentDocument`] is keyed by its `base_path`. Documents whose format
//! is `redirect` or `gone` are non-renderable: they only exist to tell the
//! router what to do with their paths, so the presentation fields are not
//! required on them.

use crate::attributes::{check_payload, to_sentence, Attributes, FieldKind, Schema};
use crate::config::ContentStoreConfig;
use crate::error::{DecodeError, FieldErrors};
use crate::path::{is_absolute_path, INVALID_PATH_MESSAGE};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Format of documents that redirect their paths elsewhere
pub const REDIRECT_FORMAT: &str = "redirect";
/// Format of documents whose paths have been withdrawn
pub const GONE_FORMAT: &str = "gone";
/// Link type reserved for computed translations
pub const AVAILABLE_TRANSLATIONS: &str = "available_translations";
/// Accepted values of `phase`
pub const PHASES: &[&str] = &["alpha", "beta", "live"];

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[a-z0-9_]+\z").expect("valid regex"));
static APP_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[a-z0-9-]*\z").expect("valid regex"));

/// True for `format`, `update_type` and link-type tags: `[a-z0-9_]+`
pub fn is_valid_tag(value: &str) -> bool {
    TAG_PATTERN.is_match(value)
}

/// True for rendering/publishing app names: `[a-z0-9-]*`
pub fn is_valid_app_name(value: &str) -> bool {
    APP_NAME_PATTERN.is_match(value)
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// A stored route: a path and its match type (`exact` or `prefix`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Absolute path
    pub path: String,
    /// Match type as supplied
    #[serde(rename = "type")]
    pub match_type: String,
}

impl RouteEntry {
    /// Create a route entry
    pub fn new(path: impl Into<String>, match_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            match_type: match_type.into(),
        }
    }
}

/// A stored redirect: a path, its match type and a destination path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// Absolute path being redirected
    pub path: String,
    /// Match type as supplied
    #[serde(rename = "type")]
    pub match_type: String,
    /// Absolute path to redirect to
    pub destination: String,
}

impl RedirectEntry {
    /// Create a redirect entry
    pub fn new(
        path: impl Into<String>,
        match_type: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            match_type: match_type.into(),
            destination: destination.into(),
        }
    }
}

/// A versioned content document
///
/// `update_type` is transient: it accompanies a write but is never
/// serialized or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Absolute URL path; the primary key
    pub base_path: String,
    /// Correlates translations and versions of the same content
    #[serde(default)]
    pub content_id: Option<Uuid>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Format tag; `redirect` and `gone` are non-renderable
    #[serde(default)]
    pub format: Option<String>,
    /// Locale code
    pub locale: String,
    /// Opaque need identifiers
    #[serde(default)]
    pub need_ids: Vec<String>,
    /// When the content last changed for the public
    #[serde(default)]
    pub public_updated_at: Option<DateTime<Utc>>,
    /// Opaque format-specific payload
    #[serde(default)]
    pub details: Value,
    /// App that published the document
    #[serde(default)]
    pub publishing_app: Option<String>,
    /// App that renders the document's routes
    #[serde(default)]
    pub rendering_app: Option<String>,
    /// Routes served by the rendering app
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    /// Redirects owned by this document
    #[serde(default)]
    pub redirects: Vec<RedirectEntry>,
    /// Link type -> linked content ids
    #[serde(default)]
    pub links: BTreeMap<String, Vec<Uuid>>,
    /// Publication phase
    pub phase: String,
    /// Optional analytics identifier
    #[serde(default)]
    pub analytics_identifier: Option<String>,
    /// Stamped by the store on every successful persist
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Kind of update this write represents
    #[serde(skip)]
    pub update_type: Option<String>,
}

impl ContentDocument {
    /// Fields a write payload may carry
    pub const SCHEMA: Schema = &[
        ("base_path", FieldKind::String),
        ("content_id", FieldKind::Uuid),
        ("title", FieldKind::String),
        ("description", FieldKind::String),
        ("format", FieldKind::String),
        ("locale", FieldKind::String),
        ("need_ids", FieldKind::Array),
        ("public_updated_at", FieldKind::Timestamp),
        ("details", FieldKind::Object),
        ("publishing_app", FieldKind::String),
        ("rendering_app", FieldKind::String),
        ("routes", FieldKind::Array),
        ("redirects", FieldKind::Array),
        ("links", FieldKind::Object),
        ("phase", FieldKind::String),
        ("analytics_identifier", FieldKind::String),
        ("update_type", FieldKind::String),
    ];

    /// An empty document at `base_path`, with default locale and phase
    pub fn new(base_path: impl Into<String>, config: &ContentStoreConfig) -> Self {
        Self {
            base_path: base_path.into(),
            content_id: None,
            title: None,
            description: None,
            format: None,
            locale: config.default_locale.clone(),
            need_ids: Vec::new(),
            public_updated_at: None,
            details: Value::Object(Map::new()),
            publishing_app: None,
            rendering_app: None,
            routes: Vec::new(),
            redirects: Vec::new(),
            links: BTreeMap::new(),
            phase: "live".to_string(),
            analytics_identifier: None,
            updated_at: None,
            update_type: None,
        }
    }

    /// Build a candidate document from a write payload
    ///
    /// Returns `Err` for structural problems (unknown keys, mis-shaped
    /// values). Otherwise returns the document together with any conversion
    /// errors, which the caller merges into full validation.
    ///
    /// A `base_path` inside the payload must equal the one being written.
    pub fn from_attributes(
        base_path: &str,
        attributes: &Map<String, Value>,
        config: &ContentStoreConfig,
    ) -> Result<(Self, FieldErrors), DecodeError> {
        check_payload(Self::SCHEMA, attributes)?;

        let mut reader = Attributes::new(attributes);
        let mut doc = Self::new(base_path, config);
        let mut errors = FieldErrors::new();

        if let Some(given) = reader.string("base_path") {
            if given != base_path {
                errors.add("base_path", "does not match the path being written");
            }
        }
        doc.content_id = reader.uuid("content_id");
        doc.title = reader.string("title");
        doc.description = reader.string("description");
        doc.format = reader.string("format");
        if let Some(locale) = reader.string("locale") {
            doc.locale = locale;
        }
        doc.need_ids = reader.string_list("need_ids");
        doc.public_updated_at = reader.timestamp("public_updated_at");
        doc.details = reader.object("details");
        doc.publishing_app = reader.string("publishing_app");
        doc.rendering_app = reader.string("rendering_app");
        doc.routes = reader.routes("routes");
        doc.redirects = reader.redirects("redirects");
        doc.links = reader.links("links");
        if let Some(phase) = reader.string("phase") {
            doc.phase = phase;
        }
        doc.analytics_identifier = reader.string("analytics_identifier");
        doc.update_type = reader.string("update_type");

        errors.merge(reader.into_errors());
        Ok((doc, errors))
    }

    /// Format tag, empty when absent
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or_default()
    }

    /// True when the format is `redirect`
    pub fn is_redirect(&self) -> bool {
        self.format() == REDIRECT_FORMAT
    }

    /// True when the format is `gone`
    pub fn is_gone(&self) -> bool {
        self.format() == GONE_FORMAT
    }

    /// True unless the document is a redirect or gone marker
    pub fn is_renderable(&self) -> bool {
        !(self.is_redirect() || self.is_gone())
    }

    /// Compare persisted fields, ignoring `updated_at` and `update_type`
    pub fn same_content_as(&self, other: &ContentDocument) -> bool {
        let strip = |doc: &ContentDocument| ContentDocument {
            updated_at: None,
            update_type: None,
            ..doc.clone()
        };
        strip(self) == strip(other)
    }

    /// Field-level validation
    ///
    /// `previous` is the document currently stored at the same path, if any;
    /// `update_type` is only required when this write changes persisted
    /// fields. Route-set structure is validated separately.
    pub fn validate_fields(
        &self,
        config: &ContentStoreConfig,
        previous: Option<&ContentDocument>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !is_absolute_path(&self.base_path) {
            errors.add("base_path", INVALID_PATH_MESSAGE);
        }

        if !self.format.as_deref().map_or(false, is_valid_tag) {
            errors.add("format", "is invalid");
        }

        if self.is_renderable() {
            if is_blank(self.title.as_deref()) {
                errors.add("title", "can't be blank");
            }
            match self.rendering_app.as_deref() {
                app if is_blank(app) => errors.add("rendering_app", "can't be blank"),
                Some(app) if !is_valid_app_name(app) => errors.add("rendering_app", "is invalid"),
                _ => {}
            }
            if self.public_updated_at.is_none() {
                errors.add("public_updated_at", "can't be blank");
            }
            if !config.is_supported_locale(&self.locale) {
                errors.add("locale", "must be a supported locale");
            }
        }

        if !PHASES.contains(&self.phase.as_str()) {
            errors.add("phase", "is not included in the list");
        }

        let changed = previous.map_or(true, |prev| !self.same_content_as(prev));
        match self.update_type.as_deref() {
            update_type if is_blank(update_type) => {
                if changed {
                    errors.add("update_type", "can't be blank");
                }
            }
            Some(update_type) if !is_valid_tag(update_type) => {
                errors.add("update_type", "is invalid")
            }
            _ => {}
        }

        let bad_link_types: Vec<String> = self
            .links
            .keys()
            .filter(|key| !is_valid_tag(key) || key.as_str() == AVAILABLE_TRANSLATIONS)
            .cloned()
            .collect();
        if !bad_link_types.is_empty() {
            errors.add(
                "links",
                format!("Invalid link types: {}", to_sentence(&bad_link_types)),
            );
        }

        errors
    }

    /// All content ids referenced from `links`, first occurrence order
    pub fn linked_content_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for id in self.links.values().flatten() {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}
