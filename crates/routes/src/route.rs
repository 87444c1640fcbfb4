//! Registerable route value objects
//!
//! Each value is built from stored data without validation and checked
//! independently with `is_valid()`. A route carries a [`RouteKind`] tag that
//! tells the registration coordinator whether to point it at a backend or
//! mark it gone.

use content_store_core::path::is_absolute_path;
use content_store_core::{RedirectEntry, RouteEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a route path matches incoming requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The request path must equal the route path
    Exact,
    /// The request path must start with the route path's segments
    Prefix,
}

impl MatchType {
    /// Parse a stored match type; only `exact` and `prefix` are accepted
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "exact" => Some(MatchType::Exact),
            "prefix" => Some(MatchType::Prefix),
            _ => None,
        }
    }

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a registered route resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteKind {
    /// Served by the route set's rendering app
    Backend,
    /// Withdrawn; the router answers with a terminal "gone"
    Gone,
}

/// A route to register with the routing tier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisterableRoute {
    /// Path as stored
    pub path: String,
    /// Match type as stored
    pub match_type: String,
    /// Backend route or gone marker
    pub kind: RouteKind,
}

impl RegisterableRoute {
    /// A route served by a backend
    pub fn backend(path: impl Into<String>, match_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            match_type: match_type.into(),
            kind: RouteKind::Backend,
        }
    }

    /// A gone route
    pub fn gone(path: impl Into<String>, match_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            match_type: match_type.into(),
            kind: RouteKind::Gone,
        }
    }

    /// Build from a stored entry with the given kind, keeping only path and type
    pub fn from_entry(entry: &RouteEntry, kind: RouteKind) -> Self {
        Self {
            path: entry.path.clone(),
            match_type: entry.match_type.clone(),
            kind,
        }
    }

    /// Parsed match type, if valid
    pub fn match_type(&self) -> Option<MatchType> {
        MatchType::parse(&self.match_type)
    }

    /// Valid when the path is absolute and the type is `exact` or `prefix`
    pub fn is_valid(&self) -> bool {
        is_absolute_path(&self.path) && self.match_type().is_some()
    }
}

/// A redirect to register with the routing tier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisterableRedirect {
    /// Path as stored
    pub path: String,
    /// Match type as stored
    pub match_type: String,
    /// Destination path
    pub destination: String,
}

impl RegisterableRedirect {
    /// Create a redirect value
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

    /// Parsed match type, if valid
    pub fn match_type(&self) -> Option<MatchType> {
        MatchType::parse(&self.match_type)
    }

    /// Valid when path and destination are absolute and the type is known
    pub fn is_valid(&self) -> bool {
        is_absolute_path(&self.path)
            && is_absolute_path(&self.destination)
            && self.match_type().is_some()
    }
}

impl From<&RedirectEntry> for RegisterableRedirect {
    fn from(entry: &RedirectEntry) -> Self {
        Self::new(
            entry.path.clone(),
            entry.match_type.clone(),
            entry.destination.clone(),
        )
    }
}
