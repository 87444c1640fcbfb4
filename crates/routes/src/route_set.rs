//! Route sets derived from documents and publish intents
//!
//! A [`RegisterableRouteSet`] is never stored. It is built fresh for each
//! validation or registration and dropped afterwards.

use crate::route::{RegisterableRedirect, RegisterableRoute, RouteKind};
use content_store_core::{ContentDocument, PublishIntent};

/// Everything the routing tier needs to know about one `base_path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterableRouteSet {
    /// Path that owns the set
    pub base_path: String,
    /// Backend for `RouteKind::Backend` routes
    pub rendering_app: Option<String>,
    /// Routes, in stored order
    pub routes: Vec<RegisterableRoute>,
    /// Redirects, in stored order
    pub redirects: Vec<RegisterableRedirect>,
    /// Derived from a `redirect` document
    pub is_redirect: bool,
    /// Derived from a `gone` document
    pub is_gone: bool,
    /// Adds routes to an existing document rather than replacing its set
    pub is_supplementary: bool,
}

impl RegisterableRouteSet {
    /// Derive the route set of a stored (or candidate) document
    ///
    /// Routes on a `gone` document become gone routes; on any other format
    /// they become backend routes.
    pub fn from_document(doc: &ContentDocument) -> Self {
        let kind = if doc.is_gone() {
            RouteKind::Gone
        } else {
            RouteKind::Backend
        };
        Self {
            base_path: doc.base_path.clone(),
            rendering_app: doc.rendering_app.clone(),
            routes: doc
                .routes
                .iter()
                .map(|entry| RegisterableRoute::from_entry(entry, kind))
                .collect(),
            redirects: doc.redirects.iter().map(RegisterableRedirect::from).collect(),
            is_redirect: doc.is_redirect(),
            is_gone: doc.is_gone(),
            is_supplementary: false,
        }
    }

    /// Derive the route set of a publish intent
    ///
    /// When a document already lives at the intent's path, only the intent's
    /// routes that the document does not already have are kept, and the set
    /// is marked supplementary: it provisions extra routes ahead of the next
    /// publish instead of standing in for the document's full set.
    pub fn from_publish_intent(
        intent: &PublishIntent,
        existing: Option<&ContentDocument>,
    ) -> Self {
        let routes = match existing {
            Some(doc) => intent
                .routes
                .iter()
                .filter(|route| !doc.routes.contains(route))
                .collect::<Vec<_>>(),
            None => intent.routes.iter().collect(),
        };
        Self {
            base_path: intent.base_path.clone(),
            rendering_app: intent.rendering_app.clone(),
            routes: routes
                .into_iter()
                .map(|entry| RegisterableRoute::from_entry(entry, RouteKind::Backend))
                .collect(),
            redirects: intent
                .redirects
                .iter()
                .map(RegisterableRedirect::from)
                .collect(),
            is_redirect: false,
            is_gone: false,
            is_supplementary: existing.is_some(),
        }
    }

    /// True when there is nothing to register
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.redirects.is_empty()
    }
}
