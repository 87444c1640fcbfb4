//! Structural validation of route sets
//!
//! Every rule is checked and every failure recorded; nothing short-circuits.
//! Failures are reported under `routes` or `redirects` so they can be merged
//! straight into a document's field errors.

use crate::route_set::RegisterableRouteSet;
use content_store_core::path::{is_beneath, is_extension_of};
use content_store_core::FieldErrors;
use std::collections::HashSet;

/// Field receiving route failures
pub const ROUTES_FIELD: &str = "routes";
/// Field receiving redirect failures
pub const REDIRECTS_FIELD: &str = "redirects";

impl RegisterableRouteSet {
    /// Check the set's structural invariants
    ///
    /// 1. every route and redirect is individually valid
    /// 2. every path is the base path, the base path plus an extension, or
    ///    beneath the base path
    /// 3. route paths are unique, and redirect paths are unique
    /// 4. a redirect set has no routes
    /// 5. a full, non-redirect set routes the base path itself
    /// 6. a redirect set redirects the base path itself
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !self.routes.iter().all(|route| route.is_valid()) {
            errors.add(ROUTES_FIELD, "are invalid");
        }
        if !self.redirects.iter().all(|redirect| redirect.is_valid()) {
            errors.add(REDIRECTS_FIELD, "are invalid");
        }

        if !self.routes.iter().all(|route| self.contains_path(&route.path)) {
            errors.add(ROUTES_FIELD, "must be below the base path");
        }
        if !self
            .redirects
            .iter()
            .all(|redirect| self.contains_path(&redirect.path))
        {
            errors.add(REDIRECTS_FIELD, "must be below the base path");
        }

        if !all_unique(self.routes.iter().map(|route| route.path.as_str())) {
            errors.add(ROUTES_FIELD, "must have unique paths");
        }
        if !all_unique(self.redirects.iter().map(|redirect| redirect.path.as_str())) {
            errors.add(REDIRECTS_FIELD, "must have unique paths");
        }

        if self.is_redirect && !self.routes.is_empty() {
            errors.add(ROUTES_FIELD, "redirect items cannot have routes");
        }

        if !(self.is_redirect || self.is_supplementary)
            && !self.routes.iter().any(|route| route.path == self.base_path)
        {
            errors.add(ROUTES_FIELD, "must include the base_path");
        }

        if self.is_redirect
            && !self
                .redirects
                .iter()
                .any(|redirect| redirect.path == self.base_path)
        {
            errors.add(REDIRECTS_FIELD, "must include the base_path");
        }

        errors
    }

    /// True when [`validate`](Self::validate) records nothing
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    fn contains_path(&self, path: &str) -> bool {
        path == self.base_path
            || is_extension_of(&self.base_path, path)
            || is_beneath(&self.base_path, path)
    }
}

fn all_unique<'a>(paths: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    paths.into_iter().all(|path| seen.insert(path))
}
