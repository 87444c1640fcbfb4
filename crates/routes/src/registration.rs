//! Route registration against the routing tier
//!
//! One call to [`RouteRegistrationCoordinator::register`] stages every
//! change for a route set and finishes with exactly one commit. There is no
//! retry and no locking: a failing call stops the registration and the error
//! goes back to the caller, leaving any staged calls uncommitted.

use crate::route::{MatchType, RouteKind};
use crate::route_set::RegisterableRouteSet;
use crate::router::{RouterError, RoutingTier};
use content_store_core::ContentStoreConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A routing-tier call failed
    #[error(transparent)]
    Router(#[from] RouterError),

    /// A route or redirect carries an unknown match type
    #[error("cannot register {path}: unknown match type '{match_type}'")]
    InvalidMatchType {
        /// Offending path
        path: String,
        /// Type as stored
        match_type: String,
    },

    /// Backend routes were requested without a rendering app
    #[error("cannot register routes for {base_path}: no rendering app")]
    MissingRenderingApp {
        /// Route set's base path
        base_path: String,
    },
}

/// Stages and commits route sets against a routing tier
#[derive(Clone)]
pub struct RouteRegistrationCoordinator {
    router: Arc<dyn RoutingTier>,
    config: Arc<ContentStoreConfig>,
}

impl RouteRegistrationCoordinator {
    /// Create a coordinator over a routing tier
    pub fn new(router: Arc<dyn RoutingTier>, config: Arc<ContentStoreConfig>) -> Self {
        Self { router, config }
    }

    /// Register a route set
    ///
    /// - empty set: nothing is sent, not even a commit
    /// - redirect set: every redirect
    /// - otherwise: the rendering app as a backend if any route is served by
    ///   one, then every route by its kind
    ///
    /// followed by a single commit.
    pub fn register(&self, set: &RegisterableRouteSet) -> Result<(), RegistrationError> {
        if set.is_empty() {
            debug!(target: "content_store::routes", base_path = %set.base_path, "Nothing to register");
            return Ok(());
        }

        let result = self
            .stage(set)
            .and_then(|()| self.router.commit().map_err(RegistrationError::from));
        match &result {
            Ok(()) => info!(
                target: "content_store::routes",
                base_path = %set.base_path,
                routes = set.routes.len(),
                redirects = set.redirects.len(),
                "Routes registered"
            ),
            Err(e) => warn!(
                target: "content_store::routes",
                base_path = %set.base_path,
                error = %e,
                "Route registration failed"
            ),
        }
        result
    }

    fn stage(&self, set: &RegisterableRouteSet) -> Result<(), RegistrationError> {
        if set.is_redirect {
            for redirect in &set.redirects {
                let match_type = parse_match_type(&redirect.path, &redirect.match_type)?;
                self.router
                    .add_redirect(&redirect.path, match_type, &redirect.destination)?;
            }
            return Ok(());
        }

        let mut backend = None;
        if set.routes.iter().any(|route| route.kind == RouteKind::Backend) {
            let app = set
                .rendering_app
                .as_deref()
                .filter(|app| !app.is_empty())
                .ok_or_else(|| RegistrationError::MissingRenderingApp {
                    base_path: set.base_path.clone(),
                })?;
            self.router.add_backend(app, &self.config.backend_url(app))?;
            backend = Some(app);
        }
        for route in &set.routes {
            let match_type = parse_match_type(&route.path, &route.match_type)?;
            match (route.kind, backend) {
                (RouteKind::Backend, Some(app)) => {
                    self.router.add_route(&route.path, match_type, app)?
                }
                _ => self.router.add_gone_route(&route.path, match_type)?,
            }
        }
        Ok(())
    }
}

fn parse_match_type(path: &str, raw: &str) -> Result<MatchType, RegistrationError> {
    MatchType::parse(raw).ok_or_else(|| RegistrationError::InvalidMatchType {
        path: path.to_string(),
        match_type: raw.to_string(),
    })
}
