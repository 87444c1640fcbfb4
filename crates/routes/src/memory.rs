//! In-process routing table
//!
//! [`InMemoryRouter`] implements [`RoutingTier`] with the same staging
//! semantics as the real routing tier: calls are recorded and staged, and
//! only a `commit` makes them visible to [`InMemoryRouter::lookup`]. It also
//! keeps the full call log and can be told to fail a given operation, which
//! makes it the router used by the store's tests.

use crate::route::MatchType;
use crate::router::{RouterError, RouterResult, RoutingTier};
use content_store_core::path::segments;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};

/// One call received by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterCall {
    /// `add_backend`
    AddBackend {
        /// Backend name
        name: String,
        /// Base URL
        url: String,
    },
    /// `add_route`
    AddRoute {
        /// Route path
        path: String,
        /// Match type
        match_type: MatchType,
        /// Backend name
        backend: String,
    },
    /// `add_redirect`
    AddRedirect {
        /// Route path
        path: String,
        /// Match type
        match_type: MatchType,
        /// Destination path
        destination: String,
    },
    /// `add_gone_route`
    AddGoneRoute {
        /// Route path
        path: String,
        /// Match type
        match_type: MatchType,
    },
    /// `commit`
    Commit,
}

impl RouterCall {
    fn operation(&self) -> &'static str {
        match self {
            RouterCall::AddBackend { .. } => "add_backend",
            RouterCall::AddRoute { .. } => "add_route",
            RouterCall::AddRedirect { .. } => "add_redirect",
            RouterCall::AddGoneRoute { .. } => "add_gone_route",
            RouterCall::Commit => "commit",
        }
    }

    fn target(&self) -> String {
        match self {
            RouterCall::AddBackend { name, .. } => name.clone(),
            RouterCall::AddRoute { path, .. }
            | RouterCall::AddRedirect { path, .. }
            | RouterCall::AddGoneRoute { path, .. } => path.clone(),
            RouterCall::Commit => String::new(),
        }
    }
}

/// What a committed path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Served by a backend
    Backend {
        /// Backend name
        name: String,
        /// Backend base URL at commit time
        url: String,
    },
    /// Redirected
    Redirect {
        /// Destination path
        destination: String,
    },
    /// Gone
    Gone,
}

#[derive(Debug, Clone)]
struct Entry {
    match_type: MatchType,
    target: Target,
}

#[derive(Debug, Clone)]
enum Target {
    Backend(String),
    Redirect(String),
    Gone,
}

#[derive(Default)]
struct State {
    calls: Vec<RouterCall>,
    staged: Vec<RouterCall>,
    backends: HashMap<String, String>,
    routes: BTreeMap<String, Entry>,
    failure: Option<(&'static str, String)>,
}

/// A routing table that lives in memory
#[derive(Default)]
pub struct InMemoryRouter {
    state: Mutex<State>,
}

impl InMemoryRouter {
    /// Create an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call to `operation` fail with `reason`
    pub fn fail_on(&self, operation: &'static str, reason: impl Into<String>) {
        self.state.lock().failure = Some((operation, reason.into()));
    }

    /// Stop injecting failures
    pub fn clear_failure(&self) {
        self.state.lock().failure = None;
    }

    /// Every call received, in order, including failed ones
    pub fn calls(&self) -> Vec<RouterCall> {
        self.state.lock().calls.clone()
    }

    /// Forget the call log (the routing table is kept)
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Number of calls received for `operation`
    pub fn count(&self, operation: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Number of staged, uncommitted calls
    pub fn staged_len(&self) -> usize {
        self.state.lock().staged.len()
    }

    /// Resolve a request path against committed routes
    ///
    /// An exact route on the path wins; otherwise the prefix route with the
    /// most segments that contains the path.
    pub fn lookup(&self, path: &str) -> Option<RouteTarget> {
        let state = self.state.lock();
        let entry = match state.routes.get(path) {
            Some(entry) if entry.match_type == MatchType::Exact => Some(entry),
            _ => {
                let wanted = segments(path);
                state
                    .routes
                    .iter()
                    .filter(|(_, entry)| entry.match_type == MatchType::Prefix)
                    .map(|(route_path, entry)| (segments(route_path), entry))
                    .filter(|(route_segments, _)| wanted.starts_with(route_segments))
                    .max_by_key(|(route_segments, _)| route_segments.len())
                    .map(|(_, entry)| entry)
            }
        }?;

        Some(match &entry.target {
            Target::Backend(name) => RouteTarget::Backend {
                name: name.clone(),
                url: state.backends.get(name).cloned().unwrap_or_default(),
            },
            Target::Redirect(destination) => RouteTarget::Redirect {
                destination: destination.clone(),
            },
            Target::Gone => RouteTarget::Gone,
        })
    }

    fn record(&self, call: RouterCall) -> RouterResult<()> {
        let mut state = self.state.lock();
        state.calls.push(call.clone());

        if let Some((operation, reason)) = &state.failure {
            if *operation == call.operation() {
                return Err(RouterError::Rejected {
                    operation: call.operation(),
                    target: call.target(),
                    reason: reason.clone(),
                });
            }
        }

        match call {
            RouterCall::Commit => {
                let staged = std::mem::take(&mut state.staged);
                for change in staged {
                    apply(&mut state, change);
                }
            }
            other => state.staged.push(other),
        }
        Ok(())
    }
}

fn apply(state: &mut State, change: RouterCall) {
    match change {
        RouterCall::AddBackend { name, url } => {
            state.backends.insert(name, url);
        }
        RouterCall::AddRoute {
            path,
            match_type,
            backend,
        } => {
            state.routes.insert(
                path,
                Entry {
                    match_type,
                    target: Target::Backend(backend),
                },
            );
        }
        RouterCall::AddRedirect {
            path,
            match_type,
            destination,
        } => {
            state.routes.insert(
                path,
                Entry {
                    match_type,
                    target: Target::Redirect(destination),
                },
            );
        }
        RouterCall::AddGoneRoute { path, match_type } => {
            state.routes.insert(
                path,
                Entry {
                    match_type,
                    target: Target::Gone,
                },
            );
        }
        RouterCall::Commit => {}
    }
}

impl RoutingTier for InMemoryRouter {
    fn add_backend(&self, name: &str, url: &str) -> RouterResult<()> {
        self.record(RouterCall::AddBackend {
            name: name.to_string(),
            url: url.to_string(),
        })
    }

    fn add_route(&self, path: &str, match_type: MatchType, backend: &str) -> RouterResult<()> {
        self.record(RouterCall::AddRoute {
            path: path.to_string(),
            match_type,
            backend: backend.to_string(),
        })
    }

    fn add_redirect(
        &self,
        path: &str,
        match_type: MatchType,
        destination: &str,
    ) -> RouterResult<()> {
        self.record(RouterCall::AddRedirect {
            path: path.to_string(),
            match_type,
            destination: destination.to_string(),
        })
    }

    fn add_gone_route(&self, path: &str, match_type: MatchType) -> RouterResult<()> {
        self.record(RouterCall::AddGoneRoute {
            path: path.to_string(),
            match_type,
        })
    }

    fn commit(&self) -> RouterResult<()> {
        self.record(RouterCall::Commit)
    }
}
