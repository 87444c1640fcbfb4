//! Routing-tier abstraction
//!
//! The routing tier is an external system. This trait is the whole surface
//! the content store relies on: calls are staged and only become visible
//! when `commit` is called.
//!
//! Thread safety: implementations are shared between concurrent writes and
//! must be `Send + Sync`. No ordering between concurrent writers is implied.

use crate::route::MatchType;
use thiserror::Error;

/// Result type for routing-tier calls
pub type RouterResult<T> = std::result::Result<T, RouterError>;

/// Failures reported by the routing tier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The routing tier refused a call
    #[error("router rejected {operation} for {target}: {reason}")]
    Rejected {
        /// Operation name (`add_route`, `commit`, ...)
        operation: &'static str,
        /// Path or backend the call was about
        target: String,
        /// Reason given by the routing tier
        reason: String,
    },

    /// The routing tier could not be reached
    #[error("router unavailable: {0}")]
    Unavailable(String),
}

/// Operations offered by the routing tier
pub trait RoutingTier: Send + Sync {
    /// Create or update a backend: app name -> base URL
    ///
    /// Idempotent for an unchanged URL.
    fn add_backend(&self, name: &str, url: &str) -> RouterResult<()>;

    /// Route `path` to a backend
    fn add_route(&self, path: &str, match_type: MatchType, backend: &str) -> RouterResult<()>;

    /// Redirect `path` to `destination`
    fn add_redirect(
        &self,
        path: &str,
        match_type: MatchType,
        destination: &str,
    ) -> RouterResult<()>;

    /// Mark `path` as gone
    fn add_gone_route(&self, path: &str, match_type: MatchType) -> RouterResult<()>;

    /// Make every call staged since the last commit visible at once
    fn commit(&self) -> RouterResult<()>;
}
