//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: each variant has typed fields
//! - **Serializable**: can be converted to/from JSON
//!
//! # Categories
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Input | `MalformedInput`, `InvalidPath` | Rejected before any record is built |
//! | Not Found | `NotFound` | Nothing stored at the path |
//! | Validation | `Unprocessable` | Field errors, nothing persisted |
//! | Routing | `Registration` | Routing tier failed after persisting |
//! | System | `Internal` | Store failures |

use content_store_core::FieldErrors;
use serde::{Deserialize, Serialize};

/// Command execution errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Input ====================
    /// Request body is not parseable JSON
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// Path is empty or not absolute; the request is not routable
    #[error("invalid path: '{path}'")]
    InvalidPath { path: String },

    // ==================== Not Found ====================
    /// Nothing stored at the path
    #[error("not found: {base_path}")]
    NotFound { base_path: String },

    // ==================== Validation ====================
    /// The record failed validation; every field error is listed
    #[error("unprocessable: {} invalid field(s)", .errors.len())]
    Unprocessable { errors: FieldErrors },

    // ==================== Routing ====================
    /// The routing tier refused the route set. The record stays persisted.
    #[error("route registration failed for {base_path}: {reason}")]
    Registration { base_path: String, reason: String },

    // ==================== System ====================
    /// Store failure
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// HTTP status a surface layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MalformedInput { .. } | Error::InvalidPath { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::Unprocessable { .. } => 422,
            Error::Registration { .. } => 502,
            Error::Internal { .. } => 500,
        }
    }
}
