//! Error types for the content store data model
//!
//! Two families live here:
//! - [`FieldErrors`]: accumulated, per-field validation messages. These are
//!   data, not failures: a write that produces them is reported back to the
//!   caller as a whole so one response lists every problem.
//! - [`DecodeError`]: structural problems with a write payload (unknown keys,
//!   wrong value shapes). These short-circuit, because no document can be
//!   built from the payload at all.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name used for whole-entity errors
pub const BASE_FIELD: &str = "base";

/// Validation messages keyed by field name
///
/// Serializes as a plain JSON object mapping each field to its ordered list
/// of human-readable messages, e.g. `{"title": ["can't be blank"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error set holding a single `base` message
    pub fn base(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(BASE_FIELD, message);
        errors
    }

    /// Append a message to a field, keeping insertion order per field
    ///
    /// A message already recorded on the field is not repeated.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        let messages = self.0.entry(field.to_string()).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    /// Append every message of `other`
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            for message in messages {
                self.add(&field, message);
            }
        }
    }

    /// Messages recorded against a field (empty when none)
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no messages were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, messages)` in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field names carrying errors
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl From<DecodeError> for FieldErrors {
    fn from(err: DecodeError) -> Self {
        FieldErrors::base(err.to_string())
    }
}

/// Structural write-payload errors
///
/// Both variants are reported under the synthetic `base` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload carried keys outside the recognised field set
    #[error("unrecognised field(s) {} in input", .fields.join(", "))]
    UnrecognisedFields {
        /// Offending keys, in input order
        fields: Vec<String>,
    },

    /// A field was given a value whose shape does not match its declaration
    #[error("Value of type {actual} cannot be written to field {field} of type {expected}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Declared kind of the field
        expected: &'static str,
        /// Kind of the supplied value
        actual: &'static str,
    },

    /// The payload is not a JSON object at all
    #[error("Input must be a JSON object, got {actual}")]
    NotAnObject {
        /// Kind of the supplied value
        actual: &'static str,
    },
}
