//! Write outcomes

use content_store_core::FieldErrors;

/// What a create-or-replace did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nothing existed at the path; the record was persisted
    Created,
    /// A record existed at the path and was replaced
    Replaced,
    /// The record was invalid; nothing was persisted
    Failed,
}

impl Outcome {
    /// True for `Created` and `Replaced`
    pub fn is_success(self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}

/// Result of a create-or-replace: the outcome, the candidate record, and
/// the field errors that made it fail (empty on success)
#[derive(Debug, Clone, PartialEq)]
pub struct WriteResult<T> {
    /// What happened
    pub outcome: Outcome,
    /// The record as persisted, or the rejected candidate
    pub record: T,
    /// Accumulated field errors
    pub errors: FieldErrors,
}

impl<T> WriteResult<T> {
    pub(crate) fn failed(record: T, errors: FieldErrors) -> Self {
        Self {
            outcome: Outcome::Failed,
            record,
            errors,
        }
    }

    pub(crate) fn persisted(exists: bool, record: T) -> Self {
        Self {
            outcome: if exists {
                Outcome::Replaced
            } else {
                Outcome::Created
            },
            record,
            errors: FieldErrors::new(),
        }
    }
}
