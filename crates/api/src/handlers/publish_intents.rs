//! Publish intent command handlers.

use crate::bridge::{parse_body, require_path, Services};
use crate::types::WriteStatus;
use crate::{Error, Output, Result};

/// Handle PutPublishIntent command.
pub(crate) fn put_publish_intent(s: &Services, base_path: String, body: String) -> Result<Output> {
    require_path(&base_path)?;
    let attributes = parse_body(&body)?;
    let result = s.publish_intents.create_or_replace(&base_path, &attributes)?;
    match WriteStatus::from_outcome(result.outcome) {
        Some(status) => Ok(Output::Written { base_path, status }),
        None => Err(Error::Unprocessable {
            errors: result.errors,
        }),
    }
}

/// Handle GetPublishIntent command.
pub(crate) fn get_publish_intent(s: &Services, base_path: String) -> Result<Output> {
    require_path(&base_path)?;
    s.publish_intents
        .find(&base_path)?
        .map(Output::PublishIntent)
        .ok_or(Error::NotFound { base_path })
}

/// Handle DeletePublishIntent command.
pub(crate) fn delete_publish_intent(s: &Services, base_path: String) -> Result<Output> {
    require_path(&base_path)?;
    if s.publish_intents.delete(&base_path)? {
        Ok(Output::Unit)
    } else {
        Err(Error::NotFound { base_path })
    }
}
