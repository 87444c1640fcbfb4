//! Cache expiry bounded by publish intents
//!
//! A document read shortly before a scheduled publish should not be cached
//! past the publish time, but never for less than a floor either.

use chrono::{DateTime, Duration, Utc};
use content_store_core::{ContentStoreConfig, PublishIntent};

/// When a response read at `now` stops being fresh
///
/// - no intent, or an intent whose publish time is not in the future:
///   `now + default_ttl`
/// - otherwise the earlier of `now + default_ttl` and the publish time,
///   raised to `now + minimum_ttl` if that is later
///
/// Sums past the representable range saturate at the latest instant.
pub fn cache_expiry(
    now: DateTime<Utc>,
    intent: Option<&PublishIntent>,
    default_ttl: Duration,
    minimum_ttl: Duration,
) -> DateTime<Utc> {
    let default_expiry = saturating_add(now, default_ttl);
    let upcoming = intent
        .filter(|intent| !intent.is_past(now))
        .and_then(|intent| intent.publish_time);
    match upcoming {
        Some(publish_time) => default_expiry
            .min(publish_time)
            .max(saturating_add(now, minimum_ttl)),
        None => default_expiry,
    }
}

fn saturating_add(at: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    at.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// [`cache_expiry`] with the configured lifetimes
pub fn configured_cache_expiry(
    config: &ContentStoreConfig,
    now: DateTime<Utc>,
    intent: Option<&PublishIntent>,
) -> DateTime<Utc> {
    cache_expiry(now, intent, config.default_ttl(), config.minimum_ttl())
}
