//! Read expiry with 15 minute default and 30 second minimum lifetimes.

use crate::common::*;
use chrono::Duration;
use serde_json::json;

fn store() -> TestStore {
    let store = TestStore::with_config(ContentStoreConfig {
        default_ttl_secs: 15 * 60,
        minimum_ttl_secs: 30,
        ..ContentStoreConfig::default()
    });
    store.put_item("/vat-rates", &vat_rates()).unwrap();
    store
}

fn schedule(store: &TestStore, offset: Duration) {
    let intent = json!({
        "publish_time": (noon() + offset).to_rfc3339(),
        "rendering_app": "frontend",
        "routes": [{"path": "/vat-rates", "type": "exact"}]
    });
    store.put_intent("/vat-rates", &intent).unwrap();
}

fn expires_at(store: &TestStore) -> chrono::DateTime<chrono::Utc> {
    store.item("/vat-rates").1
}

#[test]
fn no_intent() {
    let store = store();
    assert_eq!(expires_at(&store), noon() + Duration::minutes(15));
}

#[test]
fn intent_in_five_minutes() {
    let store = store();
    schedule(&store, Duration::minutes(5));
    assert_eq!(expires_at(&store), noon() + Duration::minutes(5));
}

#[test]
fn intent_five_minutes_ago() {
    let store = store();
    schedule(&store, -Duration::minutes(5));
    assert_eq!(expires_at(&store), noon() + Duration::minutes(15));
}

#[test]
fn intent_in_one_second() {
    let store = store();
    schedule(&store, Duration::seconds(1));
    assert_eq!(expires_at(&store), noon() + Duration::seconds(30));
}

#[test]
fn expiry_moves_with_the_clock() {
    let store = store();
    schedule(&store, Duration::minutes(20));
    assert_eq!(expires_at(&store), noon() + Duration::minutes(15));

    store.clock.advance(Duration::minutes(10));
    assert_eq!(expires_at(&store), noon() + Duration::minutes(20));
}
