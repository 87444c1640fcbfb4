//! Writing, reading and removing publish intents.

use crate::common::*;
use chrono::Duration;
use serde_json::json;

fn intent(publish_in_minutes: i64) -> serde_json::Value {
    json!({
        "publish_time": (noon() + Duration::minutes(publish_in_minutes)).to_rfc3339(),
        "publishing_app": "publisher",
        "rendering_app": "frontend",
        "routes": [
            {"path": "/vat-rates", "type": "exact"},
            {"path": "/vat-rates.json", "type": "exact"}
        ]
    })
}

#[test]
fn intent_provisions_routes_before_publishing() {
    let store = TestStore::new();
    let output = store.put_intent("/vat-rates", &intent(10)).unwrap();
    assert_eq!(output.status_code(), 201);

    assert!(store.stored("/vat-rates").is_none());
    assert_eq!(store.router.count("add_route"), 2);
    assert!(store.router.lookup("/vat-rates.json").is_some());

    match store.executor.execute(Command::GetPublishIntent {
        base_path: "/vat-rates".into(),
    }) {
        Ok(Output::PublishIntent(stored)) => {
            assert_eq!(stored.publish_time, Some(noon() + Duration::minutes(10)));
            assert_eq!(stored.rendering_app.as_deref(), Some("frontend"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn intent_for_live_item_only_adds_new_routes() {
    let store = TestStore::new();
    store.put_item("/vat-rates", &vat_rates()).unwrap();
    store.router.clear_calls();

    store.put_intent("/vat-rates", &intent(10)).unwrap();
    let added: Vec<RouterCall> = store
        .router
        .calls()
        .into_iter()
        .filter(|call| matches!(call, RouterCall::AddRoute { .. }))
        .collect();
    assert_eq!(
        added,
        vec![RouterCall::AddRoute {
            path: "/vat-rates.json".into(),
            match_type: MatchType::Exact,
            backend: "frontend".into()
        }]
    );
}

#[test]
fn intent_without_new_routes_touches_nothing() {
    let store = TestStore::new();
    store.put_item("/vat-rates", &vat_rates()).unwrap();
    store.router.clear_calls();

    let same_routes = with(
        intent(10),
        "routes",
        json!([{"path": "/vat-rates", "type": "exact"}]),
    );
    store.put_intent("/vat-rates", &same_routes).unwrap();
    assert!(store.router.calls().is_empty());
}

#[test]
fn invalid_intent_is_rejected() {
    let store = TestStore::new();
    let payload = with(without(intent(10), "publish_time"), "rendering_app", json!(""));
    let errors = TestStore::rejected(store.put_intent("/vat-rates", &payload));
    assert_eq!(errors.fields(), vec!["publish_time", "rendering_app"]);
    assert!(store.intents.is_empty());
    assert!(store.router.calls().is_empty());
}

#[test]
fn intent_routes_must_be_beneath_base_path() {
    let store = TestStore::new();
    let payload = with(
        intent(10),
        "routes",
        json!([
            {"path": "/vat-rates", "type": "exact"},
            {"path": "/tax", "type": "exact"}
        ]),
    );
    let errors = TestStore::rejected(store.put_intent("/vat-rates", &payload));
    assert_eq!(
        errors.get("routes"),
        &["must be below the base path".to_string()]
    );
}

#[test]
fn delete_reports_missing_intents() {
    let store = TestStore::new();
    store.put_intent("/vat-rates", &intent(10)).unwrap();

    let delete = || {
        store.executor.execute(Command::DeletePublishIntent {
            base_path: "/vat-rates".into(),
        })
    };
    assert_eq!(delete(), Ok(Output::Unit));
    assert!(matches!(delete(), Err(Error::NotFound { .. })));
}

#[test]
fn cleanup_removes_intents_past_the_leeway() {
    let store = TestStore::new();
    store.put_intent("/vat-rates", &intent(-10)).unwrap();
    store.put_intent("/tax", &with(intent(-1), "routes", json!([{"path": "/tax", "type": "exact"}])))
        .unwrap();
    store
        .put_intent("/budget", &with(intent(60), "routes", json!([{"path": "/budget", "type": "exact"}])))
        .unwrap();

    assert_eq!(store.executor.cleanup_publish_intents().unwrap(), 1);
    assert!(store.intents.find("/vat-rates").unwrap().is_none());
    assert!(store.intents.find("/tax").unwrap().is_some());
    assert!(store.intents.find("/budget").unwrap().is_some());
}
