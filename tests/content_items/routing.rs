//! Redirect, gone and placeholder items at the routing tier.

use crate::common::*;
use serde_json::json;

fn redirect_item() -> serde_json::Value {
    json!({
        "format": "redirect",
        "publishing_app": "publisher",
        "update_type": "major",
        "redirects": [
            {"path": "/old-vat", "type": "prefix", "destination": "/vat-rates"},
            {"path": "/old-vat.json", "type": "exact", "destination": "/vat-rates.json"}
        ]
    })
}

#[test]
fn redirect_item_registers_only_redirects() {
    let store = TestStore::new();
    store.put_item("/old-vat", &redirect_item()).unwrap();

    assert_eq!(store.router.count("add_backend"), 0);
    assert_eq!(store.router.count("add_route"), 0);
    assert_eq!(store.router.count("add_redirect"), 2);
    assert_eq!(store.router.count("commit"), 1);
    assert_eq!(
        store.router.lookup("/old-vat/anything"),
        Some(RouteTarget::Redirect {
            destination: "/vat-rates".into()
        })
    );
}

#[test]
fn redirect_item_with_routes_fails() {
    let store = TestStore::new();
    let payload = with(
        redirect_item(),
        "routes",
        json!([{"path": "/old-vat", "type": "exact"}]),
    );
    let errors = TestStore::rejected(store.put_item("/old-vat", &payload));
    assert_eq!(
        errors.get("routes"),
        &["redirect items cannot have routes".to_string()]
    );
    assert!(store.router.calls().is_empty());
}

#[test]
fn redirect_item_must_redirect_its_base_path() {
    let store = TestStore::new();
    let payload = with(
        redirect_item(),
        "redirects",
        json!([{"path": "/old-vat/a", "type": "exact", "destination": "/vat-rates"}]),
    );
    let errors = TestStore::rejected(store.put_item("/old-vat", &payload));
    assert_eq!(
        errors.get("redirects"),
        &["must include the base_path".to_string()]
    );
}

#[test]
fn gone_item_registers_gone_routes() {
    let store = TestStore::new();
    let payload = json!({
        "format": "gone",
        "publishing_app": "publisher",
        "update_type": "major",
        "routes": [
            {"path": "/vat-rates", "type": "exact"},
            {"path": "/vat-rates/old", "type": "prefix"}
        ]
    });
    store.put_item("/vat-rates", &payload).unwrap();

    assert_eq!(store.router.count("add_backend"), 0);
    assert_eq!(store.router.count("add_gone_route"), 2);
    assert_eq!(store.router.lookup("/vat-rates"), Some(RouteTarget::Gone));
    assert_eq!(store.router.lookup("/vat-rates/old/page"), Some(RouteTarget::Gone));
}

#[test]
fn placeholder_items_are_not_registered() {
    let store = TestStore::new();
    store
        .put_item(
            "/vat-rates",
            &with(vat_rates(), "format", json!("placeholder_answer")),
        )
        .unwrap();
    assert!(store.stored("/vat-rates").is_some());
    assert!(store.router.calls().is_empty());
    assert_eq!(store.notifier.published().len(), 1);
}

#[test]
fn placeholder_prefix_is_configurable() {
    let config = ContentStoreConfig {
        placeholder_format_prefix: "draft".into(),
        ..ContentStoreConfig::default()
    };
    let store = TestStore::with_config(config);
    store
        .put_item("/vat-rates", &with(vat_rates(), "format", json!("draft_answer")))
        .unwrap();
    assert!(store.router.calls().is_empty());

    store
        .put_item(
            "/tax",
            &with(
                item("/tax", "0c8a0d8c-7e7b-4d3f-9b1a-000000000001", "en"),
                "format",
                json!("placeholder_answer"),
            ),
        )
        .unwrap();
    assert_eq!(store.router.count("commit"), 1);
}

#[test]
fn duplicate_route_paths_fail_regardless_of_type() {
    let store = TestStore::new();
    let payload = with(
        vat_rates(),
        "routes",
        json!([
            {"path": "/vat-rates", "type": "exact"},
            {"path": "/vat-rates", "type": "prefix"}
        ]),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.get("routes"), &["must have unique paths".to_string()]);
}

#[test]
fn extension_and_nested_routes_share_the_backend() {
    let store = TestStore::new();
    let payload = with(
        vat_rates(),
        "routes",
        json!([
            {"path": "/vat-rates", "type": "exact"},
            {"path": "/vat-rates.json", "type": "exact"},
            {"path": "/vat-rates/print", "type": "exact"}
        ]),
    );
    store.put_item("/vat-rates", &payload).unwrap();
    assert_eq!(store.router.count("add_backend"), 1);
    assert_eq!(store.router.count("add_route"), 3);
    assert!(store.router.lookup("/vat-rates/print").is_some());
}

#[test]
fn backend_url_follows_configured_template() {
    let config = ContentStoreConfig {
        backend_url_template: "https://{app}.example.internal".into(),
        ..ContentStoreConfig::default()
    };
    let store = TestStore::with_config(config);
    store.put_item("/vat-rates", &vat_rates()).unwrap();
    assert_eq!(
        store.router.calls()[0],
        RouterCall::AddBackend {
            name: "frontend".into(),
            url: "https://frontend.example.internal".into()
        }
    );
}
