//! Linked items resolve in the reader's locale, else the default locale.

use crate::common::*;
use serde_json::json;

const TARGET: &str = "6b4e7a2c-1f3d-4c8e-9a5b-2d7f0e1c3a94";
const OTHER: &str = "9f2d3c4b-5a6e-4f7d-8c9b-0a1e2f3d4c5b";

fn source(locale: &str, links: serde_json::Value) -> serde_json::Value {
    with(
        item("/source", "11111111-2222-4333-8444-555555555555", locale),
        "links",
        links,
    )
}

fn related_paths(store: &TestStore) -> Vec<String> {
    let (item, _) = store.item("/source");
    item.links["related"]
        .iter()
        .map(|linked| linked.base_path.clone())
        .collect()
}

#[test]
fn resolves_to_reader_locale_when_present() {
    let store = TestStore::new();
    store.put_item("/target", &item("/target", TARGET, "en")).unwrap();
    store.put_item("/target.fr", &item("/target.fr", TARGET, "fr")).unwrap();
    store
        .put_item("/source", &source("fr", json!({"related": [TARGET]})))
        .unwrap();

    assert_eq!(related_paths(&store), vec!["/target.fr"]);
}

#[test]
fn falls_back_to_default_locale() {
    let store = TestStore::new();
    store.put_item("/target", &item("/target", TARGET, "en")).unwrap();
    store
        .put_item("/source", &source("fr", json!({"related": [TARGET]})))
        .unwrap();

    assert_eq!(related_paths(&store), vec!["/target"]);
}

#[test]
fn omitted_when_neither_locale_exists() {
    let store = TestStore::new();
    store.put_item("/target.de", &item("/target.de", TARGET, "de")).unwrap();
    store
        .put_item("/source", &source("fr", json!({"related": [TARGET]})))
        .unwrap();

    assert!(related_paths(&store).is_empty());
}

#[test]
fn link_order_is_kept_and_missing_ids_dropped() {
    let store = TestStore::new();
    store.put_item("/target", &item("/target", TARGET, "en")).unwrap();
    store.put_item("/other", &item("/other", OTHER, "en")).unwrap();
    let missing = "00000000-0000-4000-8000-000000000000";
    store
        .put_item(
            "/source",
            &source("en", json!({"related": [OTHER, missing, TARGET]})),
        )
        .unwrap();

    assert_eq!(related_paths(&store), vec!["/other", "/target"]);
}

#[test]
fn linked_items_are_expanded_with_urls() {
    let store = TestStore::new();
    store.put_item("/target", &item("/target", TARGET, "en")).unwrap();
    store
        .put_item("/source", &source("en", json!({"related": [TARGET]})))
        .unwrap();

    let (presented, _) = store.item("/source");
    let linked = &presented.links["related"][0];
    assert_eq!(linked.title.as_deref(), Some("Title of /target"));
    assert_eq!(linked.api_url, "http://www.localhost/api/content/target");
    assert_eq!(linked.web_url, "http://www.localhost/target");
    assert_eq!(linked.locale, "en");
    assert_eq!(linked.content_id.map(|id| id.to_string()).as_deref(), Some(TARGET));
}

#[test]
fn redirected_targets_do_not_resolve() {
    let store = TestStore::new();
    store
        .put_item(
            "/target",
            &json!({
                "content_id": TARGET,
                "format": "redirect",
                "update_type": "major",
                "redirects": [{"path": "/target", "type": "exact", "destination": "/elsewhere"}]
            }),
        )
        .unwrap();
    store
        .put_item("/source", &source("en", json!({"related": [TARGET]})))
        .unwrap();

    assert!(related_paths(&store).is_empty());
}
