//! Field validation and strict decoding through the executor.

use crate::common::*;
use serde_json::json;

#[test]
fn every_missing_required_field_is_reported_at_once() {
    let store = TestStore::new();
    let payload = json!({
        "format": "answer",
        "update_type": "major",
        "routes": [{"path": "/vat-rates", "type": "exact"}]
    });
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(
        errors.fields(),
        vec!["public_updated_at", "rendering_app", "title"]
    );
}

#[test]
fn unsupported_locale() {
    let store = TestStore::new();
    let errors = TestStore::rejected(
        store.put_item("/vat-rates", &with(vat_rates(), "locale", json!("xx"))),
    );
    assert_eq!(errors.get("locale"), &["must be a supported locale".to_string()]);
}

#[test]
fn invalid_format_and_rendering_app() {
    let store = TestStore::new();
    let payload = with(
        with(vat_rates(), "format", json!("Answer Page")),
        "rendering_app",
        json!("Frontend"),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.get("format"), &["is invalid".to_string()]);
    assert_eq!(errors.get("rendering_app"), &["is invalid".to_string()]);
}

#[test]
fn unrecognised_fields_are_listed_in_input_order_and_short_circuit() {
    let store = TestStore::new();
    let payload = with(
        with(without(vat_rates(), "title"), "zebra", json!(1)),
        "apple",
        json!(2),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"base": ["unrecognised field(s) zebra, apple in input"]})
    );
}

#[test]
fn container_type_mismatch_short_circuits() {
    let store = TestStore::new();
    let payload = with(without(vat_rates(), "title"), "need_ids", json!("100123"));
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.fields(), vec![BASE_FIELD]);
    assert_eq!(
        errors.get(BASE_FIELD),
        &["Value of type string cannot be written to field need_ids of type array".to_string()]
    );
}

#[test]
fn route_entries_with_extra_keys_are_invalid() {
    let store = TestStore::new();
    let payload = with(
        vat_rates(),
        "routes",
        json!([{"path": "/vat-rates", "type": "exact", "rendering_app": "frontend"}]),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert!(errors.get("routes").contains(&"are invalid".to_string()));
}

#[test]
fn non_string_route_values_are_reported_once() {
    let store = TestStore::new();
    let payload = with(
        vat_rates(),
        "routes",
        json!([
            {"path": "/vat-rates", "type": "exact"},
            {"path": 5, "type": "exact"}
        ]),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.get("routes"), &["are invalid".to_string()]);
    assert!(store.stored("/vat-rates").is_none());
    assert!(store.router.calls().is_empty());
}

#[test]
fn non_string_redirect_destination_is_reported_once() {
    let store = TestStore::new();
    let payload = json!({
        "format": "redirect",
        "publishing_app": "publisher",
        "update_type": "major",
        "redirects": [
            {"path": "/vat-rates", "type": "exact", "destination": "/vat"},
            {"path": "/vat-rates/old", "type": "exact", "destination": false}
        ]
    });
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.get("redirects"), &["are invalid".to_string()]);
}

#[test]
fn links_are_checked() {
    let store = TestStore::new();
    let payload = with(
        vat_rates(),
        "links",
        json!({"Related Items": [], "available_translations": []}),
    );
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(
        errors.get("links"),
        &["Invalid link types: Related Items and available_translations".to_string()]
    );

    let payload = with(vat_rates(), "links", json!({"related": ["not-a-uuid"]}));
    let errors = TestStore::rejected(store.put_item("/vat-rates", &payload));
    assert_eq!(errors.get("links"), &["must map to lists of UUIDs".to_string()]);
}

#[test]
fn payload_base_path_must_match() {
    let store = TestStore::new();
    let errors = TestStore::rejected(store.put_item(
        "/vat-rates",
        &with(vat_rates(), "base_path", json!("/other")),
    ));
    assert_eq!(
        errors.get("base_path"),
        &["does not match the path being written".to_string()]
    );
}

#[test]
fn malformed_body_is_rejected_before_validation() {
    let store = TestStore::new();
    let result = store.executor.execute(Command::PutContentItem {
        base_path: "/vat-rates".into(),
        body: "{\"title\": \"VAT".into(),
    });
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
    assert!(store.documents.is_empty());
}

#[test]
fn non_object_body_is_a_base_error() {
    let store = TestStore::new();
    let errors = TestStore::rejected(store.put_item("/vat-rates", &json!(["title"])));
    assert_eq!(errors.fields(), vec![BASE_FIELD]);
}

#[test]
fn unroutable_paths() {
    let store = TestStore::new();
    for path in ["", "vat-rates"] {
        let result = store.put_item(path, &vat_rates());
        assert!(matches!(result, Err(Error::InvalidPath { .. })), "{path:?}");
    }
}

#[test]
fn routable_but_malformed_path_is_a_field_error() {
    let store = TestStore::new();
    let payload = with(
        without(vat_rates(), "base_path"),
        "routes",
        json!([{"path": "/vat rates", "type": "exact"}]),
    );
    let errors = TestStore::rejected(store.put_item("/vat rates", &payload));
    assert_eq!(
        errors.get("base_path"),
        &["is not a valid absolute URL path".to_string()]
    );
}
