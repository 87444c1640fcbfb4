//! Properties over generated payloads.

use crate::common::*;
use content_store_routes::RegisterableRouteSet;
use proptest::prelude::*;
use serde_json::json;

const REQUIRED: [&str; 5] = ["title", "rendering_app", "public_updated_at", "locale", "format"];

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,10}"
}

fn route_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("exact"), Just("prefix")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A renderable item persists exactly when no required field is missing
    #[test]
    fn persists_iff_required_fields_present(drop in prop::collection::vec(any::<bool>(), 5)) {
        let store = TestStore::new();
        let mut payload = vat_rates();
        for (field, dropped) in REQUIRED.iter().zip(&drop) {
            if *dropped {
                payload = match *field {
                    // An absent locale falls back to the default; only an
                    // unsupported one is missing
                    "locale" => with(payload, "locale", json!("xx")),
                    other => without(payload, other),
                };
            }
        }

        let result = store.put_item("/vat-rates", &payload);
        let any_dropped = drop.iter().any(|d| *d);
        prop_assert_eq!(result.is_ok(), !any_dropped);
        prop_assert_eq!(store.stored("/vat-rates").is_some(), !any_dropped);
    }

    /// Route sets rebuilt from persisted items always validate
    #[test]
    fn persisted_items_yield_valid_route_sets(
        base in prop::collection::vec(segment(), 1..3),
        children in prop::collection::vec((prop::collection::vec(segment(), 1..3), route_type()), 0..5),
        with_json in any::<bool>(),
    ) {
        let store = TestStore::new();
        let base_path = format!("/{}", base.join("/"));

        let mut routes = vec![json!({"path": base_path, "type": "exact"})];
        if with_json {
            routes.push(json!({"path": format!("{base_path}.json"), "type": "exact"}));
        }
        for (child, match_type) in &children {
            routes.push(json!({
                "path": format!("{}/{}", base_path, child.join("/")),
                "type": match_type
            }));
        }
        let payload = with(without(vat_rates(), "base_path"), "routes", json!(routes));

        if store.put_item(&base_path, &payload).is_ok() {
            let stored = store.stored(&base_path).unwrap();
            let set = RegisterableRouteSet::from_document(&stored);
            prop_assert!(set.is_valid(), "{:?}", set.validate());
        } else {
            // Only repeated child paths can make the payload invalid
            let mut paths: Vec<String> = children.iter().map(|(c, _)| c.join("/")).collect();
            paths.sort();
            paths.dedup();
            prop_assert!(paths.len() < children.len());
        }
    }
}
