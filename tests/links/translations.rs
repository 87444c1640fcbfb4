//! Every item lists one translation per locale, itself included.

use crate::common::*;

const GUIDE: &str = "3e1f9c7a-8b2d-4e6f-a1c3-5d7b9f0e2a4c";
const AVAILABLE_TRANSLATIONS: &str = "available_translations";

fn translation_paths(store: &TestStore, base_path: &str) -> Vec<String> {
    let (item, _) = store.item(base_path);
    item.links[AVAILABLE_TRANSLATIONS]
        .iter()
        .map(|linked| linked.base_path.clone())
        .collect()
}

#[test]
fn translations_are_ordered_by_locale() {
    let store = TestStore::new();
    store.put_item("/guide", &item("/guide", GUIDE, "en")).unwrap();
    store.put_item("/guide.fr", &item("/guide.fr", GUIDE, "fr")).unwrap();
    store.put_item("/guide.cy", &item("/guide.cy", GUIDE, "cy")).unwrap();

    let expected = vec!["/guide.cy", "/guide", "/guide.fr"];
    assert_eq!(translation_paths(&store, "/guide"), expected);
    assert_eq!(translation_paths(&store, "/guide.fr"), expected);
}

#[test]
fn latest_item_per_locale_wins() {
    let store = TestStore::new();
    store.put_item("/guide", &item("/guide", GUIDE, "en")).unwrap();
    store.clock.advance(chrono::Duration::minutes(1));
    store.put_item("/guide-v2", &item("/guide-v2", GUIDE, "en")).unwrap();

    assert_eq!(translation_paths(&store, "/guide"), vec!["/guide-v2"]);
}

#[test]
fn item_without_content_id_is_its_own_translation() {
    let store = TestStore::new();
    store.put_item("/vat-rates", &vat_rates()).unwrap();
    assert_eq!(translation_paths(&store, "/vat-rates"), vec!["/vat-rates"]);
}
