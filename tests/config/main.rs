//! Configuration Tests
//!
//! A config file on disk drives the executor it is loaded into.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ContentStoreConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config, ContentStoreConfig::default());
}

#[test]
fn written_default_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ContentStoreConfig::write_default_if_missing(&path).unwrap();
    assert_eq!(
        ContentStoreConfig::from_file(&path).unwrap(),
        ContentStoreConfig::default()
    );
}

#[test]
fn file_settings_reach_the_executor() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default_ttl_secs = 600\nbackend_url_template = \"http://{app}.internal\"\n",
    )
    .unwrap();
    let config = ContentStoreConfig::load_or_default(dir.path()).unwrap();
    let store = TestStore::with_config(config);

    store.put_item("/vat-rates", &vat_rates()).unwrap();
    assert_eq!(
        store.router.calls()[0],
        RouterCall::AddBackend {
            name: "frontend".into(),
            url: "http://frontend.internal".into()
        }
    );
    assert_eq!(store.item("/vat-rates").1, noon() + chrono::Duration::minutes(10));
}

#[test]
fn invalid_settings_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default_ttl_secs = 1\nminimum_ttl_secs = 60\n",
    )
    .unwrap();
    let err = ContentStoreConfig::load_or_default(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn unknown_settings_are_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "default_ttl = 600\n").unwrap();
    let err = ContentStoreConfig::load_or_default(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn out_of_range_lifetimes_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default_ttl_secs = 1000000000000000\n",
    )
    .unwrap();
    let err = ContentStoreConfig::load_or_default(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            setting: "default_ttl_secs",
            ..
        }
    ));
}
