use std::fs;

use tempfile::tempdir;
use wallet_core::{
    config::{Config, ConfigManager},
    errors::WalletError,
    storage::FixtureSet,
};

#[test]
fn directory_fixtures_tolerate_loose_values() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("transactions.json"),
        r#"[
            {"id": "a1", "title": "Stipend", "amount": "250.5", "date": "Jun 3"},
            {"id": 2, "name": "Mystery", "amount": null},
            {"id": 3, "name": "Broken", "amount": {"value": 4}}
        ]"#,
    )
    .unwrap();
    fs::write(dir.path().join("users.json"), r#"{"not": "an array"}"#).unwrap();

    let set = FixtureSet::load_dir(dir.path()).expect("load fixtures");
    assert_eq!(set.transactions.len(), 3);
    assert_eq!(set.transactions[0].amount, 250.5);
    assert_eq!(set.transactions[1].amount, 0.0);
    assert_eq!(set.transactions[2].amount, 0.0);
    assert!(set.users.is_empty());
    assert_eq!(set.wallet.currency, "USD");
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("cards.json"), "[{").unwrap();
    let err = FixtureSet::load_dir(dir.path()).expect_err("malformed");
    assert!(matches!(err, WalletError::Serde(_)));
}

#[test]
fn config_points_at_fixture_directory() {
    let dir = tempdir().expect("tempdir");
    let fixtures = dir.path().join("fixtures");
    fs::create_dir_all(&fixtures).unwrap();
    fs::write(
        fixtures.join("contacts.json"),
        r#"[{"id": 1, "name": "Emina"}]"#,
    )
    .unwrap();

    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        format!(
            r#"{{"locale": "bs-BA", "fixtures_dir": {}}}"#,
            serde_json::to_string(&fixtures).unwrap()
        ),
    )
    .unwrap();

    let config = ConfigManager::with_base_dir(dir.path().to_path_buf())
        .load()
        .expect("config");
    assert_eq!(config.login_delay_ms, 500);
    assert_eq!(config.locale_config().decimal_separator, ',');

    let set = FixtureSet::from_config(&config).expect("fixtures");
    assert_eq!(set.contacts.len(), 1);
    assert_eq!(set.contacts[0].name, "Emina");
    assert!(set.transactions.is_empty());
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = ConfigManager::with_base_dir(dir.path().to_path_buf())
        .load()
        .expect("defaults");
    assert_eq!(config, Config::default());
}
