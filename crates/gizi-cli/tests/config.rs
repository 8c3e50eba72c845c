use std::path::Path;

use gizi_cli::config::{CURRENT_VERSION, GiziConfig, check_version, config_path, load_config, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, GiziConfig::default());
    assert_eq!(config.config_version, CURRENT_VERSION);
}

#[test]
fn explicit_path_wins() {
    let path = config_path(Some(Path::new("/tmp/gizi-test.json"))).unwrap();
    assert_eq!(path, Path::new("/tmp/gizi-test.json"));
}

#[test]
fn unversioned_config_gets_defaults_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "reference_dir": "/data/who" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert!(!config.log_json);
    assert_eq!(config.reference_dir.as_deref(), Some(Path::new("/data/who")));
}

#[test]
fn version_stamp_keeps_existing_values() {
    let json = serde_json::json!({ "log_json": true });
    let checked = check_version(json, 0).unwrap();
    assert_eq!(checked["log_json"], true);
    assert_eq!(checked["config_version"], CURRENT_VERSION);
}

#[test]
fn non_object_config_is_rejected() {
    assert!(check_version(serde_json::json!([1, 2]), 1).is_err());
}

#[test]
fn newer_config_is_rejected() {
    let err = check_version(serde_json::json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn save_stamps_version_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = GiziConfig {
        config_version: 0,
        reference_dir: Some(dir.path().join("tables")),
        log_json: true,
    };
    save_config(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.reference_dir, config.reference_dir);
    assert!(loaded.log_json);
}
