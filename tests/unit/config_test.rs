//! Unit tests for configuration persistence.

use tourcast::config::{load_config_from, save_config_to, GuideConfig};

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = GuideConfig::default();
    config.api.base_url = "https://pois.example.com/api".to_string();
    config.api.language = "fr".to_string();
    config.audio.volume = 55;
    config.position.replay_interval_ms = 250;

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.api.base_url, "https://pois.example.com/api");
    assert_eq!(loaded.api.language, "fr");
    assert_eq!(loaded.audio.volume, 55);
    assert_eq!(loaded.position.replay_interval_ms, 250);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    save_config_to(&GuideConfig::default(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_garbage_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not toml {{{").unwrap();

    assert!(load_config_from(&path).is_err());
}
