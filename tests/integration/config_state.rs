// Integration tests for config loading and how it reaches the tracker

use folio::config::Config;
use folio::ui::AppState;
use std::time::Duration;

use crate::common::helpers::*;

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[navigation]
header_height = 4

[scroll]
duration_ms = 120
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.navigation.header_height, 4);
    // threshold follows the header when unset
    assert_eq!(config.navigation.effective_threshold(), 4);
    assert!(config.scroll.smooth);
    assert_eq!(config.smooth_scroll().duration, Duration::from_millis(120));
    assert_eq!(config.content.dataset, "production");
}

#[test]
fn test_explicit_threshold_reaches_tracker() {
    let mut config = Config::default();
    config.navigation.offset_threshold = Some(6);
    config.navigation.eager_update = false;

    let options = config.tracker_options();
    assert_eq!(options.offset_threshold, 6);
    assert_eq!(options.header_height, 3);
    assert!(!options.eager_update);

    let state = AppState::new(fixture_store(), &config).unwrap();
    assert_eq!(state.page.tracker.options(), options);
}

#[test]
fn test_configured_content_path_loads() {
    let mut config = Config::default();
    config.content.path = Some(fixture_path());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.content.path, Some(fixture_path()));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigation\nheader_height = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}
