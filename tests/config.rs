//! Configuration system tests
//!
//! Tests for config paths and loading panel config from YAML.

use std::io::Write;

use swipebar::config::SwipeBarConfig;
use swipebar::config_paths;
use swipebar::options::SwipeBarOptions;
use swipebar::{Coordinator, PanelSide};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("swipebar"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(config));
    }
}

// ========================================================================
// Loading
// ========================================================================

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "defaults:\n  transition_ms: 300\nright:\n  sidebar_width_px: 280\n  show_overlay: false"
    )
    .unwrap();

    let config = SwipeBarConfig::load_from(file.path()).unwrap();
    assert_eq!(config.defaults.transition_ms, Some(300));
    assert_eq!(config.right.sidebar_width_px, Some(280.0));
    assert_eq!(config.right.show_overlay, Some(false));

    let coordinator = Coordinator::from_config(&config);
    assert_eq!(coordinator.options(PanelSide::Left).transition_ms, 300);
    assert_eq!(coordinator.options(PanelSide::Right).sidebar_width_px, 280.0);
    assert_eq!(coordinator.options(PanelSide::Left).sidebar_width_px, 320.0);
    assert!(!coordinator.options(PanelSide::Right).show_overlay);
}

#[test]
fn test_load_from_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = SwipeBarConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_load_from_invalid_yaml_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "left: [not, a, map]").unwrap();
    let err = SwipeBarConfig::load_from(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = SwipeBarConfig {
        bottom: SwipeBarOptions {
            mid_anchor_point: Some(true),
            mid_anchor_point_px: Some(180.0),
            ..Default::default()
        },
        ..Default::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(SwipeBarConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_mid_anchor_derived_from_height() {
    let config = SwipeBarConfig::from_yaml_str("bottom:\n  sidebar_height_px: 600\n").unwrap();
    let coordinator = Coordinator::from_config(&config);
    assert_eq!(coordinator.options(PanelSide::Bottom).mid_anchor_point_px, 200.0);
}
