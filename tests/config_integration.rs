//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use serial_test::serial;
use tesseract4d::config::{AppConfig, RotationModeConfig};

fn temp_config_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("tesseract4d_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("T4D_SIMULATION__FRAMES");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.tesseracts.len(), 1);
    assert_eq!(config.tesseracts[0].edge_length, 1.0);
    assert_eq!(config.tesseracts[0].rotation_speed, 20.0);
    assert_eq!(config.tesseracts[0].rotation_mode, RotationModeConfig::Incremental);
    assert_eq!(config.rendering.line_width, 0.05);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("T4D_SIMULATION__FRAMES", "7");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("T4D_SIMULATION__FRAMES");
    assert_eq!(config.simulation.frames, 7);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = temp_config_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[rendering]\nline_width = 0.05\nreport_interval = 60\n",
    )
    .unwrap();
    fs::write(
        dir.join("user.toml"),
        "[[tesseracts]]\nedge_length = 3.0\nrotation_speed = 90.0\nrotation_mode = \"absolute\"\n\n[rendering]\nline_width = 0.2\nreport_interval = 0\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.tesseracts[0].edge_length, 3.0);
    assert_eq!(config.tesseracts[0].rotation_mode, RotationModeConfig::Absolute);
    assert_eq!(config.rendering.line_width, 0.2);
    assert_eq!(config.rendering.report_interval, 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.tesseracts.len(), 1);
    assert_eq!(config.simulation.max_delta, 0.25);
}

#[test]
#[serial]
fn test_invalid_edge_length_rejected() {
    let dir = temp_config_dir("invalid");
    fs::write(
        dir.join("default.toml"),
        "[[tesseracts]]\nedge_length = nan\nrotation_speed = 20.0\n",
    )
    .unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("edge_length"));

    fs::remove_dir_all(&dir).unwrap();
}
