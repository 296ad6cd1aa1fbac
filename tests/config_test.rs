//! Integration tests for config loading and the XP store it selects

use std::time::Duration;

use tempfile::TempDir;

use cyberaware::config::Config;
use cyberaware::game::{Difficulty, GameLedger, XpStore};

#[test]
fn test_load_from_explicit_path_drives_storage_and_timer() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_dir = temp_dir.path().join("data");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[game]\nbase_points = 100\n\n[timer]\nquestion_secs = 15\n\n[storage]\ndata_dir = {:?}\n",
            data_dir.display().to_string()
        ),
    )
    .expect("Failed to write config");

    let config = Config::load_from(Some(&config_path)).expect("config should load");
    assert_eq!(config.game.base_points, 100);
    assert_eq!(config.game.pass_accuracy, 70, "unset keys keep their defaults");
    assert_eq!(config.question_duration(), Duration::from_secs(15));

    let mut ledger = GameLedger::new(config.xp_store());
    ledger.add_xp(config.game.base_points, 20.0, Difficulty::Easy, 0);

    assert!(data_dir.join("total_xp").exists(), "XP should be saved under data_dir");
    assert_eq!(config.xp_store().load(), 100);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = Config::load_from(Some(&temp_dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
fn test_init_writes_loadable_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    assert!(Config::init_at(&config_path, false).expect("init should succeed"));
    let config = Config::from_file(&config_path).expect("template should parse");

    assert_eq!(config.game.base_points, 50);
    assert_eq!(config.question_duration(), Duration::from_secs(20));
    assert!(config.storage.data_dir.is_none());
}
