//! Shared test utilities for ledger integration tests

use std::path::PathBuf;
use tempfile::TempDir;

use cyberaware::config::Config;

/// Config whose storage lives in a fresh temp directory.
///
/// The `TempDir` must be kept alive for as long as the config is used.
pub fn temp_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = Some(temp_dir.path().to_path_buf());
    (temp_dir, config)
}

/// Path where the file store keeps total XP under `config`
#[allow(dead_code)]
pub fn xp_file(config: &Config) -> PathBuf {
    config.xp_store().path().to_path_buf()
}
