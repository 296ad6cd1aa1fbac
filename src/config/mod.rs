//! Configuration loading and management

mod io;
mod settings;

pub use io::{write_atomic, DEFAULT_CONFIG};
pub use settings::{GameSettings, StorageSettings, TimerSettings};

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::FileXpStore;
use crate::timer::MAX_QUESTION_SECS;

/// Main configuration structure (`~/.cyberaware/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scoring settings
    #[serde(default)]
    pub game: GameSettings,

    /// Question timer settings
    #[serde(default)]
    pub timer: TimerSettings,

    /// Storage locations
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Check values that parse fine but cannot be played with
    pub fn validate(&self) -> Result<()> {
        let secs = self.timer.question_secs;
        if !(1..=MAX_QUESTION_SECS).contains(&secs) {
            bail!(
                "timer.question_secs must be between 1 and {}, got {}",
                MAX_QUESTION_SECS,
                secs
            );
        }
        if self.game.pass_accuracy > 100 {
            bail!(
                "game.pass_accuracy must be at most 100, got {}",
                self.game.pass_accuracy
            );
        }
        Ok(())
    }

    /// Load from an explicit path, or the global config when none is given
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Time allowed per question
    pub fn question_duration(&self) -> Duration {
        Duration::from_secs(self.timer.question_secs)
    }

    /// Directory holding persisted game state
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// File store for total XP under [`Config::data_dir`]
    pub fn xp_store(&self) -> FileXpStore {
        FileXpStore::in_dir(&self.data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.game.base_points, 50);
        assert_eq!(config.game.pass_accuracy, 70);
        assert_eq!(config.question_duration(), Duration::from_secs(20));
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [timer]
            question_secs = 30

            [storage]
            data_dir = "/tmp/cyberaware-test"
            "#,
        )
        .unwrap();

        assert_eq!(config.timer.question_secs, 30);
        assert_eq!(config.game.base_points, 50);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/cyberaware-test"));
    }

    #[test]
    fn test_question_secs_out_of_range_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        for secs in [0, MAX_QUESTION_SECS + 1] {
            std::fs::write(&path, format!("[timer]\nquestion_secs = {}\n", secs)).unwrap();
            let err = Config::from_file(&path).unwrap_err();
            assert!(
                format!("{:#}", err).contains("question_secs"),
                "unexpected error for {}: {:#}",
                secs,
                err
            );
        }

        std::fs::write(&path, format!("[timer]\nquestion_secs = {}\n", MAX_QUESTION_SECS)).unwrap();
        assert!(Config::from_file(&path).is_ok());
    }

    #[test]
    fn test_pass_accuracy_above_100_is_rejected() {
        let mut config = Config::default();
        config.game.pass_accuracy = 101;
        assert!(config.validate().is_err());
        config.game.pass_accuracy = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_xp_store_follows_data_dir() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        assert_eq!(config.xp_store().path(), dir.path().join("total_xp"));
    }
}
