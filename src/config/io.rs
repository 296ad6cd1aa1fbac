//! Configuration file I/O operations

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Commented template written by `cyberaware init`
pub const DEFAULT_CONFIG: &str = r#"# cyberaware configuration
# =======================

# Scoring
#   base_points   - points for a correct answer before multipliers (default: 50)
#   pass_accuracy - accuracy percent that counts as a passed session (default: 70)
[game]
base_points = 50
pass_accuracy = 70

# Question timer
#   question_secs - seconds allowed per question (default: 20)
[timer]
question_secs = 20

# Storage
#   data_dir - directory for the saved XP total (default: ~/.cyberaware)
[storage]
# data_dir = "/path/to/dir"
"#;

impl Config {
    /// Get the global config directory path (~/.cyberaware/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cyberaware")
    }

    /// Get the global config file path (~/.cyberaware/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load global configuration from ~/.cyberaware/config.toml.
    /// If no config exists, one is created with defaults.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();

        if !global_path.exists() {
            match Self::init_at(&global_path, false) {
                Ok(_) => tracing::info!("Created {}", global_path.display()),
                // Defaults still work without a file on disk
                Err(e) => tracing::warn!("Failed to create default config: {}", e),
            }
            return Ok(Self::default());
        }

        Self::from_file(&global_path)
    }

    /// Write the commented default config to `path`. Refuses to overwrite unless `force`.
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        write_atomic(path, DEFAULT_CONFIG.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(true)
    }
}

/// Replace the contents of `path` atomically.
///
/// An exclusive lock on a sibling `<name>.lock` file serialises writers; the
/// bytes go to `<name>.tmp` first and are renamed into place. Missing parent
/// directories are created.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sibling_path(path, "lock"))?;
    lock_file.lock_exclusive()?;

    let temp_path = sibling_path(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(bytes)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)?;

    // Lock is released when lock_file is dropped
    Ok(())
}

/// `dir/name` -> `dir/name.<suffix>`
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
