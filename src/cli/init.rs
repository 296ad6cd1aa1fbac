//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use cyberaware::config::Config;

/// Write the commented default config file
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    // Default to global config path
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if !Config::init_at(&config_path, force)? {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    println!("Created: {}", config_path.display());
    Ok(())
}
