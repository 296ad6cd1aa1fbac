//! Reset command implementation

use anyhow::Result;
use std::path::Path;

use cyberaware::config::Config;
use cyberaware::game::XpStore;

/// Delete the saved XP total
pub fn reset_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let store = config.xp_store();
    store.clear()?;

    println!("Cleared saved XP: {}", store.path().display());
    Ok(())
}
