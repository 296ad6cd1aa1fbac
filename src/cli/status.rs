//! Status command implementation

use anyhow::Result;
use std::path::Path;

use cyberaware::config::Config;
use cyberaware::game::{PlayerStats, XpStore};
use cyberaware::timer::progress_bar;

/// Show total XP, rank and progress toward the next rank
pub fn status_command(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let stats = PlayerStats::new(config.xp_store().load());

    if json {
        let view = serde_json::json!({
            "total_xp": stats.total_xp,
            "rank": stats.rank,
            "next_rank": stats.next_rank(),
            "xp_in_current_rank": stats.xp_in_current_rank,
            "xp_to_next_rank": stats.xp_to_next_rank,
            "rank_progress": stats.progress(),
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Rank:     {}", stats.rank);
    println!("Total XP: {}", stats.total_xp);
    match stats.next_rank() {
        Some(next) => println!(
            "Progress: {} {}/{} toward {}",
            progress_bar(stats.progress(), 20),
            stats.xp_in_current_rank,
            stats.xp_to_next_rank,
            next
        ),
        None => println!(
            "Progress: {} top rank reached",
            progress_bar(stats.progress(), 20)
        ),
    }

    Ok(())
}
