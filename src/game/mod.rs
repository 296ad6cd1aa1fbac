//! Gamification engine: XP, ranks, streaks and session results
//!
//! # Usage
//!
//! ```ignore
//! let mut ledger = GameLedger::new(FileXpStore::open_default());
//!
//! // Once per answered question
//! let result = ledger.answer(correct, elapsed_secs, Difficulty::Medium, 50);
//! println!("+{} XP", result.xp());
//!
//! let stats = ledger.player_stats();
//! println!("{} ({:.0}%)", stats.rank, stats.progress() * 100.0);
//! ```

mod ledger;
mod rank;
mod rewards;
mod store;
mod streaks;
mod summary;

pub use ledger::{AnswerResult, GameLedger, GameState, GamificationEvent, RankUp};
pub use rank::{PlayerStats, Rank, ELITE_DISPLAY_CEILING, RANKS};
pub use rewards::{speed_bonus, streak_multiplier, Difficulty, XpAward};
pub use store::{parse_total_xp, FileXpStore, MemoryXpStore, StoreError, XpStore, XP_KEY};
pub use streaks::{Streak, StreakChange};
pub use summary::{accuracy_percent, SessionSummary};
