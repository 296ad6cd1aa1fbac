//! End-of-session results

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ledger::GameState;
use super::rank::Rank;

/// Accuracy as a whole percentage, rounded half-up; 0 when nothing was answered
pub fn accuracy_percent(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    // round(correct / total * 100)
    ((correct * 200 + total) / (total * 2)) as u8
}

/// Snapshot shown when a quiz ends
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_xp: u64,
    pub correct_answers: u32,
    pub total_answers: u32,
    pub accuracy: u8,
    pub best_streak: u32,
    pub total_xp: u64,
    pub rank: Rank,
    /// Accuracy reached the configured pass mark
    pub passed: bool,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn from_state(state: &GameState, pass_accuracy: u8) -> Self {
        let accuracy = accuracy_percent(state.correct_answers, state.total_answers);

        Self {
            session_xp: state.session_xp,
            correct_answers: state.correct_answers,
            total_answers: state.total_answers,
            accuracy,
            best_streak: state.streak.best,
            total_xp: state.total_xp,
            rank: Rank::for_xp(state.total_xp),
            passed: accuracy >= pass_accuracy,
            finished_at: Utc::now(),
        }
    }
}
