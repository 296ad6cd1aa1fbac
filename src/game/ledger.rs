//! XP/Rank ledger - core gamification state
//!
//! Converts answer outcomes into XP, keeps streak and accuracy counters, and
//! persists total XP through an injected [`XpStore`].

use serde::Serialize;

use super::rank::{PlayerStats, Rank};
use super::rewards::{Difficulty, XpAward};
use super::store::XpStore;
use super::streaks::{Streak, StreakChange};
use super::summary::SessionSummary;

/// Mutable state of one play session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Cumulative XP, rehydrated from the store; only ever increases
    pub total_xp: u64,
    pub streak: Streak,
    pub correct_answers: u32,
    pub total_answers: u32,
    /// XP earned since the last session reset
    pub session_xp: u64,
}

/// A rank change caused by an XP award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankUp {
    pub old_rank: Rank,
    pub new_rank: Rank,
}

/// Events produced by ledger operations, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamificationEvent {
    XpAwarded { amount: u64, reason: String },
    RankUp(RankUp),
    StreakExtended { count: u32 },
    StreakBroken { lost: u32 },
}

impl std::fmt::Display for GamificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::XpAwarded { amount, reason } => write!(f, "+{} XP ({})", amount, reason),
            Self::RankUp(up) => write!(f, "Rank up: {} -> {}", up.old_rank, up.new_rank),
            Self::StreakExtended { count } => write!(f, "Streak: {}", count),
            Self::StreakBroken { lost } => write!(f, "Streak of {} lost", lost),
        }
    }
}

/// Outcome of [`GameLedger::answer`]
#[derive(Debug, Clone)]
pub struct AnswerResult {
    pub correct: bool,
    /// Award breakdown (None for incorrect answers)
    pub award: Option<XpAward>,
    pub events: Vec<GamificationEvent>,
}

impl AnswerResult {
    pub fn xp(&self) -> u64 {
        self.award.map(|a| a.total).unwrap_or(0)
    }
}

/// Owner of a session's [`GameState`]
///
/// One ledger per active session; hand it by `&mut` to whatever drives the quiz.
pub struct GameLedger {
    state: GameState,
    store: Box<dyn XpStore>,
}

impl GameLedger {
    /// Create a ledger, loading total XP from `store` once
    pub fn new<S: XpStore + 'static>(store: S) -> Self {
        let total_xp = store.load();
        tracing::debug!("Ledger rehydrated with {} XP", total_xp);

        Self {
            state: GameState {
                total_xp,
                ..GameState::default()
            },
            store: Box::new(store),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn total_xp(&self) -> u64 {
        self.state.total_xp
    }

    pub fn session_xp(&self) -> u64 {
        self.state.session_xp
    }

    pub fn current_streak(&self) -> u32 {
        self.state.streak.current
    }

    pub fn best_streak(&self) -> u32 {
        self.state.streak.best
    }

    pub fn correct_answers(&self) -> u32 {
        self.state.correct_answers
    }

    pub fn total_answers(&self) -> u32 {
        self.state.total_answers
    }

    pub fn rank(&self) -> Rank {
        Rank::for_xp(self.state.total_xp)
    }

    pub fn player_stats(&self) -> PlayerStats {
        PlayerStats::new(self.state.total_xp)
    }

    pub fn rank_progress(&self) -> f64 {
        self.player_stats().progress()
    }

    // ========================================
    // ANSWERS
    // ========================================

    /// Update streak and accuracy counters. Timeouts count as incorrect.
    pub fn record_answer(&mut self, correct: bool) -> Option<GamificationEvent> {
        self.state.total_answers += 1;
        if correct {
            self.state.correct_answers += 1;
        }

        match self.state.streak.record(correct) {
            StreakChange::Extended { count } => Some(GamificationEvent::StreakExtended { count }),
            StreakChange::Broken { lost } => Some(GamificationEvent::StreakBroken { lost }),
            StreakChange::Unchanged => None,
        }
    }

    /// Award XP for an answer and return the amount.
    ///
    /// `streak_before` is the streak held before this answer was recorded.
    pub fn add_xp(
        &mut self,
        base_points: u32,
        speed_seconds: f64,
        difficulty: Difficulty,
        streak_before: u32,
    ) -> u64 {
        let award = XpAward::compute(base_points, speed_seconds, difficulty, streak_before);
        self.apply_award(&award);
        award.total
    }

    /// Record an answer and award XP for it, in the right order.
    ///
    /// The streak multiplier uses the streak from before this answer. Incorrect
    /// answers earn nothing.
    pub fn answer(
        &mut self,
        correct: bool,
        speed_seconds: f64,
        difficulty: Difficulty,
        base_points: u32,
    ) -> AnswerResult {
        let streak_before = self.state.streak.current;
        let mut events = Vec::new();

        let award = if correct {
            let award = XpAward::compute(base_points, speed_seconds, difficulty, streak_before);
            events.push(GamificationEvent::XpAwarded {
                amount: award.total,
                reason: award.reason(),
            });
            if let Some(up) = self.apply_award(&award) {
                events.push(GamificationEvent::RankUp(up));
            }
            Some(award)
        } else {
            None
        };

        events.extend(self.record_answer(correct));

        AnswerResult {
            correct,
            award,
            events,
        }
    }

    fn apply_award(&mut self, award: &XpAward) -> Option<RankUp> {
        let old_rank = self.rank();
        self.state.total_xp = self.state.total_xp.saturating_add(award.total);
        self.state.session_xp = self.state.session_xp.saturating_add(award.total);
        self.persist();

        let new_rank = self.rank();
        if new_rank > old_rank {
            tracing::debug!("Rank up: {} -> {}", old_rank, new_rank);
            Some(RankUp { old_rank, new_rank })
        } else {
            None
        }
    }

    /// Write total XP; failures are logged and never roll back memory
    fn persist(&self) {
        if let Err(e) = self.store.save(self.state.total_xp) {
            tracing::warn!("Failed to persist total XP: {}", e);
        }
    }

    // ========================================
    // SESSION
    // ========================================

    /// Start a new attempt: clears session XP and the running streak only.
    ///
    /// Total XP, best streak and accuracy counters are left as they are.
    pub fn reset_session(&mut self) {
        self.state.session_xp = 0;
        self.state.streak.reset_current();
    }

    /// Results-screen view of the session
    pub fn summary(&self, pass_accuracy: u8) -> SessionSummary {
        SessionSummary::from_state(&self.state, pass_accuracy)
    }
}
