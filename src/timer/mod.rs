//! Per-question countdown timer
//!
//! [`Countdown`] is the clock-agnostic state machine; [`QuestionTimer`] runs one
//! on a tokio task and fires a timeout callback at most once.

mod countdown;
mod display;
mod driver;

pub use countdown::{Countdown, TimerPhase};
pub use display::{progress_bar, TimerUrgency};
pub use driver::{QuestionTimer, TimeoutCallback};

/// Default time allowed per question
pub const DEFAULT_QUESTION_SECS: u64 = 20;

/// Longest time allowed per question
pub const MAX_QUESTION_SECS: u64 = 3600;
