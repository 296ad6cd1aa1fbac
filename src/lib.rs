//! cyberaware - cyber-awareness trainer
//!
//! Phishing-message and cyber-law quizzes wrapped in a small gamification
//! engine: experience points, answer streaks, and four ranks.
//!
//! ## Components
//!
//! 1. **Ledger** ([`game`]): turns answer outcomes into XP, tracks streaks and
//!    accuracy, derives the rank, and persists total XP.
//!
//! 2. **Question timer** ([`timer`]): per-question countdown with pause/resume
//!    that fires its timeout exactly once. Its elapsed time is the speed input
//!    for XP awards.

pub mod config;
pub mod content;
pub mod game;
pub mod quiz;
pub mod timer;
