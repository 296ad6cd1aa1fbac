//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::timer::DEFAULT_QUESTION_SECS;

/// Scoring settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Base points for a correct answer, before multipliers and speed bonus
    #[serde(default = "default_base_points")]
    pub base_points: u32,

    /// Accuracy (percent) at which a session counts as passed
    #[serde(default = "default_pass_accuracy")]
    pub pass_accuracy: u8,
}

/// Question timer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Seconds allowed per question
    #[serde(default = "default_question_secs")]
    pub question_secs: u64,
}

/// Where persisted state lives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the persisted XP value (defaults to ~/.cyberaware/)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_base_points() -> u32 {
    50
}

fn default_pass_accuracy() -> u8 {
    70
}

fn default_question_secs() -> u64 {
    DEFAULT_QUESTION_SECS
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            base_points: default_base_points(),
            pass_accuracy: default_pass_accuracy(),
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            question_secs: default_question_secs(),
        }
    }
}
