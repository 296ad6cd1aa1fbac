//! Answer streak tracking

use serde::Serialize;

/// Consecutive-correct-answer streak
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub current: u32,
    /// Highest `current` seen; never decreases
    pub best: u32,
}

/// What happened to the streak after an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    Extended { count: u32 },
    Broken { lost: u32 },
    /// Incorrect answer while no streak was running
    Unchanged,
}

impl Streak {
    pub fn record(&mut self, correct: bool) -> StreakChange {
        if correct {
            self.current += 1;
            self.best = self.best.max(self.current);
            StreakChange::Extended {
                count: self.current,
            }
        } else {
            let lost = std::mem::take(&mut self.current);
            if lost > 0 {
                StreakChange::Broken { lost }
            } else {
                StreakChange::Unchanged
            }
        }
    }

    /// Drop the running streak; `best` is kept
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}
