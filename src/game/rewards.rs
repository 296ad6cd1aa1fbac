//! XP reward rules
//!
//! Speed bonus tiers, difficulty and streak multipliers, and the award formula:
//!
//! ```text
//! xp = round(base * difficulty_multiplier * (1 + streak * 0.1)) + speed_bonus
//! ```
//!
//! The multipliers are exact in halves and tenths, so the product is computed in
//! integers and rounded half-up (identical to half-away-from-zero for the
//! non-negative values involved).

use serde::{Deserialize, Serialize};

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Multiplier expressed in halves (easy = 2/2, medium = 3/2, hard = 4/2)
    fn multiplier_halves(&self) -> u128 {
        match self {
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier_halves() as f64 / 2.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bonus XP for answering quickly. Tier edges are strict: 5.0s earns 25, not 50.
pub fn speed_bonus(seconds: f64) -> u64 {
    if seconds < 5.0 {
        50
    } else if seconds < 10.0 {
        25
    } else if seconds < 15.0 {
        12
    } else {
        0
    }
}

/// Multiplier applied for the streak held before the current answer
pub fn streak_multiplier(streak: u32) -> f64 {
    1.0 + f64::from(streak) * 0.1
}

/// Breakdown of a single XP award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpAward {
    pub base_points: u32,
    pub difficulty: Difficulty,
    /// Streak held before the answer that earned this award
    pub streak_before: u32,
    /// `base * difficulty * streak`, rounded
    pub scaled: u64,
    pub speed_bonus: u64,
    pub total: u64,
}

impl XpAward {
    pub fn compute(
        base_points: u32,
        speed_seconds: f64,
        difficulty: Difficulty,
        streak_before: u32,
    ) -> Self {
        // base * (halves / 2) * ((10 + streak) / 10) == num / 20
        let num = u128::from(base_points)
            * difficulty.multiplier_halves()
            * (10 + u128::from(streak_before));
        let scaled = u64::try_from((num + 10) / 20).unwrap_or(u64::MAX);
        let bonus = speed_bonus(speed_seconds);

        Self {
            base_points,
            difficulty,
            streak_before,
            scaled,
            speed_bonus: bonus,
            total: scaled.saturating_add(bonus),
        }
    }

    /// Short explanation for the "+NN XP" notification
    pub fn reason(&self) -> String {
        let mut parts = vec![format!("{} x{}", self.difficulty, self.difficulty.multiplier())];
        if self.streak_before > 0 {
            parts.push(format!(
                "streak x{:.1}",
                streak_multiplier(self.streak_before)
            ));
        }
        if self.speed_bonus > 0 {
            parts.push(format!("speed +{}", self.speed_bonus));
        }
        parts.join(", ")
    }
}
