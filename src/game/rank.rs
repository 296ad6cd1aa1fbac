//! Rank system
//!
//! Four fixed tiers derived from cumulative XP. Thresholds are constants and
//! are never read from configuration.

use serde::{Deserialize, Serialize};

/// Player rank, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Rookie,
    Agent,
    Expert,
    Elite,
}

/// All ranks (must be sorted by threshold)
pub static RANKS: &[Rank] = &[Rank::Rookie, Rank::Agent, Rank::Expert, Rank::Elite];

/// Progress bar ceiling for the top rank. Display only: XP keeps accumulating past it.
pub const ELITE_DISPLAY_CEILING: u64 = 1000;

impl Rank {
    /// Rank for a given total XP
    pub fn for_xp(xp: u64) -> Rank {
        RANKS
            .iter()
            .rev()
            .find(|r| xp >= r.threshold())
            .copied()
            .unwrap_or(Rank::Rookie)
    }

    /// XP at which this rank starts
    pub fn threshold(&self) -> u64 {
        match self {
            Self::Rookie => 0,
            Self::Agent => 100,
            Self::Expert => 300,
            Self::Elite => 600,
        }
    }

    /// Upper end of this rank's progress band.
    ///
    /// For [`Rank::Elite`] this is [`ELITE_DISPLAY_CEILING`], not a real rank boundary.
    pub fn band_ceiling(&self) -> u64 {
        match self.next() {
            Some(next) => next.threshold(),
            None => ELITE_DISPLAY_CEILING,
        }
    }

    /// The rank after this one (None at the top)
    pub fn next(&self) -> Option<Rank> {
        match self {
            Self::Rookie => Some(Self::Agent),
            Self::Agent => Some(Self::Expert),
            Self::Expert => Some(Self::Elite),
            Self::Elite => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rookie => "rookie",
            Self::Agent => "agent",
            Self::Expert => "expert",
            Self::Elite => "elite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rookie" => Some(Self::Rookie),
            "agent" => Some(Self::Agent),
            "expert" => Some(Self::Expert),
            "elite" => Some(Self::Elite),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rookie => "Rookie",
            Self::Agent => "Agent",
            Self::Expert => "Expert",
            Self::Elite => "Elite",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rank view derived from total XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub total_xp: u64,
    pub rank: Rank,
    /// XP earned since the current rank started
    pub xp_in_current_rank: u64,
    /// Width of the current rank's band
    pub xp_to_next_rank: u64,
}

impl PlayerStats {
    pub fn new(total_xp: u64) -> Self {
        let rank = Rank::for_xp(total_xp);
        let floor = rank.threshold();

        Self {
            total_xp,
            rank,
            xp_in_current_rank: total_xp - floor,
            xp_to_next_rank: rank.band_ceiling() - floor,
        }
    }

    /// Progress through the current rank band (0.0 - 1.0)
    pub fn progress(&self) -> f64 {
        if self.xp_to_next_rank == 0 {
            return 1.0;
        }
        (self.xp_in_current_rank as f64 / self.xp_to_next_rank as f64).clamp(0.0, 1.0)
    }

    pub fn next_rank(&self) -> Option<Rank> {
        self.rank.next()
    }

    pub fn is_max_rank(&self) -> bool {
        self.rank.next().is_none()
    }
}
