//! Countdown presentation tiers

/// Colour tier for the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerUrgency {
    /// More than half the time left
    Calm,
    /// More than a quarter left
    Warning,
    Critical,
}

impl TimerUrgency {
    pub fn from_fraction(fraction_remaining: f64) -> Self {
        if fraction_remaining > 0.5 {
            Self::Calm
        } else if fraction_remaining > 0.25 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Text progress bar, e.g. `[#####-----]`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
