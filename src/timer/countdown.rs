//! Countdown state machine
//!
//! `Idle -> Running <-> Paused -> Expired`, driven by explicit instants so it can
//! be stepped without sleeping. Elapsed time only advances while running, and
//! the timeout latch trips at most once per instance.

use std::time::{Duration, Instant};

use super::display::TimerUrgency;

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    /// Terminal
    Expired,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-question countdown
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    active: bool,
    paused: bool,
    /// Time accumulated in earlier running stretches
    elapsed_before_pause: Duration,
    /// Start of the current running stretch
    running_since: Option<Instant>,
    timeout_fired: bool,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: false,
            paused: false,
            elapsed_before_pause: Duration::ZERO,
            running_since: None,
            timeout_fired: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn phase(&self) -> TimerPhase {
        if self.timeout_fired {
            TimerPhase::Expired
        } else if !self.active {
            TimerPhase::Idle
        } else if self.paused {
            TimerPhase::Paused
        } else {
            TimerPhase::Running
        }
    }

    pub fn is_expired(&self) -> bool {
        self.timeout_fired
    }

    /// Activate or deactivate. Activation starts from a zero baseline;
    /// deactivation returns to Idle. Ignored once expired.
    pub fn set_active(&mut self, active: bool, now: Instant) {
        if self.timeout_fired || active == self.active {
            return;
        }

        self.active = active;
        self.elapsed_before_pause = Duration::ZERO;
        self.running_since = if active && !self.paused {
            Some(now)
        } else {
            None
        };
    }

    /// Pause or resume. Paused time never counts as elapsed. Ignored once expired.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.timeout_fired || paused == self.paused {
            return;
        }

        self.paused = paused;
        if paused {
            if let Some(since) = self.running_since.take() {
                self.elapsed_before_pause += now.saturating_duration_since(since);
            }
        } else if self.active {
            self.running_since = Some(now);
        }
    }

    /// Elapsed running time, capped at the duration
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .running_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        (self.elapsed_before_pause + running).min(self.duration)
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed_at(now))
    }

    /// Instant at which the countdown reaches zero, if it is running.
    ///
    /// None when that instant is not representable; such a countdown never expires.
    pub fn deadline(&self) -> Option<Instant> {
        if self.phase() != TimerPhase::Running {
            return None;
        }
        let left = self.duration.saturating_sub(self.elapsed_before_pause);
        self.running_since.and_then(|since| since.checked_add(left))
    }

    /// Check for expiry. Returns true exactly once, on the tick that expires it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase() != TimerPhase::Running || !self.remaining_at(now).is_zero() {
            return false;
        }

        self.elapsed_before_pause = self.duration;
        self.running_since = None;
        self.timeout_fired = true;
        true
    }

    // ========================================
    // DISPLAY
    // ========================================

    /// Whole seconds shown on the countdown (rounded up)
    pub fn remaining_display_secs(&self, now: Instant) -> u64 {
        let remaining = self.remaining_at(now);
        let secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 { secs + 1 } else { secs }
    }

    /// Fraction of the duration still remaining (0.0 - 1.0)
    pub fn fraction_remaining(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.remaining_at(now).as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn urgency(&self, now: Instant) -> TimerUrgency {
        TimerUrgency::from_fraction(self.fraction_remaining(now))
    }

    /// Last five seconds, before expiry
    pub fn should_pulse(&self, now: Instant) -> bool {
        let remaining = self.remaining_at(now);
        !remaining.is_zero() && remaining <= Duration::from_secs(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_starts_idle() {
        let t0 = Instant::now();
        let countdown = Countdown::new(secs(20.0));
        assert_eq!(countdown.phase(), TimerPhase::Idle);
        assert_eq!(countdown.elapsed_at(t0 + secs(5.0)), Duration::ZERO);
        assert_eq!(countdown.remaining_at(t0), secs(20.0));
        assert_eq!(countdown.deadline(), None);
    }

    #[test]
    fn test_running_elapsed_and_deadline() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_active(true, t0);

        assert_eq!(countdown.phase(), TimerPhase::Running);
        assert_eq!(countdown.elapsed_at(t0 + secs(3.5)), secs(3.5));
        assert_eq!(countdown.remaining_at(t0 + secs(3.5)), secs(16.5));
        assert_eq!(countdown.deadline(), Some(t0 + secs(20.0)));
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_active(true, t0);
        countdown.set_paused(true, t0 + secs(4.0));

        assert_eq!(countdown.phase(), TimerPhase::Paused);
        assert_eq!(countdown.elapsed_at(t0 + secs(60.0)), secs(4.0));
        assert_eq!(countdown.deadline(), None);
        assert!(!countdown.tick(t0 + secs(60.0)));

        countdown.set_paused(false, t0 + secs(10.0));
        assert_eq!(countdown.elapsed_at(t0 + secs(12.0)), secs(6.0));
        assert_eq!(countdown.deadline(), Some(t0 + secs(26.0)));
    }

    #[test]
    fn test_elapsed_never_decreases_across_pause_cycles() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_active(true, t0);

        let mut last = Duration::ZERO;
        for step in 1..=30u32 {
            let now = t0 + secs(f64::from(step) * 0.5);
            countdown.set_paused(step % 3 == 0, now);
            let elapsed = countdown.elapsed_at(now);
            assert!(elapsed >= last);
            last = elapsed;
        }
    }

    #[test]
    fn test_timeout_fires_once() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(1.0));
        countdown.set_active(true, t0);

        assert!(!countdown.tick(t0 + secs(0.95)));
        assert!(countdown.tick(t0 + secs(1.0)));
        assert!(!countdown.tick(t0 + secs(1.05)));
        assert!(!countdown.tick(t0 + secs(1.10)));
        assert_eq!(countdown.phase(), TimerPhase::Expired);
        assert_eq!(countdown.elapsed_at(t0 + secs(30.0)), secs(1.0));
    }

    #[test]
    fn test_expired_ignores_controls() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(1.0));
        countdown.set_active(true, t0);
        assert!(countdown.tick(t0 + secs(2.0)));

        countdown.set_active(false, t0 + secs(3.0));
        countdown.set_paused(true, t0 + secs(3.0));
        assert_eq!(countdown.phase(), TimerPhase::Expired);
        assert!(!countdown.tick(t0 + secs(4.0)));
    }

    #[test]
    fn test_reactivation_resets_baseline() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_active(true, t0);
        countdown.set_active(false, t0 + secs(5.0));
        assert_eq!(countdown.phase(), TimerPhase::Idle);
        assert_eq!(countdown.elapsed_at(t0 + secs(5.0)), Duration::ZERO);

        countdown.set_active(true, t0 + secs(8.0));
        assert_eq!(countdown.elapsed_at(t0 + secs(9.0)), secs(1.0));
    }

    #[test]
    fn test_paused_before_activation_stays_paused() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_paused(true, t0);
        countdown.set_active(true, t0);
        assert_eq!(countdown.phase(), TimerPhase::Paused);
        assert_eq!(countdown.elapsed_at(t0 + secs(5.0)), Duration::ZERO);

        countdown.set_paused(false, t0 + secs(5.0));
        assert_eq!(countdown.elapsed_at(t0 + secs(7.0)), secs(2.0));
    }

    #[test]
    fn test_display_values() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(secs(20.0));
        countdown.set_active(true, t0);

        assert_eq!(countdown.remaining_display_secs(t0), 20);
        assert_eq!(countdown.remaining_display_secs(t0 + secs(0.2)), 20);
        assert_eq!(countdown.remaining_display_secs(t0 + secs(19.5)), 1);
        assert_eq!(countdown.urgency(t0 + secs(5.0)), TimerUrgency::Calm);
        assert_eq!(countdown.urgency(t0 + secs(12.0)), TimerUrgency::Warning);
        assert_eq!(countdown.urgency(t0 + secs(16.0)), TimerUrgency::Critical);
        assert!(!countdown.should_pulse(t0 + secs(10.0)));
        assert!(countdown.should_pulse(t0 + secs(15.0)));
        assert!(!countdown.should_pulse(t0 + secs(20.0)));
    }

    #[test]
    fn test_unrepresentable_deadline_never_expires() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::from_secs(u64::MAX));
        countdown.set_active(true, t0);

        assert_eq!(countdown.phase(), TimerPhase::Running);
        assert_eq!(countdown.deadline(), None);
        assert!(!countdown.tick(t0 + secs(3600.0)));
        assert_eq!(countdown.elapsed_at(t0 + secs(2.0)), secs(2.0));
    }
}
