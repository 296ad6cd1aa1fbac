//! Async question timer
//!
//! Runs a [`Countdown`] on its own tokio task. The task sleeps until the next
//! deadline instead of polling, takes control commands over a channel, and
//! publishes the countdown through a `watch` channel so readers can compute
//! elapsed and remaining time on demand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::countdown::{Countdown, TimerPhase};

/// Callback invoked once when the countdown expires
pub type TimeoutCallback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy)]
enum TimerCommand {
    SetActive(bool),
    SetPaused(bool),
}

/// Current time on the tokio clock
pub(crate) fn clock_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Handle to a running question timer.
///
/// Dropping the handle cancels the timer; the timeout callback is never started after that.
pub struct QuestionTimer {
    commands: mpsc::UnboundedSender<TimerCommand>,
    state: watch::Receiver<Countdown>,
    /// Set on drop, checked by the task right before the callback
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl QuestionTimer {
    /// Spawn an idle timer on the current tokio runtime
    pub fn spawn<F>(duration: Duration, on_timeout: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let countdown = Countdown::new(duration);
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(countdown.clone());
        let cancelled = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(run_timer(
            countdown,
            command_rx,
            state_tx,
            Arc::clone(&cancelled),
            Box::new(on_timeout),
        ));

        Self {
            commands,
            state,
            cancelled,
            task,
        }
    }

    /// Spawn and immediately activate
    pub fn start<F>(duration: Duration, on_timeout: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let timer = Self::spawn(duration, on_timeout);
        timer.set_active(true);
        timer
    }

    pub fn set_active(&self, active: bool) {
        // Send fails only after expiry, when commands are ignored anyway
        let _ = self.commands.send(TimerCommand::SetActive(active));
    }

    pub fn set_paused(&self, paused: bool) {
        let _ = self.commands.send(TimerCommand::SetPaused(paused));
    }

    /// Latest published countdown
    pub fn countdown(&self) -> Countdown {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.borrow().phase()
    }

    /// Fractional elapsed time, suitable as the speed input for XP awards
    pub fn elapsed(&self) -> Duration {
        self.state.borrow().elapsed_at(clock_now())
    }

    pub fn remaining(&self) -> Duration {
        self.state.borrow().remaining_at(clock_now())
    }

    /// Wait until the timer reaches `phase`. Returns false if the task ended first.
    pub async fn wait_for_phase(&mut self, phase: TimerPhase) -> bool {
        self.state.wait_for(|c| c.phase() == phase).await.is_ok()
    }

    /// Stop the timer without firing the timeout
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        // abort() cannot interrupt a poll already running on another worker
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}

async fn run_timer(
    mut countdown: Countdown,
    mut commands: mpsc::UnboundedReceiver<TimerCommand>,
    state: watch::Sender<Countdown>,
    cancelled: Arc<AtomicBool>,
    on_timeout: TimeoutCallback,
) {
    loop {
        let deadline = countdown.deadline();
        // The sleep future is built even when disabled, so give it some instant
        let wake_at = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    // Handle dropped
                    return;
                };
                let now = clock_now();
                match command {
                    TimerCommand::SetActive(active) => countdown.set_active(active, now),
                    TimerCommand::SetPaused(paused) => countdown.set_paused(paused, now),
                }
                tracing::trace!("Timer command {:?} -> {}", command, countdown.phase());
            }
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                if countdown.tick(clock_now()) {
                    tracing::debug!("Question timer expired after {:?}", countdown.duration());
                    state.send_replace(countdown);
                    if cancelled.load(Ordering::SeqCst) {
                        tracing::trace!("Question timer cancelled before timeout callback");
                    } else {
                        on_timeout();
                    }
                    return;
                }
            }
        }

        state.send_replace(countdown.clone());
    }
}
