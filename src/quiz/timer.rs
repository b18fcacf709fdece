//! Elapsed-time ticking.
//!
//! The session never sleeps or schedules anything itself. It asks a
//! [`TimerService`] to start or stop a ticking cycle, and ticks come back in
//! as `AppEvent::ClockTick` carrying the cycle they belong to.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one ticking period. Each start/restart opens a new cycle.
pub type TimerCycle = u64;

pub trait TimerService {
    /// Begin ticking for `cycle`, replacing any cycle already running.
    fn start(&mut self, cycle: TimerCycle);
    fn stop(&mut self);
}

/// Posts a `ClockTick` into the app event channel once per period.
pub struct TokioTimer {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TokioTimer {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, period: Duration) -> Self {
        Self {
            event_tx,
            period,
            task: None,
        }
    }
}

impl TimerService for TokioTimer {
    fn start(&mut self, cycle: TimerCycle) {
        self.stop();
        let tx = self.event_tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately; skip it so the first
            // second is only counted once it has elapsed.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::ClockTick { cycle }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(cycle, period_ms = period.as_millis() as u64, "timer started");
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("timer stopped");
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) use manual::{ManualTimer, TimerCall};
