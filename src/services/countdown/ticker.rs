use chrono::{DateTime, Duration, Local};
use std::time::Duration as StdDuration;

use super::calculator::calculate_time_left;
use crate::models::time_left::TimeLeft;
use crate::services::clock::Clock;

/// Refresh cadence of a running countdown.
pub const TICK_INTERVAL_MS: i64 = 1_000;

/// Armed state of the refresh loop. Holding one of these is the timer
/// resource; releasing it cancels all future ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerHandle {
    next_due: DateTime<Local>,
}

impl TimerHandle {
    fn armed_at(now: DateTime<Local>) -> Self {
        Self {
            next_due: now + Duration::milliseconds(TICK_INTERVAL_MS),
        }
    }
}

/// A published refresh. `time_left` is `None` once the target has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickUpdate {
    /// Wall-clock time the tick fired at.
    pub at: DateTime<Local>,
    pub time_left: Option<TimeLeft>,
}

/// Drives the periodic re-evaluation of a countdown.
///
/// The ticker owns a `(target, TimerHandle)` pair plus the single
/// "latest TimeLeft" slot read by the rendering layer. Ticks fire
/// cooperatively from `poll`, which the app calls once per frame; there is
/// no background thread and no buffering of missed ticks. Each fired tick
/// recomputes from wall-clock "now" at fire time, so drift under load shows
/// up as a late tick rather than a burst of stale ones.
pub struct CountdownTicker<C: Clock> {
    target: DateTime<Local>,
    clock: C,
    timer: Option<TimerHandle>,
    latest: Option<TimeLeft>,
}

impl<C: Clock> CountdownTicker<C> {
    /// Creates a ticker with the timer disarmed. The latest slot is seeded
    /// immediately so a display has something to show before the first tick.
    pub fn new(target: DateTime<Local>, clock: C) -> Self {
        let latest = calculate_time_left(target, clock.now());
        Self {
            target,
            clock,
            timer: None,
            latest,
        }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// Latest published breakdown; `None` once the target has elapsed.
    pub fn latest(&self) -> Option<TimeLeft> {
        self.latest
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Arms the timer. A ticker that is already running keeps its schedule.
    pub fn start(&mut self) {
        if self.timer.is_none() {
            let now = self.clock.now();
            self.timer = Some(TimerHandle::armed_at(now));
            log::debug!("countdown ticker armed for target {}", self.target);
        }
    }

    /// Disarms the timer. Guarantees zero further published updates until
    /// the ticker is started again.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("countdown ticker stopped");
        }
    }

    /// Retargets the countdown as one atomic transition: the in-flight
    /// timer handle is torn down, the latest slot is recomputed against the
    /// new target, and a fresh handle is armed iff one was armed before.
    pub fn set_target(&mut self, target: DateTime<Local>) {
        let was_running = self.timer.take().is_some();
        let now = self.clock.now();

        self.target = target;
        self.latest = calculate_time_left(target, now);
        if was_running {
            self.timer = Some(TimerHandle::armed_at(now));
        }
        log::debug!(
            "countdown retargeted to {} (running: {})",
            target,
            was_running
        );
    }

    /// Fires at most one tick. Returns the published update when the timer
    /// was due, otherwise `None`. A stopped ticker never publishes.
    pub fn poll(&mut self) -> Option<TickUpdate> {
        let timer = self.timer.as_mut()?;
        let now = self.clock.now();
        if now < timer.next_due {
            return None;
        }

        // One publish per poll even if several intervals went by; the next
        // tick is scheduled relative to now, not the virtual schedule.
        timer.next_due = now + Duration::milliseconds(TICK_INTERVAL_MS);
        self.latest = calculate_time_left(self.target, now);
        Some(TickUpdate {
            at: now,
            time_left: self.latest,
        })
    }

    /// Time remaining until the next tick is due, for handing to the host
    /// repaint scheduler. `None` while the timer is disarmed.
    pub fn time_until_due(&self) -> Option<StdDuration> {
        let timer = self.timer.as_ref()?;
        let now = self.clock.now();
        Some(
            timer
                .next_due
                .signed_duration_since(now)
                .to_std()
                .unwrap_or(StdDuration::ZERO),
        )
    }
}
