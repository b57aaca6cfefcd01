use std::time::{Duration, Instant};

use super::Config;

/// Paces generation steps at a fixed number of moves per second.
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
    interval_smoothed: f64,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            interval_smoothed: interval.as_secs_f64(),
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Starts counting from `now`, e.g. when the game starts running.
    pub fn restart(&mut self, now: Instant) {
        self.last_tick = now;
        self.interval_smoothed = self.interval.as_secs_f64();
    }

    /// Returns `true` once per elapsed interval and marks the tick.
    pub fn is_due(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }
        self.interval_smoothed +=
            (elapsed.as_secs_f64() - self.interval_smoothed) * Config::RATE_SMOOTHING;
        self.last_tick = now;
        true
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Observed moves per second.
    pub fn rate(&self) -> f64 {
        1. / self.interval_smoothed
    }
}
