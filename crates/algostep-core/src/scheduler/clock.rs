//! Wall-clock sources for run timestamps.

use std::cell::Cell;
use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Source of the point in time recorded for a step.
pub trait Clock: fmt::Debug {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock: starts at a fixed instant and advances by a fixed
/// increment every time it is read.
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: Cell<DateTime<Utc>>,
    increment: Duration,
}

impl ManualClock {
    /// Creates a clock reading `start` first, then `start + increment`, ...
    #[must_use]
    pub fn new(start: DateTime<Utc>, increment: Duration) -> Self {
        Self {
            next: Cell::new(start),
            increment,
        }
    }

    /// The value the next read will return.
    #[must_use]
    pub fn peek(&self) -> DateTime<Utc> {
        self.next.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + self.increment);
        now
    }
}
