//! Cancellable single-shot timers
//!
//! Timers are plain data advanced by the host with frame deltas, the same
//! way animation state is stepped with `update(dt)`. A component owns one
//! `Countdown` per purpose; scheduling a new deadline replaces the old one,
//! so a superseded callback can never fire.

use std::time::Duration;

/// A single pending deadline, or nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    /// Create an idle countdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown, replacing any pending deadline
    pub fn schedule(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Drop the pending deadline, if any
    ///
    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Step the countdown forward
    ///
    /// Returns true exactly once: on the step that reaches the deadline.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(left) if dt >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}
