//! Fire-once, cancellable timers driven by the frame clock
//!
//! Timers never run callbacks on their own. The owner polls [`OneShotTimer::fire`]
//! from the per-frame update with the current time, so a timer that belongs to a
//! component which has already been dropped simply never fires.

use std::time::Duration;

/// A single pending deadline measured from the viewer's start time.
///
/// Scheduling while a deadline is already pending replaces it, so repeated
/// schedules debounce rather than stack.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Duration>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
