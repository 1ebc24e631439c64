//! Delayed-show timer
//!
//! Holds at most one deadline. Scheduling replaces whatever was pending, so
//! a burst of hover changes collapses into a single evaluation.

use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowTimer {
    deadline: Option<Instant>,
}

impl ShowTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending deadline with `at`
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline once it has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
