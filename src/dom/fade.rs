//! Linear opacity fades

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Fade {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn opacity(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Display state of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
    Fading(Fade),
}

impl Visibility {
    pub fn opacity(&self, now: Instant) -> f32 {
        match self {
            Visibility::Shown => 1.0,
            Visibility::Hidden => 0.0,
            Visibility::Fading(fade) => fade.opacity(now),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self, Visibility::Fading(fade) if !fade.is_finished(now))
    }

    /// Collapse a finished fade into its resting state
    pub fn settle(self, now: Instant) -> Self {
        match self {
            Visibility::Fading(fade) if fade.is_finished(now) => {
                if fade.to > 0.0 {
                    Visibility::Shown
                } else {
                    Visibility::Hidden
                }
            }
            other => other,
        }
    }

    /// Start fading toward fully shown (`true`) or hidden (`false`).
    ///
    /// The fade starts at the current opacity. Already resting at the
    /// requested state, or already fading toward it, leaves `self` unchanged.
    pub fn fade_to(self, shown: bool, duration: Duration, now: Instant) -> Self {
        let target = if shown { 1.0 } else { 0.0 };
        match self.settle(now) {
            Visibility::Shown if shown => Visibility::Shown,
            Visibility::Hidden if !shown => Visibility::Hidden,
            Visibility::Fading(fade) if fade.to == target => Visibility::Fading(fade),
            current => {
                let from = current.opacity(now);
                if duration.is_zero() {
                    return if shown { Visibility::Shown } else { Visibility::Hidden };
                }
                Visibility::Fading(Fade {
                    from,
                    to: target,
                    start: now,
                    duration,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "fade_tests.rs"]
mod fade_tests;
