//! Track transitions
//!
//! A [`Transition`] is what a host applies to the track element (duration
//! plus timing function). A [`Tween`] is one concrete run of a transition
//! from a start value to an end value, sampled against host time.

use crate::easing::Easing;

/// Duration and timing function of an animated property change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// CSS `transition` shorthand for a single property
    pub fn to_css(&self, property: &str) -> String {
        format!("{property} {}ms {}", self.duration_ms, self.easing.to_css())
    }
}

/// A single value animated over a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: f64,
    transition: Transition,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            start_ms,
            transition,
        }
    }

    /// Linear progress (0.0 to 1.0) at `now_ms`
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.transition.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms - self.start_ms;
        (elapsed / self.transition.duration_ms as f64).clamp(0.0, 1.0) as f32
    }

    /// Interpolated value at `now_ms`
    pub fn value_at(&self, now_ms: f64) -> f32 {
        let eased = self.transition.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }
}
