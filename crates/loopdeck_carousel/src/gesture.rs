//! Swipe recognition
//!
//! Converts one touch interaction (start, optional moves, end) into at most
//! one scroll intent. Only quick, long-enough flicks count; there is no
//! partial or inertial scrolling.

use loopdeck_core::Direction;

use crate::config::CarouselConfig;

/// Thresholds a touch must meet to count as a swipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum |distance| in px
    pub threshold_px: f32,
    /// Maximum elapsed time in ms
    pub allowed_time_ms: f64,
}

impl SwipeThresholds {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            threshold_px: config.swipe_threshold_px,
            allowed_time_ms: config.swipe_allowed_time_ms,
        }
    }

    /// Classify a completed touch. Rightward drags scroll backward,
    /// leftward drags scroll forward.
    pub fn classify(&self, distance: f32, elapsed_ms: f64) -> Option<Direction> {
        if elapsed_ms > self.allowed_time_ms || distance.abs() < self.threshold_px {
            return None;
        }
        if distance > 0.0 {
            Some(Direction::Backward)
        } else {
            Some(Direction::Forward)
        }
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TouchState {
    Idle,
    Tracking { start_x: f32, start_ms: f64 },
}

/// Touch start/end state machine
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    thresholds: SwipeThresholds,
    state: TouchState,
    distance: f32,
}

impl GestureRecognizer {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            state: TouchState::Idle,
            distance: 0.0,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TouchState::Tracking { .. })
    }

    /// Distance travelled so far in the current interaction
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Begin an interaction. A second start replaces the first.
    pub fn touch_start(&mut self, x: f32, timestamp_ms: f64) {
        self.state = TouchState::Tracking {
            start_x: x,
            start_ms: timestamp_ms,
        };
        self.distance = 0.0;
    }

    pub fn touch_move(&mut self, x: f32) {
        if let TouchState::Tracking { start_x, .. } = self.state {
            self.distance = x - start_x;
        }
    }

    /// Finish the interaction and classify it
    pub fn touch_end(&mut self, x: f32, timestamp_ms: f64) -> Option<Direction> {
        let TouchState::Tracking { start_x, start_ms } = self.state else {
            return None;
        };
        self.state = TouchState::Idle;

        self.distance = x - start_x;
        let elapsed = timestamp_ms - start_ms;
        let intent = self.thresholds.classify(self.distance, elapsed);

        tracing::debug!(
            "touch end: distance={:.1}px elapsed={:.1}ms intent={:?}",
            self.distance,
            elapsed,
            intent
        );
        intent
    }

    /// Abandon the interaction without an intent
    pub fn cancel(&mut self) {
        self.state = TouchState::Idle;
        self.distance = 0.0;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(SwipeThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(distance: f32, elapsed: f64) -> Option<Direction> {
        let mut recognizer = GestureRecognizer::default();
        recognizer.touch_start(200.0, 1000.0);
        recognizer.touch_end(200.0 + distance, 1000.0 + elapsed)
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(swipe(-19.0, 50.0), None);
        assert_eq!(swipe(-21.0, 50.0), Some(Direction::Forward));
        assert_eq!(swipe(-21.0, 150.0), None);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(swipe(20.0, 100.0), Some(Direction::Backward));
        assert_eq!(swipe(-20.0, 100.0), Some(Direction::Forward));
        assert_eq!(swipe(20.0, 100.5), None);
    }

    #[test]
    fn test_rightward_drag_scrolls_backward() {
        assert_eq!(swipe(80.0, 40.0), Some(Direction::Backward));
        assert_eq!(swipe(-80.0, 40.0), Some(Direction::Forward));
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(recognizer.touch_end(0.0, 10.0), None);
    }

    #[test]
    fn test_one_intent_per_interaction() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.touch_start(300.0, 0.0);
        assert_eq!(recognizer.touch_end(200.0, 30.0), Some(Direction::Forward));
        assert_eq!(recognizer.touch_end(100.0, 40.0), None);
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn test_move_and_cancel() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.touch_start(300.0, 0.0);
        recognizer.touch_move(260.0);
        assert_eq!(recognizer.distance(), -40.0);

        recognizer.cancel();
        assert_eq!(recognizer.distance(), 0.0);
        assert_eq!(recognizer.touch_end(100.0, 20.0), None);
    }

    #[test]
    fn test_restart_resets_distance() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.touch_start(300.0, 0.0);
        recognizer.touch_move(100.0);
        recognizer.touch_start(50.0, 500.0);
        assert_eq!(recognizer.distance(), 0.0);
        assert_eq!(recognizer.touch_end(60.0, 520.0), None);
    }
}
