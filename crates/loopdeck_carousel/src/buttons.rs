//! Navigation control visibility

use crate::config::CarouselConfig;
use crate::viewport::ViewportMode;

/// Whether the forward and backward controls are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonVisibility {
    pub forward: bool,
    pub backward: bool,
}

impl ButtonVisibility {
    /// Both controls show together once the item count exceeds the
    /// per-mode threshold
    pub fn compute(item_count: usize, mode: ViewportMode, config: &CarouselConfig) -> Self {
        let threshold = match mode {
            ViewportMode::Compact => config.mobile_visible_threshold,
            ViewportMode::Wide => config.tablet_visible_threshold,
        };
        let show = item_count > threshold;
        Self {
            forward: show,
            backward: show,
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward
    }
}

/// Tracks the last published visibility so only changes are reported
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonController {
    current: Option<ButtonVisibility>,
}

impl ButtonController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published visibility (hidden until the first update)
    pub fn current(&self) -> ButtonVisibility {
        self.current.unwrap_or_default()
    }

    /// Record a new visibility; returns it when it differs from the last
    /// one, or when it is the first ever computed
    pub fn update(&mut self, next: ButtonVisibility) -> Option<ButtonVisibility> {
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablet_threshold_boundary() {
        let config = CarouselConfig {
            tablet_visible_threshold: 3,
            ..Default::default()
        };

        let at = ButtonVisibility::compute(3, ViewportMode::Wide, &config);
        assert!(!at.forward && !at.backward);

        let above = ButtonVisibility::compute(4, ViewportMode::Wide, &config);
        assert!(above.forward && above.backward);
    }

    #[test]
    fn test_mode_picks_threshold() {
        let config = CarouselConfig::default(); // mobile 1, tablet 2

        assert!(ButtonVisibility::compute(2, ViewportMode::Compact, &config).any());
        assert!(!ButtonVisibility::compute(2, ViewportMode::Wide, &config).any());
    }

    #[test]
    fn test_controller_reports_changes_only() {
        let mut controller = ButtonController::new();
        let shown = ButtonVisibility {
            forward: true,
            backward: true,
        };

        assert_eq!(controller.current(), ButtonVisibility::hidden());
        // First computation is always published, even when hidden
        assert_eq!(
            controller.update(ButtonVisibility::hidden()),
            Some(ButtonVisibility::hidden())
        );
        assert_eq!(controller.update(ButtonVisibility::hidden()), None);
        assert_eq!(controller.update(shown), Some(shown));
        assert_eq!(controller.update(shown), None);
        assert_eq!(controller.current(), shown);
    }
}
