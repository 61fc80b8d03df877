//! Viewport classification

/// Discrete display mode picked from the container width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    /// One visible item
    Compact,
    /// Two visible items
    Wide,
}

impl ViewportMode {
    /// Classify a container width against the tablet breakpoint.
    ///
    /// The width is the host container's laid-out width, not the window's.
    pub fn classify(container_width: f32, tablet_breakpoint_px: f32) -> Self {
        if container_width >= tablet_breakpoint_px {
            ViewportMode::Wide
        } else {
            ViewportMode::Compact
        }
    }

    /// Number of items shown side by side at rest
    pub fn visible_count(&self) -> usize {
        match self {
            ViewportMode::Compact => 1,
            ViewportMode::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::classify(767.9, 768.0), ViewportMode::Compact);
        assert_eq!(ViewportMode::classify(768.0, 768.0), ViewportMode::Wide);
        assert_eq!(ViewportMode::classify(1440.0, 768.0), ViewportMode::Wide);
        assert_eq!(ViewportMode::classify(0.0, 768.0), ViewportMode::Compact);
    }

    #[test]
    fn test_visible_count() {
        assert_eq!(ViewportMode::Compact.visible_count(), 1);
        assert_eq!(ViewportMode::Wide.visible_count(), 2);
    }
}
