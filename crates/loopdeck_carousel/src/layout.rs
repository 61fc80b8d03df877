//! Layout sizing
//!
//! Derives item and track widths from the container width. The result is a
//! plain snapshot; the scroller reads it, only a relayout replaces it.

use loopdeck_core::{CarouselError, Result};

use crate::block::{ContentBlock, TrackStyle};
use crate::config::CarouselConfig;
use crate::sequence::ItemSequence;
use crate::viewport::ViewportMode;

/// Geometry of the carousel at rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselGeometry {
    pub mode: ViewportMode,
    pub visible_count: usize,
    pub container_width: f32,
    pub item_width: f32,
    pub gap: f32,
}

impl CarouselGeometry {
    /// Compute geometry for a container width.
    ///
    /// `visible_count` items plus `visible_count - 1` gaps exactly fill the
    /// container. An unmeasured (zero) width, or one too narrow to leave any
    /// room for items, is reported as [`CarouselError::GeometryNotReady`].
    pub fn compute(container_width: f32, config: &CarouselConfig) -> Result<Self> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(CarouselError::GeometryNotReady(container_width));
        }

        let mode = ViewportMode::classify(container_width, config.tablet_breakpoint_px);
        let visible_count = mode.visible_count();
        let gaps = config.gap_px * (visible_count - 1) as f32;
        let item_width = (container_width - gaps) / visible_count as f32;

        if item_width <= 0.0 {
            return Err(CarouselError::GeometryNotReady(container_width));
        }

        tracing::trace!(
            "geometry: container={:.1} mode={:?} item_width={:.2} gap={:.1}",
            container_width,
            mode,
            item_width,
            config.gap_px
        );

        Ok(Self {
            mode,
            visible_count,
            container_width,
            item_width,
            gap: config.gap_px,
        })
    }

    /// Distance the track travels for one scroll step
    pub fn stride(&self) -> f32 {
        self.item_width + self.gap
    }

    /// Track width at rest
    pub fn track_width_steady(&self) -> f32 {
        self.item_width * self.visible_count as f32 + self.gap * (self.visible_count - 1) as f32
    }

    /// Track width while a scroll reveals one extra item:
    /// `item_width * visible_count + gap / visible_count + stride`
    pub fn track_width_transitional(&self) -> f32 {
        self.item_width * self.visible_count as f32
            + self.gap / self.visible_count as f32
            + self.stride()
    }

    /// Minimum number of blocks needed to scroll
    pub fn min_scrollable_items(&self) -> usize {
        self.visible_count + 1
    }

    /// Track style at rest, applied without a transition
    pub fn steady_style(&self) -> TrackStyle {
        TrackStyle::instant(self.track_width_steady(), 0.0)
    }

    /// Push the item width onto every block and show only the visible window
    pub fn apply_widths<B: ContentBlock>(&self, items: &mut ItemSequence<B>) {
        for block in items.iter_mut() {
            block.set_width(self.item_width);
        }
        items.show_window(self.visible_count);
    }
}
