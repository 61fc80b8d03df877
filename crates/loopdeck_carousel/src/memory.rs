//! In-memory host and blocks
//!
//! A headless rendition of the carousel's collaborators. Blocks carry a
//! content label and a unique node id; their natural height reflows with
//! width the way wrapped text does. Used by the CLI simulator and tests.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::block::{CarouselHost, ContentBlock, TrackStyle};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Height of a block's chrome without any text
pub const BASE_HEIGHT_PX: f32 = 120.0;
pub const LINE_HEIGHT_PX: f32 = 24.0;
/// Average advance of one character
pub const CHAR_WIDTH_PX: f32 = 8.0;

fn next_node_id() -> u64 {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A block whose height depends on how its text wraps
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryBlock {
    label: String,
    node_id: u64,
    text_len: usize,
    width: f32,
    forced_height: Option<f32>,
    visible: bool,
}

impl MemoryBlock {
    pub fn new(label: impl Into<String>, text_len: usize) -> Self {
        Self {
            label: label.into(),
            node_id: next_node_id(),
            text_len,
            width: 0.0,
            forced_height: None,
            visible: true,
        }
    }

    /// Content identity, shared by a block and its duplicates
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Node identity, unique per block
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    fn natural_height(&self) -> f32 {
        if self.width <= 0.0 || self.text_len == 0 {
            return BASE_HEIGHT_PX + LINE_HEIGHT_PX;
        }
        let per_line = (self.width / CHAR_WIDTH_PX).floor().max(1.0);
        let lines = (self.text_len as f32 / per_line).ceil();
        BASE_HEIGHT_PX + lines * LINE_HEIGHT_PX
    }
}

impl ContentBlock for MemoryBlock {
    fn duplicate(&self) -> Self {
        Self {
            node_id: next_node_id(),
            ..self.clone()
        }
    }

    fn measure_height(&mut self) -> f32 {
        self.natural_height()
    }

    fn set_width(&mut self, px: f32) {
        self.width = px;
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn set_height(&mut self, px: f32) {
        self.forced_height = Some(px);
    }

    fn height(&self) -> f32 {
        self.forced_height.unwrap_or_else(|| self.natural_height())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A container that records every track style it receives
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    width: f32,
    styles: Vec<TrackStyle>,
}

impl MemoryHost {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            styles: Vec::new(),
        }
    }

    /// Simulate the container being laid out at a new width
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Every style applied so far, oldest first
    pub fn styles(&self) -> &[TrackStyle] {
        &self.styles
    }

    /// The style currently in effect
    pub fn current_style(&self) -> Option<&TrackStyle> {
        self.styles.last()
    }

    pub fn clear_styles(&mut self) {
        self.styles.clear();
    }
}

impl CarouselHost for MemoryHost {
    fn container_width(&self) -> f32 {
        self.width
    }

    fn apply_track_style(&mut self, style: &TrackStyle) {
        self.styles.push(*style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_reflows_with_width() {
        let mut block = MemoryBlock::new("A", 100);
        block.set_width(400.0); // 50 chars per line -> 2 lines
        assert_eq!(block.measure_height(), BASE_HEIGHT_PX + 2.0 * LINE_HEIGHT_PX);

        block.set_width(200.0); // 25 chars per line -> 4 lines
        assert_eq!(block.measure_height(), BASE_HEIGHT_PX + 4.0 * LINE_HEIGHT_PX);
    }

    #[test]
    fn test_forced_height_does_not_change_measurement() {
        let mut block = MemoryBlock::new("A", 100);
        block.set_width(400.0);
        block.set_height(450.0);
        assert_eq!(block.height(), 450.0);
        assert_eq!(block.measure_height(), BASE_HEIGHT_PX + 2.0 * LINE_HEIGHT_PX);
    }

    #[test]
    fn test_duplicate_keeps_content_new_node() {
        let mut block = MemoryBlock::new("A", 10);
        block.set_width(300.0);
        block.set_height(450.0);

        let copy = block.duplicate();
        assert_eq!(copy.label(), "A");
        assert_eq!(copy.width(), 300.0);
        assert_eq!(copy.height(), 450.0);
        assert_ne!(copy.node_id(), block.node_id());
    }

    #[test]
    fn test_host_records_styles() {
        let mut host = MemoryHost::new(800.0);
        host.apply_track_style(&TrackStyle::instant(800.0, 0.0));
        host.apply_track_style(&TrackStyle::instant(800.0, -10.0));
        assert_eq!(host.styles().len(), 2);
        assert_eq!(host.current_style().unwrap().translate_x, -10.0);
    }
}
