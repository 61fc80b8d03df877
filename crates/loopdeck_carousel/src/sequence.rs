//! Ordered item storage backing the track

use std::collections::VecDeque;

use crate::block::ContentBlock;

/// Ordered, in-place rotatable sequence of blocks.
///
/// Index 0 is the leftmost block on the track. Head and tail operations are
/// O(1).
#[derive(Debug, Clone)]
pub struct ItemSequence<B> {
    items: VecDeque<B>,
}

impl<B> ItemSequence<B> {
    pub fn new(items: Vec<B>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&B> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut B> {
        self.items.get_mut(index)
    }

    pub fn front(&self) -> Option<&B> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&B> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut B> {
        self.items.iter_mut()
    }

    pub(crate) fn push_front(&mut self, block: B) {
        self.items.push_front(block);
    }

    pub(crate) fn push_back(&mut self, block: B) {
        self.items.push_back(block);
    }

    pub(crate) fn pop_front(&mut self) -> Option<B> {
        self.items.pop_front()
    }

    pub(crate) fn pop_back(&mut self) -> Option<B> {
        self.items.pop_back()
    }
}

impl<B: ContentBlock> ItemSequence<B> {
    /// Show the first `count` blocks and hide the rest
    pub fn show_window(&mut self, count: usize) {
        for (index, block) in self.items.iter_mut().enumerate() {
            block.set_visible(index < count);
        }
    }

    /// Number of currently visible blocks
    pub fn visible_len(&self) -> usize {
        self.items.iter().filter(|b| b.is_visible()).count()
    }

    pub(crate) fn duplicate_front(&self) -> Option<B> {
        self.items.front().map(|b| b.duplicate())
    }

    pub(crate) fn duplicate_back(&self) -> Option<B> {
        self.items.back().map(|b| b.duplicate())
    }
}
