//! Uniform item height

use crate::block::ContentBlock;
use crate::sequence::ItemSequence;

/// Give every block the same height: the tallest natural height, but never
/// less than `floor_px`. Returns the applied height.
///
/// Must run after any width change, since wrapped content reflows.
pub fn normalize_heights<B: ContentBlock>(items: &mut ItemSequence<B>, floor_px: f32) -> f32 {
    let tallest = items
        .iter_mut()
        .map(|block| block.measure_height())
        .fold(0.0_f32, f32::max);
    let height = tallest.max(floor_px);

    for block in items.iter_mut() {
        block.set_height(height);
    }

    tracing::trace!("normalized {} block(s) to {:.1}px", items.len(), height);
    height
}
