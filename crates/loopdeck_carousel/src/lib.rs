//! Loopdeck Carousel
//!
//! A headless looping carousel engine. It shows a horizontally scrolling
//! row of blocks that appears to loop forever while holding a fixed number
//! of nodes, adapts to the container width, and turns quick swipes into
//! scrolls.
//!
//! # Components
//!
//! - [`viewport`]: container width to compact / wide mode
//! - [`layout`]: item and track widths for a mode
//! - [`height`]: one uniform block height with a floor
//! - [`buttons`]: navigation control visibility
//! - [`gesture`]: touch start/end to scroll intent
//! - [`scroller`]: the rotate-and-recycle state machine
//! - [`carousel`]: the facade hosts talk to
//!
//! Hosts implement [`ContentBlock`] for their items and [`CarouselHost`]
//! for the container; [`memory`] provides in-memory versions of both.

pub mod block;
pub mod buttons;
pub mod carousel;
pub mod config;
pub mod gesture;
pub mod height;
pub mod layout;
pub mod memory;
pub mod scroller;
pub mod sequence;
pub mod viewport;

pub use block::{CarouselHost, ContentBlock, TrackStyle};
pub use buttons::ButtonVisibility;
pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use layout::CarouselGeometry;
pub use scroller::{ScrollPhase, ScrollPlan};
pub use sequence::ItemSequence;
pub use viewport::ViewportMode;

/// Everything a host usually needs
pub mod prelude {
    pub use crate::block::{CarouselHost, ContentBlock, TrackStyle};
    pub use crate::buttons::ButtonVisibility;
    pub use crate::carousel::Carousel;
    pub use crate::config::CarouselConfig;
    pub use crate::layout::CarouselGeometry;
    pub use crate::memory::{MemoryBlock, MemoryHost};
    pub use crate::scroller::ScrollPhase;
    pub use crate::viewport::ViewportMode;
    pub use loopdeck_animation::{Easing, Transition};
    pub use loopdeck_core::{CarouselError, Direction, Event, Signal, SignalKind};
}
