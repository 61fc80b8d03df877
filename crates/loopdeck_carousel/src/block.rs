//! Host-facing traits
//!
//! The engine never touches a real DOM. Items are reached through
//! [`ContentBlock`], the container and track through [`CarouselHost`].

use loopdeck_animation::Transition;

/// An already-rendered carousel item
pub trait ContentBlock {
    /// Clone the visual representation into a new, independent block
    fn duplicate(&self) -> Self
    where
        Self: Sized;

    /// Natural rendered height at the current width, ignoring any height
    /// previously forced with [`ContentBlock::set_height`]
    fn measure_height(&mut self) -> f32;

    fn set_width(&mut self, px: f32);

    fn width(&self) -> f32;

    fn set_height(&mut self, px: f32);

    fn height(&self) -> f32;

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;
}

/// The element hosting the track
pub trait CarouselHost {
    /// Current laid-out width of the container (0 when not yet laid out)
    fn container_width(&self) -> f32;

    /// Apply a track style. Styles arrive in order and each must be
    /// committed (reflowed) before the next one.
    fn apply_track_style(&mut self, style: &TrackStyle);
}

/// Width and transform of the track element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub width: f32,
    /// Horizontal translation in px (negative moves content left)
    pub translate_x: f32,
    /// `None` applies the change instantly
    pub transition: Option<Transition>,
}

impl TrackStyle {
    pub fn instant(width: f32, translate_x: f32) -> Self {
        Self {
            width,
            translate_x,
            transition: None,
        }
    }

    pub fn animated(width: f32, translate_x: f32, transition: Transition) -> Self {
        Self {
            width,
            translate_x,
            transition: Some(transition),
        }
    }

    pub fn is_animated(&self) -> bool {
        self.transition.is_some()
    }
}
