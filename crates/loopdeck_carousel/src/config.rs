//! Carousel configuration
//!
//! Every numeric constant the engine uses lives here and is handed to the
//! carousel at construction. Values can come from code, from the presets
//! below, or from a TOML document.

use loopdeck_animation::{Easing, Transition};
use loopdeck_core::{CarouselError, Result};
use serde::{Deserialize, Serialize};

/// Container width at which the carousel switches to two visible items
pub const DEFAULT_TABLET_BREAKPOINT_PX: f32 = 768.0;
/// Spacing between adjacent items
pub const DEFAULT_GAP_PX: f32 = 16.0;
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 500;
/// How long before the transition ends the recycle step runs
pub const DEFAULT_SETTLE_MARGIN_MS: u32 = 50;
/// Minimum uniform item height
pub const DEFAULT_HEIGHT_FLOOR_PX: f32 = 450.0;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 20.0;
pub const DEFAULT_SWIPE_ALLOWED_TIME_MS: f64 = 100.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 50;

/// Configuration for carousel geometry, timing and input thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Container width (px) at or above which two items are shown
    pub tablet_breakpoint_px: f32,
    /// Controls appear in compact mode when the item count exceeds this
    pub mobile_visible_threshold: usize,
    /// Controls appear in wide mode when the item count exceeds this
    pub tablet_visible_threshold: usize,
    /// Spacing between items (px)
    pub gap_px: f32,
    /// Duration of the track transition (ms)
    pub animation_duration_ms: u32,
    /// Recycle runs this many ms before the transition ends
    pub settle_margin_ms: u32,
    /// Floor applied by the height normalizer (px)
    pub height_floor_px: f32,
    /// Minimum horizontal travel for a swipe (px)
    pub swipe_threshold_px: f32,
    /// Maximum duration of a swipe (ms)
    pub swipe_allowed_time_ms: f64,
    /// Quiet period before a resize burst is handled (ms)
    pub resize_debounce_ms: u32,
    /// Timing function of the track transition
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tablet_breakpoint_px: DEFAULT_TABLET_BREAKPOINT_PX,
            mobile_visible_threshold: 1,
            tablet_visible_threshold: 2,
            gap_px: DEFAULT_GAP_PX,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            settle_margin_ms: DEFAULT_SETTLE_MARGIN_MS,
            height_floor_px: DEFAULT_HEIGHT_FLOOR_PX,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            swipe_allowed_time_ms: DEFAULT_SWIPE_ALLOWED_TIME_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            easing: Easing::Ease,
        }
    }
}

impl CarouselConfig {
    /// Parse a config from TOML; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_gap(mut self, gap_px: f32) -> Self {
        self.gap_px = gap_px;
        self
    }

    pub fn with_breakpoint(mut self, breakpoint_px: f32) -> Self {
        self.tablet_breakpoint_px = breakpoint_px;
        self
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            tracing::warn!("rejecting carousel config: {}", msg);
            Err(CarouselError::InvalidConfig(msg))
        }

        if !self.tablet_breakpoint_px.is_finite() || self.tablet_breakpoint_px <= 0.0 {
            return invalid(format!(
                "tablet_breakpoint_px must be positive, got {}",
                self.tablet_breakpoint_px
            ));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return invalid(format!("gap_px must be >= 0, got {}", self.gap_px));
        }
        if !self.height_floor_px.is_finite() || self.height_floor_px < 0.0 {
            return invalid(format!(
                "height_floor_px must be >= 0, got {}",
                self.height_floor_px
            ));
        }
        if self.settle_margin_ms > self.animation_duration_ms {
            return invalid(format!(
                "settle_margin_ms ({}) exceeds animation_duration_ms ({})",
                self.settle_margin_ms, self.animation_duration_ms
            ));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return invalid(format!(
                "swipe_threshold_px must be positive, got {}",
                self.swipe_threshold_px
            ));
        }
        if !self.swipe_allowed_time_ms.is_finite() || self.swipe_allowed_time_ms < 0.0 {
            return invalid(format!(
                "swipe_allowed_time_ms must be >= 0, got {}",
                self.swipe_allowed_time_ms
            ));
        }
        if !self.easing.is_valid() {
            return invalid(format!("easing {:?} has x control points outside 0..=1", self.easing));
        }
        Ok(())
    }

    /// Delay between a scroll trigger and its recycle step
    pub fn recycle_delay_ms(&self) -> u32 {
        self.animation_duration_ms
            .saturating_sub(self.settle_margin_ms)
    }

    /// Transition applied to the track while a scroll animates
    pub fn track_transition(&self) -> Transition {
        Transition::new(self.animation_duration_ms, self.easing)
    }
}
