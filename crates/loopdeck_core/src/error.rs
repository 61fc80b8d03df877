//! Carousel error types

use thiserror::Error;

/// Errors reported by the carousel engine
///
/// None of these are fatal to the host: a rejected scroll or sizing pass
/// leaves the carousel in its last consistent state.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Container has no usable width yet
    #[error("geometry not ready: container width is {0}")]
    GeometryNotReady(f32),

    /// Not enough blocks to reveal an off-window item
    #[error("insufficient items: have {have}, need at least {need}")]
    InsufficientItems { have: usize, need: usize },

    /// A scroll is already between trigger and settle
    #[error("scroll already in flight")]
    Busy,

    /// Configuration value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written out
    #[error("config serialize failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl CarouselError {
    /// Whether the host can simply ignore this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CarouselError::GeometryNotReady(_)
                | CarouselError::InsufficientItems { .. }
                | CarouselError::Busy
        )
    }
}

/// Result type for carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;
