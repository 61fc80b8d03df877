//! Loopdeck Animation System
//!
//! Timing primitives for the carousel track.
//!
//! # Features
//!
//! - **Easing**: CSS timing functions, including arbitrary cubic beziers
//! - **Transitions**: Duration + easing pairs and the tweens they produce
//! - **Scheduling**: Deadline-ordered delayed tasks driven by host time

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{TaskId, TaskScheduler};
pub use transition::{Transition, Tween};
