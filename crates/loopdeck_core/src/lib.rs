//! Loopdeck Core
//!
//! Foundational primitives shared by the Loopdeck carousel crates:
//!
//! - **Events**: the input vocabulary hosts feed into a carousel (touch, resize, navigation)
//! - **State Machines**: enum-based transition tables with a bounded history
//! - **Signals**: notifications a carousel emits back to its host
//! - **Errors**: the small, non-fatal error taxonomy of the engine
//!
//! # Example
//!
//! ```rust
//! use loopdeck_core::events::{event_types, EventType};
//! use loopdeck_core::fsm::{StateMachine, StateTransitions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Door {
//!     Closed,
//!     Open,
//! }
//!
//! impl StateTransitions for Door {
//!     fn on_event(&self, event: EventType) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Closed, event_types::NAV_FORWARD) => Some(Door::Open),
//!             (Door::Open, event_types::NAV_BACKWARD) => Some(Door::Closed),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut fsm = StateMachine::new(Door::Closed);
//! fsm.send(event_types::NAV_FORWARD);
//! assert!(fsm.is_in(Door::Open));
//! ```

pub mod error;
pub mod events;
pub mod fsm;

pub use error::{CarouselError, Result};
pub use events::{Direction, Event, EventData, EventType, Signal, SignalDispatcher, SignalKind};
pub use fsm::{StateMachine, StateTransitions};
