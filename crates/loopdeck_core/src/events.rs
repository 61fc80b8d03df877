//! Event and signal vocabulary
//!
//! Events flow from the host into a carousel; signals flow back out.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const TOUCH_START: EventType = 1;
    pub const TOUCH_END: EventType = 2;
    /// Touch interaction aborted by the platform (touchcancel)
    pub const TOUCH_CANCEL: EventType = 3;
    pub const RESIZE: EventType = 40;

    // Navigation controls
    pub const NAV_FORWARD: EventType = 50;
    pub const NAV_BACKWARD: EventType = 51;

    // Loop scroller lifecycle
    /// A scroll was accepted and its animation starts
    pub const SCROLL_REQUEST: EventType = 100;
    /// Recycle deadline reached (animation duration minus the settle margin)
    pub const RECYCLE_DUE: EventType = 101;
    /// Full animation duration elapsed, track may accept transitions again
    pub const SETTLE_DUE: EventType = 102;
}

/// Horizontal scroll direction of the carousel track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Content moves left, the next item enters from the right
    Forward,
    /// Content moves right, the previous item enters from the left
    Backward,
}

/// A host input event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: f64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Touch {
        /// Horizontal client coordinate of the first touch point
        x: f32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData, timestamp: f64) -> Self {
        Self {
            event_type,
            data,
            timestamp,
        }
    }

    pub fn touch_start(x: f32, timestamp: f64) -> Self {
        Self::new(event_types::TOUCH_START, EventData::Touch { x }, timestamp)
    }

    pub fn touch_end(x: f32, timestamp: f64) -> Self {
        Self::new(event_types::TOUCH_END, EventData::Touch { x }, timestamp)
    }

    pub fn touch_cancel(timestamp: f64) -> Self {
        Self::new(event_types::TOUCH_CANCEL, EventData::None, timestamp)
    }

    pub fn resize(timestamp: f64) -> Self {
        Self::new(event_types::RESIZE, EventData::None, timestamp)
    }

    pub fn nav(direction: Direction, timestamp: f64) -> Self {
        let event_type = match direction {
            Direction::Forward => event_types::NAV_FORWARD,
            Direction::Backward => event_types::NAV_BACKWARD,
        };
        Self::new(event_type, EventData::None, timestamp)
    }

    /// Touch x coordinate, if this event carries one
    pub fn touch_x(&self) -> Option<f32> {
        match self.data {
            EventData::Touch { x } => Some(x),
            EventData::None => None,
        }
    }
}

/// Notification emitted by a carousel to its host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Navigation controls should be shown (`true`) or hidden
    ButtonsVisibilityChanged { forward: bool, backward: bool },
    /// A scroll finished its recycle step and the track is back at rest
    ScrollSettled { direction: Direction },
}

/// Discriminant of [`Signal`], used as the listener key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    ButtonsVisibilityChanged,
    ScrollSettled,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::ButtonsVisibilityChanged { .. } => SignalKind::ButtonsVisibilityChanged,
            Signal::ScrollSettled { .. } => SignalKind::ScrollSettled,
        }
    }
}

/// Signal handler function type
pub type SignalHandler = Box<dyn Fn(&Signal) + Send + Sync>;

/// Dispatches signals to registered host listeners
pub struct SignalDispatcher {
    handlers: FxHashMap<SignalKind, SmallVec<[SignalHandler; 2]>>,
}

impl SignalDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register a handler for one kind of signal
    pub fn register<F>(&mut self, kind: SignalKind, handler: F)
    where
        F: Fn(&Signal) + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Dispatch a signal to all handlers registered for its kind
    pub fn dispatch(&self, signal: &Signal) {
        if let Some(handlers) = self.handlers.get(&signal.kind()) {
            for handler in handlers {
                handler(signal);
            }
        }
    }
}

impl Default for SignalDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SignalDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalDispatcher")
            .field("kinds", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_dispatch_by_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let mut dispatcher = SignalDispatcher::new();
        dispatcher.register(SignalKind::ButtonsVisibilityChanged, move |s| {
            seen_clone.lock().unwrap().push(*s);
        });

        dispatcher.dispatch(&Signal::ScrollSettled {
            direction: Direction::Forward,
        });
        dispatcher.dispatch(&Signal::ButtonsVisibilityChanged {
            forward: true,
            backward: true,
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            Signal::ButtonsVisibilityChanged {
                forward: true,
                backward: true
            }
        );
    }

    #[test]
    fn test_touch_event_accessors() {
        let start = Event::touch_start(120.0, 10.0);
        assert_eq!(start.event_type, event_types::TOUCH_START);
        assert_eq!(start.touch_x(), Some(120.0));

        let resize = Event::resize(5.0);
        assert_eq!(resize.touch_x(), None);

        let back = Event::nav(Direction::Backward, 0.0);
        assert_eq!(back.event_type, event_types::NAV_BACKWARD);
    }
}
