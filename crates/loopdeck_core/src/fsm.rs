//! State Machine Runtime
//!
//! Flat, enum-based state machines. A state type describes its own
//! transition table through [`StateTransitions::on_event`]; the
//! [`StateMachine`] wrapper tracks the current state and a bounded
//! transition history for debugging.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::events::EventType;

/// Default number of transitions kept in the history ring
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Trait for enum states that define their own transitions
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance
#[derive(Debug, Clone)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (oldest first)
    history: VecDeque<(S, EventType, S)>,
    history_limit: usize,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in its initial state
    pub fn new(initial_state: S) -> Self {
        Self::with_history_limit(initial_state, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a state machine that keeps at most `limit` history entries
    pub fn with_history_limit(initial_state: S, limit: usize) -> Self {
        Self {
            current_state: initial_state,
            history: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit: limit,
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current_state.on_event(event).is_some()
    }

    /// Send an event, returning the new state if a transition happened
    pub fn send(&mut self, event: EventType) -> Option<S> {
        let from = self.current_state;
        let to = from.on_event(event)?;

        self.current_state = to;

        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back((from, event, to));
        }

        tracing::trace!("fsm {:?} --{}--> {:?}", from, event, to);
        Some(to)
    }

    /// Get transition history
    pub fn history(&self) -> impl Iterator<Item = &(S, EventType, S)> {
        self.history.iter()
    }

    /// Number of recorded transitions
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
