//! State transitions
//!
//! Interaction states are plain enums. Each one maps an event id to its
//! next state; unknown pairs leave the state untouched.
//!
//! ```rust
//! use glide_core::fsm::{EventId, StateTransitions};
//!
//! const PRESS: EventId = 1;
//! const RELEASE: EventId = 2;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Button {
//!     Idle,
//!     Pressed,
//! }
//!
//! impl StateTransitions for Button {
//!     fn on_event(&self, event: EventId) -> Option<Self> {
//!         match (self, event) {
//!             (Button::Idle, PRESS) => Some(Button::Pressed),
//!             (Button::Pressed, RELEASE) => Some(Button::Idle),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Button::Idle;
//! assert!(state.apply(PRESS));
//! assert!(!state.apply(PRESS));
//! assert_eq!(state, Button::Pressed);
//! ```

use std::hash::Hash;

/// Identifier for an event type
pub type EventId = u32;

/// Trait for state types that handle event transitions
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventId) -> Option<Self>;

    /// Apply `event` in place. Returns whether a transition happened.
    fn apply(&mut self, event: EventId) -> bool {
        match self.on_event(event) {
            Some(next) => {
                tracing::trace!("{:?} --{}--> {:?}", self, event, next);
                *self = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTER: EventId = 1;
    const LEAVE: EventId = 2;
    const DOWN: EventId = 3;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Hover {
        Idle,
        Hovered,
        Pressed,
    }

    impl StateTransitions for Hover {
        fn on_event(&self, event: EventId) -> Option<Self> {
            match (self, event) {
                (Hover::Idle, ENTER) => Some(Hover::Hovered),
                (Hover::Hovered, LEAVE) => Some(Hover::Idle),
                (Hover::Hovered, DOWN) => Some(Hover::Pressed),
                (Hover::Pressed, LEAVE) => Some(Hover::Idle),
                _ => None,
            }
        }
    }

    #[test]
    fn test_simple_transitions() {
        let mut state = Hover::Idle;
        assert!(state.apply(ENTER));
        assert_eq!(state, Hover::Hovered);
        assert!(state.apply(DOWN));
        assert_eq!(state, Hover::Pressed);
        assert!(state.apply(LEAVE));
        assert_eq!(state, Hover::Idle);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut state = Hover::Idle;
        assert!(!state.apply(DOWN));
        assert_eq!(state, Hover::Idle);
    }
}
