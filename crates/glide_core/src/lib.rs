//! Glide Core
//!
//! This crate provides the foundational primitives for Glide widgets:
//!
//! - **Input Events**: Normalized gesture and keyboard records
//! - **State Transitions**: Enum-based state machines for interaction states
//! - **Subscriptions**: Callback registries with deterministic teardown
//!
//! # Example
//!
//! ```rust
//! use glide_core::subscription::Subscriptions;
//!
//! let mut subs: Subscriptions<&'static str, i32> = Subscriptions::new();
//! let id = subs.subscribe("changed", |value| println!("changed to {value}"));
//!
//! assert_eq!(subs.emit(&"changed", &5), 1);
//! assert!(subs.unsubscribe(id));
//! assert_eq!(subs.emit(&"changed", &6), 0);
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod subscription;

pub use error::{GlideError, Result};
pub use events::{
    ElementId, GestureEvent, InputKind, KeyCode, KeyEvent, Modifiers, OriginalEvent, Point,
    Vector,
};
pub use fsm::{EventId, StateTransitions};
pub use subscription::{Disposer, SubscriptionId, Subscriptions};
