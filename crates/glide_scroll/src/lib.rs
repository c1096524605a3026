//! glide_scroll
//!
//! A simulated scrollable container. Gestures, wheel input and keyboard
//! commands move the content through per-axis controllers with inertia and
//! bounce, while the real scroll position of the container is kept in sync
//! through a [`ScrollHost`].
//!
//! - Optional pockets add pull-to-refresh and reach-bottom loading
//! - Lifecycle callbacks report start, scroll, bounce, end and loading
//! - Motion is frame-driven: call [`Scrollable::tick`] with the elapsed time
//!
//! # Example
//!
//! ```rust
//! use glide_scroll::prelude::*;
//!
//! let host = MemoryHost::new(100.0, 100.0, 100.0, 500.0);
//! let mut scrollable = Scrollable::new(host, ScrollableOptions::default());
//!
//! scrollable.scroll_by(ScrollTarget::Value(1000.0));
//! assert_eq!(scrollable.scroll_top(), 400.0);
//!
//! scrollable.scroll_to(ScrollTarget::top(0.0));
//! assert_eq!(scrollable.scroll_top(), 0.0);
//! ```

mod math;

pub mod api;
pub mod axis;
pub mod callbacks;
pub mod direction;
pub mod host;
pub mod keyboard;
pub mod location;
pub mod lock;
pub mod memory;
pub mod options;
pub mod pocket;
pub mod scrollable;
pub mod session;
pub mod sizes;

pub use api::{ScrollCommands, ScrollQueries};
pub use axis::{AxisContext, AxisController, AxisSignal, AxisState, PocketContext};
pub use callbacks::{ScrollCallbacks, ScrollEventArgs, ScrollEventKind};
pub use direction::{ActiveAxes, Axis, ScrollDirection, ScrollableDirection};
pub use host::{
    ElementBox, ElementRole, ScrollAlign, ScrollHost, ScrollIntoViewOptions, ScrollOffset,
    ScrollbarPart,
};
pub use location::ScrollTarget;
pub use memory::{ElementRect, MemoryHost};
pub use options::{ScrollableOptions, ShowScrollbar};
pub use pocket::PocketState;
pub use scrollable::{Scrollable, TouchAction};
pub use session::SessionPhase;
pub use sizes::Sizes;

/// Common imports for scrollable users.
pub mod prelude {
    pub use crate::api::{ScrollCommands, ScrollQueries};
    pub use crate::callbacks::{ScrollEventArgs, ScrollEventKind};
    pub use crate::direction::{Axis, ScrollableDirection};
    pub use crate::host::{ScrollHost, ScrollIntoViewOptions, ScrollOffset};
    pub use crate::location::ScrollTarget;
    pub use crate::memory::MemoryHost;
    pub use crate::options::{ScrollableOptions, ShowScrollbar};
    pub use crate::pocket::PocketState;
    pub use crate::scrollable::Scrollable;
    pub use glide_core::{GestureEvent, KeyCode, KeyEvent};
}
