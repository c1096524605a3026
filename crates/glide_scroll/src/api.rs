//! Public command and query surface
//!
//! Commands mutate and return nothing; their effects show up in subsequent
//! queries and callbacks. Queries read the real container through the host.

use glide_core::ElementId;

use crate::host::{ScrollIntoViewOptions, ScrollOffset};
use crate::location::ScrollTarget;

pub trait ScrollCommands {
    /// Scroll by a distance. A zero distance on both axes does nothing.
    fn scroll_by(&mut self, distance: ScrollTarget);

    /// Scroll to an absolute offset
    fn scroll_to(&mut self, target: ScrollTarget);

    /// Bring `element` into view, then adopt whatever native scroll that
    /// caused on the active axes
    fn scroll_to_element(&mut self, element: ElementId, options: Option<ScrollIntoViewOptions>);

    /// Start a refresh without a pull-down gesture
    fn refresh(&mut self);

    /// Signal that a refresh or reach-bottom load finished
    fn release(&mut self);
}

pub trait ScrollQueries {
    /// Element holding user content (the inner wrapper when present)
    fn content(&self) -> Option<ElementId>;

    fn container(&self) -> Option<ElementId>;

    fn scroll_offset(&self) -> ScrollOffset;

    fn scroll_top(&self) -> f32 {
        self.scroll_offset().top
    }

    fn scroll_left(&self) -> f32 {
        self.scroll_offset().left
    }

    fn client_height(&self) -> f32;

    fn client_width(&self) -> f32;

    fn scroll_height(&self) -> f32;

    fn scroll_width(&self) -> f32;
}
