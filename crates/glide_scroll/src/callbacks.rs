//! Lifecycle callbacks

use glide_core::{GestureEvent, Subscriptions};

use crate::direction::{Axis, ScrollDirection, ScrollableDirection};
use crate::host::{ElementBox, ScrollOffset};
use crate::math::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollEventKind {
    Start,
    End,
    Updated,
    Bounce,
    Scroll,
    PullDown,
    ReachBottom,
    VisibilityChange,
}

/// Payload passed to every callback
///
/// Boundary flags are present only for the axes the scrollable scrolls on.
/// `PullDown` and `ReachBottom` carry an empty payload; `VisibilityChange`
/// carries only `visible`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollEventArgs {
    pub event: Option<GestureEvent>,
    pub scroll_offset: Option<ScrollOffset>,
    pub reached_top: Option<bool>,
    pub reached_bottom: Option<bool>,
    pub reached_left: Option<bool>,
    pub reached_right: Option<bool>,
    pub visible: Option<bool>,
}

impl ScrollEventArgs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn visibility(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Default::default()
        }
    }

    /// Standard payload with boundary flags computed from the native offset
    pub fn new(
        event: Option<GestureEvent>,
        direction: ScrollableDirection,
        scroll_offset: ScrollOffset,
        container: Option<&ElementBox>,
        top_pocket_size: f32,
    ) -> Self {
        let resolved = ScrollDirection::resolve(direction);
        let mut args = Self {
            event,
            scroll_offset: Some(scroll_offset),
            ..Default::default()
        };

        let max = |axis| container.map_or(0.0, |c| c.scroll_max(axis));
        let left = round_half_up(scroll_offset.left);
        let top = round_half_up(scroll_offset.top);

        if resolved.is_horizontal {
            args.reached_left = Some(left <= 0.0);
            args.reached_right = Some(left >= round_half_up(max(Axis::Horizontal)));
        }
        if resolved.is_vertical {
            args.reached_top = Some(top <= 0.0);
            args.reached_bottom = Some(top >= round_half_up(max(Axis::Vertical) - top_pocket_size));
        }
        args
    }
}

/// Registry of scrollable callbacks
pub type ScrollCallbacks = Subscriptions<ScrollEventKind, ScrollEventArgs>;

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> ElementBox {
        ElementBox {
            scroll_height: 500.0,
            scroll_width: 100.0,
            ..ElementBox::sized(100.0, 100.0)
        }
    }

    #[test]
    fn test_vertical_boundaries() {
        let c = container();
        let args = ScrollEventArgs::new(None, ScrollableDirection::Vertical, ScrollOffset::new(0.0, 0.0), Some(&c), 0.0);
        assert_eq!(args.reached_top, Some(true));
        assert_eq!(args.reached_bottom, Some(false));
        assert_eq!(args.reached_left, None);

        let args = ScrollEventArgs::new(None, ScrollableDirection::Vertical, ScrollOffset::new(399.6, 0.0), Some(&c), 0.0);
        assert_eq!(args.reached_top, Some(false));
        assert_eq!(args.reached_bottom, Some(true));
    }

    #[test]
    fn test_top_pocket_shortens_bottom_boundary() {
        let c = container();
        let args = ScrollEventArgs::new(None, ScrollableDirection::Both, ScrollOffset::new(360.0, 0.0), Some(&c), 40.0);
        assert_eq!(args.reached_bottom, Some(true));
        assert_eq!(args.reached_left, Some(true));
        assert_eq!(args.reached_right, Some(true));
    }
}
