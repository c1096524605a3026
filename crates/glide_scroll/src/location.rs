//! Scroll targets and distances

use crate::direction::{ScrollDirection, ScrollableDirection};
use crate::host::ScrollOffset;

/// A single value applied to every active axis, or explicit per-axis
/// components
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    Value(f32),
    Offset { top: Option<f32>, left: Option<f32> },
}

impl ScrollTarget {
    pub fn top(top: f32) -> Self {
        ScrollTarget::Offset {
            top: Some(top),
            left: None,
        }
    }

    pub fn left(left: f32) -> Self {
        ScrollTarget::Offset {
            top: None,
            left: Some(left),
        }
    }

    pub fn offset(top: f32, left: f32) -> Self {
        ScrollTarget::Offset {
            top: Some(top),
            left: Some(left),
        }
    }

    /// Per-axis components for `direction`
    pub fn components(self, direction: ScrollableDirection) -> (Option<f32>, Option<f32>) {
        match self {
            ScrollTarget::Offset { top, left } => (top, left),
            ScrollTarget::Value(value) => {
                let resolved = ScrollDirection::resolve(direction);
                (
                    resolved.is_vertical.then_some(value),
                    resolved.is_horizontal.then_some(value),
                )
            }
        }
    }
}

impl From<f32> for ScrollTarget {
    fn from(value: f32) -> Self {
        ScrollTarget::Value(value)
    }
}

impl From<ScrollOffset> for ScrollTarget {
    fn from(offset: ScrollOffset) -> Self {
        ScrollTarget::offset(offset.top, offset.left)
    }
}

/// Convert a distance into a location delta (locations grow toward the
/// content start). Missing components become zero.
pub fn convert_to_location(distance: ScrollTarget, direction: ScrollableDirection) -> ScrollOffset {
    let (top, left) = distance.components(direction);
    ScrollOffset {
        top: top.map_or(0.0, |v| -v),
        left: left.map_or(0.0, |v| -v),
    }
}

/// Distance from `current` to `target`. Components the target leaves out
/// stay put.
pub fn offset_distance(target: ScrollTarget, direction: ScrollableDirection, current: ScrollOffset) -> ScrollTarget {
    let (top, left) = target.components(direction);
    ScrollTarget::Offset {
        top: top.map(|t| t - current.top),
        left: left.map(|l| l - current.left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_applies_to_active_axes() {
        let location = convert_to_location(ScrollTarget::Value(50.0), ScrollableDirection::Vertical);
        assert_eq!(location, ScrollOffset::new(-50.0, 0.0));

        let location = convert_to_location(ScrollTarget::Value(50.0), ScrollableDirection::Both);
        assert_eq!(location, ScrollOffset::new(-50.0, -50.0));
    }

    #[test]
    fn test_partial_offset_leaves_other_axis() {
        let location = convert_to_location(ScrollTarget::left(30.0), ScrollableDirection::Both);
        assert_eq!(location, ScrollOffset::new(0.0, -30.0));
    }

    #[test]
    fn test_offset_distance() {
        let current = ScrollOffset::new(120.0, 10.0);
        let distance = offset_distance(ScrollTarget::top(20.0), ScrollableDirection::Both, current);
        assert_eq!(
            distance,
            ScrollTarget::Offset {
                top: Some(-100.0),
                left: None
            }
        );

        let distance = offset_distance(ScrollTarget::Value(0.0), ScrollableDirection::Horizontal, current);
        assert_eq!(
            distance,
            ScrollTarget::Offset {
                top: None,
                left: Some(-10.0)
            }
        );
    }
}
