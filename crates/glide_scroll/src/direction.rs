//! Scroll direction resolution
//!
//! The configured mode is the only stored value. Everything else is derived
//! from it on demand.

use serde::{Deserialize, Serialize};

/// Configured scroll mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollableDirection {
    /// Vertical scrolling only (default)
    #[default]
    Vertical,
    /// Horizontal scrolling only
    Horizontal,
    /// Both directions (free scroll)
    Both,
}

/// Resolved axis flags for a [`ScrollableDirection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDirection {
    pub is_vertical: bool,
    pub is_horizontal: bool,
    pub is_both: bool,
}

impl ScrollDirection {
    pub const fn resolve(mode: ScrollableDirection) -> Self {
        match mode {
            ScrollableDirection::Vertical => Self {
                is_vertical: true,
                is_horizontal: false,
                is_both: false,
            },
            ScrollableDirection::Horizontal => Self {
                is_vertical: false,
                is_horizontal: true,
                is_both: false,
            },
            ScrollableDirection::Both => Self {
                is_vertical: true,
                is_horizontal: true,
                is_both: true,
            },
        }
    }
}

impl From<ScrollableDirection> for ScrollDirection {
    fn from(mode: ScrollableDirection) -> Self {
        Self::resolve(mode)
    }
}

/// A single scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The set of axes an operation is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveAxes {
    #[default]
    None,
    Vertical,
    Horizontal,
    Both,
}

impl ActiveAxes {
    pub fn from_flags(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (true, true) => ActiveAxes::Both,
            (true, false) => ActiveAxes::Horizontal,
            (false, true) => ActiveAxes::Vertical,
            (false, false) => ActiveAxes::None,
        }
    }

    /// Axes in dispatch order (horizontal first)
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        let list: &'static [Axis] = match self {
            ActiveAxes::None => &[],
            ActiveAxes::Vertical => &[Axis::Vertical],
            ActiveAxes::Horizontal => &[Axis::Horizontal],
            ActiveAxes::Both => &[Axis::Horizontal, Axis::Vertical],
        };
        list.iter().copied()
    }

    pub fn contains(self, axis: Axis) -> bool {
        match self {
            ActiveAxes::None => false,
            ActiveAxes::Both => true,
            ActiveAxes::Vertical => axis == Axis::Vertical,
            ActiveAxes::Horizontal => axis == Axis::Horizontal,
        }
    }
}

impl From<ScrollableDirection> for ActiveAxes {
    fn from(mode: ScrollableDirection) -> Self {
        let resolved = ScrollDirection::resolve(mode);
        ActiveAxes::from_flags(resolved.is_horizontal, resolved.is_vertical)
    }
}
