//! Size and offset tracking
//!
//! Measurements are refreshed on layout-affecting triggers only (mount,
//! dimension change, visibility, gesture validation), never per frame.

use crate::direction::Axis;
use crate::host::{ElementRole, ScrollHost, ScrollOffset};
use crate::math::round_half_up;

/// Last measured extents of a scrollable
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sizes {
    pub container_client_width: f32,
    pub container_client_height: f32,
    pub content_client_width: f32,
    pub content_client_height: f32,
    pub content_scroll_width: f32,
    pub content_scroll_height: f32,
    pub content_overflow_x_hidden: bool,
    pub content_overflow_y_hidden: bool,
    pub content_padding_bottom: f32,
    pub top_pocket_height: f32,
    pub bottom_pocket_height: f32,
    /// Page offset of the root, used to map pointer positions onto tracks
    pub scrollable_offset: ScrollOffset,
    pub content_present: bool,
}

impl Sizes {
    pub fn container_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.container_client_height,
            Axis::Horizontal => self.container_client_width,
        }
    }

    /// Effective content width. Client size is authoritative when overflow
    /// is hidden; otherwise the larger of scroll and client size, which
    /// accounts for absolutely positioned children.
    pub fn content_width(&self) -> f32 {
        if !self.content_present {
            return 0.0;
        }
        if self.content_overflow_x_hidden {
            return self.content_client_width;
        }
        self.content_scroll_width.max(self.content_client_width)
    }

    pub fn content_height(&self) -> f32 {
        if !self.content_present {
            return 0.0;
        }
        if self.content_overflow_y_hidden {
            return self.content_client_height;
        }
        self.content_scroll_height.max(self.content_client_height)
    }

    pub fn content_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.content_height(),
            Axis::Horizontal => self.content_width(),
        }
    }

    /// Whether content overflows the container on `axis`
    pub fn has_overflow(&self, axis: Axis) -> bool {
        round_half_up(-(self.content_size(axis) - self.container_size(axis)).max(0.0)) < 0.0
    }

    pub fn scrollable_offset_on(&self, axis: Axis) -> f32 {
        self.scrollable_offset.get(axis)
    }
}

/// Keeps [`Sizes`] in sync with the host
#[derive(Debug, Default)]
pub struct SizeTracker {
    sizes: Sizes,
}

impl SizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes(&self) -> &Sizes {
        &self.sizes
    }

    /// Re-measure every element the host currently has. Values for absent
    /// elements keep their previous measurement.
    pub fn update<H: ScrollHost + ?Sized>(&mut self, host: &H) {
        let sizes = &mut self.sizes;

        if let Some(container) = host.measure(ElementRole::Container) {
            sizes.container_client_width = container.client_width;
            sizes.container_client_height = container.client_height;
        }

        let content = host.measure(ElementRole::Content);
        sizes.content_present = content.is_some();
        if let Some(content) = content {
            sizes.content_client_width = content.client_width;
            sizes.content_client_height = content.client_height;
            sizes.content_scroll_width = content.scroll_width;
            sizes.content_scroll_height = content.scroll_height;
            sizes.content_overflow_x_hidden = content.overflow_x_hidden;
            sizes.content_overflow_y_hidden = content.overflow_y_hidden;
            sizes.content_padding_bottom = content.padding_bottom;
        }

        if let Some(pocket) = host.measure(ElementRole::TopPocket) {
            sizes.top_pocket_height = pocket.client_height;
        }
        if let Some(pocket) = host.measure(ElementRole::BottomPocket) {
            sizes.bottom_pocket_height = pocket.client_height;
        }

        sizes.scrollable_offset = host.element_offset().unwrap_or_default();

        tracing::trace!(
            "Sizes updated: container=({:.0}, {:.0}) content=({:.0}, {:.0}) pockets=({:.0}, {:.0})",
            sizes.container_client_width,
            sizes.container_client_height,
            sizes.content_width(),
            sizes.content_height(),
            sizes.top_pocket_height,
            sizes.bottom_pocket_height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    #[test]
    fn test_update_measures_container_and_content() {
        let host = MemoryHost::new(200.0, 100.0, 300.0, 800.0);
        let mut tracker = SizeTracker::new();
        tracker.update(&host);

        let sizes = tracker.sizes();
        assert_eq!(sizes.container_client_width, 200.0);
        assert_eq!(sizes.container_client_height, 100.0);
        assert_eq!(sizes.content_width(), 300.0);
        assert_eq!(sizes.content_height(), 800.0);
        assert!(sizes.has_overflow(Axis::Vertical));
    }

    #[test]
    fn test_scroll_size_wins_unless_overflow_hidden() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 300.0);
        host.set_content_scroll_size(100.0, 450.0);
        let mut tracker = SizeTracker::new();
        tracker.update(&host);
        assert_eq!(tracker.sizes().content_height(), 450.0);

        host.set_content_overflow_hidden(false, true);
        tracker.update(&host);
        assert_eq!(tracker.sizes().content_height(), 300.0);
    }

    #[test]
    fn test_missing_content_measures_zero() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 300.0);
        host.remove(ElementRole::Content);
        let mut tracker = SizeTracker::new();
        tracker.update(&host);
        assert_eq!(tracker.sizes().content_height(), 0.0);
        assert!(!tracker.sizes().has_overflow(Axis::Vertical));
    }

    #[test]
    fn test_sub_pixel_overflow_is_not_scrollable() {
        let host = MemoryHost::new(100.0, 100.0, 100.0, 100.4);
        let mut tracker = SizeTracker::new();
        tracker.update(&host);
        assert!(!tracker.sizes().has_overflow(Axis::Vertical));
    }
}
