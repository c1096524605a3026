//! Host abstraction
//!
//! Rendering lives outside this crate. A [`ScrollHost`] exposes the handful
//! of measurements and native scroll primitives the engine needs from the
//! rendered tree. Absent elements are reported as `None`; the engine treats
//! them as no-ops.

use glide_core::ElementId;

use crate::direction::Axis;

/// Native scroll offset of the container, in pixels from the content start
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub top: f32,
    pub left: f32,
}

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset { top: 0.0, left: 0.0 };

    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }
}

/// Structural elements of a rendered scrollable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Outermost widget element
    Root,
    /// Receives gesture notifications
    Wrapper,
    /// Element with the native scroll position
    Container,
    /// Translated content element
    Content,
    /// Optional inner wrapper around user content
    ScrollViewContent,
    TopPocket,
    BottomPocket,
}

/// Measured extents of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBox {
    pub client_width: f32,
    pub client_height: f32,
    pub scroll_width: f32,
    pub scroll_height: f32,
    pub offset_width: f32,
    pub offset_height: f32,
    pub padding_bottom: f32,
    pub overflow_x_hidden: bool,
    pub overflow_y_hidden: bool,
}

impl ElementBox {
    /// A box whose client, scroll and offset sizes all match
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            client_width: width,
            client_height: height,
            scroll_width: width,
            scroll_height: height,
            offset_width: width,
            offset_height: height,
            ..Default::default()
        }
    }

    pub fn client_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.client_height,
            Axis::Horizontal => self.client_width,
        }
    }

    pub fn scroll_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.scroll_height,
            Axis::Horizontal => self.scroll_width,
        }
    }

    /// Largest native scroll offset on `axis`
    pub fn scroll_max(&self, axis: Axis) -> f32 {
        (self.scroll_size(axis) - self.client_size(axis)).max(0.0)
    }
}

/// Part of a scrollbar an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollbarPart {
    Track,
    Thumb,
}

/// Alignment for [`ScrollHost::scroll_into_view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    #[default]
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    /// Vertical alignment
    pub block: ScrollAlign,
    /// Horizontal alignment
    pub inline: ScrollAlign,
}

/// The rendered tree as seen by a scrollable
pub trait ScrollHost {
    /// Handle for the element playing `role`
    fn element(&self, role: ElementRole) -> Option<ElementId>;

    /// Current extents of the element playing `role`
    fn measure(&self, role: ElementRole) -> Option<ElementBox>;

    /// Native scroll offset of the container
    fn scroll_position(&self) -> Option<ScrollOffset>;

    /// Write the native scroll offset on one axis. Hosts clamp the value
    /// to the scrollable range the way a browser does.
    fn set_scroll(&mut self, axis: Axis, value: f32);

    /// Scrollbar hit testing for an event target
    fn scrollbar_part(&self, target: ElementId) -> Option<(Axis, ScrollbarPart)>;

    /// Whether `target` lies inside this scrollable and not inside a nested
    /// simulated scrollable
    fn is_own_content(&self, target: ElementId) -> bool;

    /// Native scroll-into-view of `element`
    fn scroll_into_view(&mut self, element: ElementId, options: ScrollIntoViewOptions);

    /// Page offset of the root element
    fn element_offset(&self) -> Option<ScrollOffset> {
        None
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        None
    }

    /// Whether the root element is currently rendered visible
    fn is_visible(&self) -> bool {
        true
    }
}
