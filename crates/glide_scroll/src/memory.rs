//! In-memory host
//!
//! A headless [`ScrollHost`] that models a container, its content and
//! optional pockets with browser-like native scroll clamping. Used by the
//! demo and the tests.

use glide_core::ElementId;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::direction::Axis;
use crate::host::{
    ElementBox, ElementRole, ScrollAlign, ScrollHost, ScrollIntoViewOptions, ScrollOffset,
    ScrollbarPart,
};

/// Position of a child element relative to the content origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

#[derive(Debug)]
pub struct MemoryHost {
    ids: FxHashMap<ElementRole, ElementId>,
    boxes: FxHashMap<ElementRole, ElementBox>,
    scroll: ScrollOffset,
    visible: bool,
    device_pixel_ratio: Option<f32>,
    offset: Option<ScrollOffset>,
    scrollbar_parts: FxHashMap<ElementId, (Axis, ScrollbarPart)>,
    own_content: FxHashSet<ElementId>,
    rects: FxHashMap<ElementId, ElementRect>,
    next_id: u64,
}

impl MemoryHost {
    /// A container of `container_width x container_height` holding content
    /// of `content_width x content_height`
    pub fn new(container_width: f32, container_height: f32, content_width: f32, content_height: f32) -> Self {
        let mut host = Self {
            ids: FxHashMap::default(),
            boxes: FxHashMap::default(),
            scroll: ScrollOffset::ZERO,
            visible: true,
            device_pixel_ratio: None,
            offset: Some(ScrollOffset::ZERO),
            scrollbar_parts: FxHashMap::default(),
            own_content: FxHashSet::default(),
            rects: FxHashMap::default(),
            next_id: 1,
        };

        for role in [ElementRole::Root, ElementRole::Wrapper, ElementRole::Container] {
            host.insert_role(role, ElementBox::sized(container_width, container_height));
        }
        let content = host.insert_role(ElementRole::Content, ElementBox::sized(content_width, content_height));
        host.own_content.insert(content);
        host
    }

    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert_role(&mut self, role: ElementRole, size: ElementBox) -> ElementId {
        let id = self.allocate();
        self.ids.insert(role, id);
        self.boxes.insert(role, size);
        id
    }

    /// Add top and bottom pockets inside the content
    pub fn with_pockets(mut self, top_height: f32, bottom_height: f32) -> Self {
        let width = self.boxes.get(&ElementRole::Content).map_or(0.0, |b| b.client_width);
        let top = self.insert_role(ElementRole::TopPocket, ElementBox::sized(width, top_height));
        let bottom = self.insert_role(ElementRole::BottomPocket, ElementBox::sized(width, bottom_height));
        self.own_content.insert(top);
        self.own_content.insert(bottom);
        if let Some(content) = self.boxes.get_mut(&ElementRole::Content) {
            let height = content.client_height + top_height + bottom_height;
            *content = ElementBox {
                padding_bottom: content.padding_bottom,
                ..ElementBox::sized(content.client_width, height)
            };
        }
        self
    }

    /// Wrap user content in a scroll view content element
    pub fn with_scroll_view_content(mut self) -> Self {
        let size = self.boxes.get(&ElementRole::Content).copied().unwrap_or_default();
        let id = self.insert_role(ElementRole::ScrollViewContent, size);
        self.own_content.insert(id);
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    pub fn with_element_offset(mut self, offset: Option<ScrollOffset>) -> Self {
        self.offset = offset;
        self
    }

    /// Register a scrollbar element and return its handle
    pub fn add_scrollbar_part(&mut self, axis: Axis, part: ScrollbarPart) -> ElementId {
        let id = self.allocate();
        self.scrollbar_parts.insert(id, (axis, part));
        id
    }

    /// Register a child of the content at `rect`
    pub fn add_child(&mut self, rect: ElementRect) -> ElementId {
        let id = self.allocate();
        self.own_content.insert(id);
        self.rects.insert(id, rect);
        id
    }

    /// An element outside this scrollable (or inside a nested one)
    pub fn add_foreign_element(&mut self) -> ElementId {
        self.allocate()
    }

    pub fn set_content_size(&mut self, width: f32, height: f32) {
        if let Some(content) = self.boxes.get_mut(&ElementRole::Content) {
            *content = ElementBox {
                padding_bottom: content.padding_bottom,
                overflow_x_hidden: content.overflow_x_hidden,
                overflow_y_hidden: content.overflow_y_hidden,
                ..ElementBox::sized(width, height)
            };
        }
        self.clamp_scroll();
    }

    /// Override the content's scroll extents separately from its client size
    pub fn set_content_scroll_size(&mut self, width: f32, height: f32) {
        if let Some(content) = self.boxes.get_mut(&ElementRole::Content) {
            content.scroll_width = width;
            content.scroll_height = height;
        }
    }

    pub fn set_content_overflow_hidden(&mut self, x: bool, y: bool) {
        if let Some(content) = self.boxes.get_mut(&ElementRole::Content) {
            content.overflow_x_hidden = x;
            content.overflow_y_hidden = y;
        }
    }

    pub fn set_content_padding_bottom(&mut self, padding: f32) {
        if let Some(content) = self.boxes.get_mut(&ElementRole::Content) {
            content.padding_bottom = padding;
        }
    }

    pub fn set_container_size(&mut self, width: f32, height: f32) {
        for role in [ElementRole::Root, ElementRole::Wrapper, ElementRole::Container] {
            self.boxes.insert(role, ElementBox::sized(width, height));
        }
        self.clamp_scroll();
    }

    pub fn remove(&mut self, role: ElementRole) {
        if let Some(id) = self.ids.remove(&role) {
            self.own_content.remove(&id);
        }
        self.boxes.remove(&role);
    }

    /// Hidden containers lose their native scroll position
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.scroll = ScrollOffset::ZERO;
        }
    }

    /// Write the native scroll position as a user agent would (keyboard
    /// focus, find-in-page) without going through the engine
    pub fn scroll_natively(&mut self, top: f32, left: f32) {
        self.set_scroll(Axis::Vertical, top);
        self.set_scroll(Axis::Horizontal, left);
    }

    fn container_box(&self) -> Option<ElementBox> {
        let container = self.boxes.get(&ElementRole::Container)?;
        let content = self.boxes.get(&ElementRole::Content).copied().unwrap_or_default();
        Some(ElementBox {
            scroll_width: container.client_width.max(content.offset_width),
            scroll_height: container.client_height.max(content.offset_height),
            ..*container
        })
    }

    fn scroll_max(&self, axis: Axis) -> f32 {
        self.container_box().map_or(0.0, |b| b.scroll_max(axis))
    }

    fn clamp_scroll(&mut self) {
        self.scroll.top = self.scroll.top.clamp(0.0, self.scroll_max(Axis::Vertical));
        self.scroll.left = self.scroll.left.clamp(0.0, self.scroll_max(Axis::Horizontal));
    }
}

fn align(current: f32, start: f32, size: f32, viewport: f32, mode: ScrollAlign) -> f32 {
    let end = start + size;
    match mode {
        ScrollAlign::Start => start,
        ScrollAlign::End => end - viewport,
        ScrollAlign::Center => start + size / 2.0 - viewport / 2.0,
        ScrollAlign::Nearest => {
            if start < current || size > viewport {
                start
            } else if end > current + viewport {
                end - viewport
            } else {
                current
            }
        }
    }
}

impl ScrollHost for MemoryHost {
    fn element(&self, role: ElementRole) -> Option<ElementId> {
        self.ids.get(&role).copied()
    }

    fn measure(&self, role: ElementRole) -> Option<ElementBox> {
        if role == ElementRole::Container {
            return self.container_box();
        }
        self.boxes.get(&role).copied()
    }

    fn scroll_position(&self) -> Option<ScrollOffset> {
        self.boxes.contains_key(&ElementRole::Container).then_some(self.scroll)
    }

    fn set_scroll(&mut self, axis: Axis, value: f32) {
        if !self.visible {
            return;
        }
        let value = value.clamp(0.0, self.scroll_max(axis));
        match axis {
            Axis::Vertical => self.scroll.top = value,
            Axis::Horizontal => self.scroll.left = value,
        }
    }

    fn scrollbar_part(&self, target: ElementId) -> Option<(Axis, ScrollbarPart)> {
        self.scrollbar_parts.get(&target).copied()
    }

    fn is_own_content(&self, target: ElementId) -> bool {
        self.own_content.contains(&target)
    }

    fn scroll_into_view(&mut self, element: ElementId, options: ScrollIntoViewOptions) {
        let (Some(rect), Some(container)) = (self.rects.get(&element).copied(), self.container_box()) else {
            return;
        };
        let top = align(self.scroll.top, rect.top, rect.height, container.client_height, options.block);
        let left = align(self.scroll.left, rect.left, rect.width, container.client_width, options.inline);
        self.set_scroll(Axis::Vertical, top);
        self.set_scroll(Axis::Horizontal, left);
    }

    fn element_offset(&self) -> Option<ScrollOffset> {
        self.offset
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        self.device_pixel_ratio
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_scroll_is_clamped() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 500.0);
        host.set_scroll(Axis::Vertical, 1000.0);
        assert_eq!(host.scroll_position().unwrap().top, 400.0);
        host.set_scroll(Axis::Vertical, -5.0);
        assert_eq!(host.scroll_position().unwrap().top, 0.0);
        host.set_scroll(Axis::Horizontal, 50.0);
        assert_eq!(host.scroll_position().unwrap().left, 0.0);
    }

    #[test]
    fn test_hiding_resets_native_scroll() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 500.0);
        host.set_scroll(Axis::Vertical, 120.0);
        host.set_visible(false);
        assert_eq!(host.scroll_position().unwrap(), ScrollOffset::ZERO);
        host.set_scroll(Axis::Vertical, 50.0);
        assert_eq!(host.scroll_position().unwrap().top, 0.0);
    }

    #[test]
    fn test_pockets_extend_content() {
        let host = MemoryHost::new(100.0, 100.0, 100.0, 500.0).with_pockets(40.0, 30.0);
        assert_eq!(host.measure(ElementRole::Content).unwrap().scroll_height, 570.0);
        assert_eq!(host.measure(ElementRole::TopPocket).unwrap().client_height, 40.0);
    }

    #[test]
    fn test_scroll_into_view_nearest() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 1000.0);
        let below = host.add_child(ElementRect::new(300.0, 0.0, 100.0, 50.0));
        host.scroll_into_view(below, ScrollIntoViewOptions::default());
        assert_eq!(host.scroll_position().unwrap().top, 250.0);

        let above = host.add_child(ElementRect::new(100.0, 0.0, 100.0, 20.0));
        host.scroll_into_view(above, ScrollIntoViewOptions::default());
        assert_eq!(host.scroll_position().unwrap().top, 100.0);
    }

    #[test]
    fn test_removed_elements_are_absent() {
        let mut host = MemoryHost::new(100.0, 100.0, 100.0, 500.0);
        host.remove(ElementRole::Content);
        assert!(host.element(ElementRole::Content).is_none());
        assert!(host.measure(ElementRole::Content).is_none());
    }
}
