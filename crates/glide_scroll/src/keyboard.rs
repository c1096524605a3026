//! Keyboard navigation
//!
//! Maps key presses to scroll commands. Tab is special: it is never handled,
//! but it marks that native focus traversal may move the real scroll
//! position, which the next scroll event reconciles.

use glide_core::KeyCode;

use crate::math::in_range;

/// Line scroll distance at a device pixel ratio of 1
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;

/// Command a key press maps to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    /// Pending native scroll reconciliation; not handled
    Tab,
    /// Scroll by whole lines along each axis
    Line { x: f32, y: f32 },
    /// Scroll by whole container extents along the wheel axis
    Page(f32),
    Home,
    End,
}

impl KeyCommand {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let command = match key {
            KeyCode::TAB => KeyCommand::Tab,
            KeyCode::DOWN => KeyCommand::Line { x: 0.0, y: 1.0 },
            KeyCode::UP => KeyCommand::Line { x: 0.0, y: -1.0 },
            KeyCode::RIGHT => KeyCommand::Line { x: 1.0, y: 0.0 },
            KeyCode::LEFT => KeyCommand::Line { x: -1.0, y: 0.0 },
            KeyCode::PAGE_DOWN => KeyCommand::Page(1.0),
            KeyCode::PAGE_UP => KeyCommand::Page(-1.0),
            KeyCode::HOME => KeyCommand::Home,
            KeyCode::END => KeyCommand::End,
            _ => return None,
        };
        Some(command)
    }

    /// Whether the key counts as handled (stops propagation)
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyCommand::Tab)
    }
}

/// Line height in CSS pixels for the given device pixel ratio
pub fn line_height(device_pixel_ratio: Option<f32>) -> f32 {
    match device_pixel_ratio {
        Some(ratio) if ratio > 0.0 => SCROLL_LINE_HEIGHT / ratio,
        _ => SCROLL_LINE_HEIGHT,
    }
}

/// Tracks a pending Tab reconciliation
#[derive(Debug, Default)]
pub struct TabReconciler {
    pending: bool,
}

impl TabReconciler {
    pub fn mark(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Resolve a pending reconciliation. When both stored locations lie
    /// within the native scroll range, returns the `(horizontal, vertical)`
    /// locations matching the native offset.
    pub fn reconcile(
        &mut self,
        locations: (f32, f32),
        native: (f32, f32),
        native_max: (f32, f32),
    ) -> Option<(f32, f32)> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        let (h, v) = locations;
        let (left, top) = native;
        let (left_max, top_max) = native_max;
        if in_range(h, -left_max, 0.0) && in_range(v, -top_max, 0.0) {
            Some((-left, -top))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCommand::from_key(KeyCode::DOWN), Some(KeyCommand::Line { x: 0.0, y: 1.0 }));
        assert_eq!(KeyCommand::from_key(KeyCode::PAGE_UP), Some(KeyCommand::Page(-1.0)));
        assert_eq!(KeyCommand::from_key(KeyCode::END), Some(KeyCommand::End));
        assert_eq!(KeyCommand::from_key(KeyCode::ENTER), None);
        assert!(!KeyCommand::Tab.is_handled());
        assert!(KeyCommand::Home.is_handled());
    }

    #[test]
    fn test_line_height_by_pixel_ratio() {
        assert_eq!(line_height(None), 40.0);
        assert_eq!(line_height(Some(2.0)), 20.0);
        assert_eq!(line_height(Some(1.5)), 40.0 / 1.5);
        assert_eq!(line_height(Some(0.0)), 40.0);
    }

    #[test]
    fn test_tab_reconcile_once() {
        let mut tab = TabReconciler::default();
        assert_eq!(tab.reconcile((0.0, -50.0), (0.0, 80.0), (0.0, 400.0)), None);

        tab.mark();
        assert_eq!(
            tab.reconcile((0.0, -50.0), (0.0, 80.0), (0.0, 400.0)),
            Some((0.0, -80.0))
        );
        assert!(!tab.is_pending());
    }

    #[test]
    fn test_tab_reconcile_skips_out_of_range_locations() {
        let mut tab = TabReconciler::default();
        tab.mark();
        assert_eq!(tab.reconcile((0.0, 30.0), (0.0, 0.0), (0.0, 400.0)), None);
        assert!(!tab.is_pending());
    }
}
