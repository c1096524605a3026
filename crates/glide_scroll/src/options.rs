//! Scrollable configuration
//!
//! Options deserialize from TOML with every field optional. Unknown
//! enumeration values are rejected here, at the configuration layer.

use glide_core::{GlideError, Result};
use serde::{Deserialize, Serialize};

use crate::direction::ScrollableDirection;

/// When scrollbars are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowScrollbar {
    Never,
    Always,
    /// Visible while a scroll is in progress (default)
    #[default]
    OnScroll,
    /// Visible while hovered or scrolling
    OnHover,
}

/// Recognized scrollable options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollableOptions {
    pub direction: ScrollableDirection,
    pub bounce_enabled: bool,
    pub inertia_enabled: bool,
    pub scroll_by_thumb: bool,
    pub scroll_by_content: bool,
    pub show_scrollbar: ShowScrollbar,
    pub pull_down_enabled: bool,
    pub reach_bottom_enabled: bool,
    pub use_keyboard: bool,
    pub disabled: bool,
    pub visible: bool,
    pub force_generate_pockets: bool,
    pub need_scroll_view_content_wrapper: bool,
    pub need_scroll_view_load_panel: bool,
}

impl Default for ScrollableOptions {
    fn default() -> Self {
        Self {
            direction: ScrollableDirection::Vertical,
            bounce_enabled: true,
            inertia_enabled: true,
            scroll_by_thumb: false,
            scroll_by_content: true,
            show_scrollbar: ShowScrollbar::OnScroll,
            pull_down_enabled: false,
            reach_bottom_enabled: false,
            use_keyboard: true,
            disabled: false,
            visible: true,
            force_generate_pockets: false,
            need_scroll_view_content_wrapper: false,
            need_scroll_view_load_panel: false,
        }
    }
}

impl ScrollableOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| GlideError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GlideError::Serialize(e.to_string()))
    }

    pub fn direction(mut self, direction: ScrollableDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn bounce(mut self, enabled: bool) -> Self {
        self.bounce_enabled = enabled;
        self
    }

    pub fn no_bounce(self) -> Self {
        self.bounce(false)
    }

    pub fn inertia(mut self, enabled: bool) -> Self {
        self.inertia_enabled = enabled;
        self
    }

    pub fn scroll_by_thumb(mut self, enabled: bool) -> Self {
        self.scroll_by_thumb = enabled;
        self
    }

    pub fn scroll_by_content(mut self, enabled: bool) -> Self {
        self.scroll_by_content = enabled;
        self
    }

    pub fn show_scrollbar(mut self, mode: ShowScrollbar) -> Self {
        self.show_scrollbar = mode;
        self
    }

    /// Enable pull-to-refresh and reach-bottom pockets
    pub fn pockets(mut self, pull_down: bool, reach_bottom: bool) -> Self {
        self.force_generate_pockets = true;
        self.pull_down_enabled = pull_down;
        self.reach_bottom_enabled = reach_bottom;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let options = ScrollableOptions::from_toml_str("").unwrap();
        assert_eq!(options, ScrollableOptions::default());
        assert!(options.bounce_enabled);
        assert!(options.scroll_by_content);
        assert!(!options.scroll_by_thumb);
    }

    #[test]
    fn test_parse_partial_document() {
        let options = ScrollableOptions::from_toml_str(
            r#"
            direction = "both"
            bounce_enabled = false
            show_scrollbar = "onHover"
            "#,
        )
        .unwrap();

        assert_eq!(options.direction, ScrollableDirection::Both);
        assert!(!options.bounce_enabled);
        assert_eq!(options.show_scrollbar, ShowScrollbar::OnHover);
        assert!(options.inertia_enabled);
    }

    #[test]
    fn test_invalid_direction_is_config_error() {
        let err = ScrollableOptions::from_toml_str("direction = \"sideways\"").unwrap_err();
        assert!(matches!(err, GlideError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_toml_roundtrip_preserves_custom_values() {
        let options = ScrollableOptions::default()
            .direction(ScrollableDirection::Horizontal)
            .pockets(true, false);
        let text = options.to_toml_string().unwrap();
        assert_eq!(ScrollableOptions::from_toml_str(&text).unwrap(), options);
    }
}
