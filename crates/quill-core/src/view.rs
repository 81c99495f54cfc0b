//! View state: font size, theme, status bar visibility.
//!
//! None of this survives a restart; the shell rebuilds `ViewState` with the
//! defaults on every launch.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeKind;

/// Font size at startup, in points.
pub const DEFAULT_FONT_SIZE: u16 = 13;

/// Points added or removed per zoom step.
pub const ZOOM_STEP: u16 = 2;

/// Zoom-out results at or below this size are discarded.
pub const FONT_SIZE_FLOOR: u16 = 4;

/// Mutable presentation state of the single editor window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    font_size: u16,
    theme: ThemeKind,
    status_bar_visible: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            theme: ThemeKind::Light,
            status_bar_visible: true,
        }
    }

    /// Current font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Current theme.
    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Whether the status bar is shown.
    pub fn status_bar_visible(&self) -> bool {
        self.status_bar_visible
    }

    /// Grows the font by one step, unconditionally.
    pub fn zoom_in(&mut self) {
        self.font_size = self.font_size.saturating_add(ZOOM_STEP);
    }

    /// Shrinks the font by one step.
    ///
    /// The check runs on the post-decrement value: a result at or below the
    /// floor is discarded and the previous size is kept. Returns whether the
    /// change was applied.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.font_size.saturating_sub(ZOOM_STEP);
        if next > FONT_SIZE_FLOOR {
            self.font_size = next;
            true
        } else {
            false
        }
    }

    /// Switches every themed surface to the given palette.
    pub fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    /// Shows the status bar if hidden, hides it if shown.
    pub fn toggle_status_bar(&mut self) {
        self.status_bar_visible = !self.status_bar_visible;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ViewState::new();
        assert_eq!(view.font_size(), 13);
        assert_eq!(view.theme(), ThemeKind::Light);
        assert!(view.status_bar_visible());
    }

    #[test]
    fn test_zoom_in_is_unconditional() {
        let mut view = ViewState::new();
        for _ in 0..50 {
            view.zoom_in();
        }
        assert_eq!(view.font_size(), 13 + 50 * 2);
    }

    #[test]
    fn test_zoom_out_floor_rejects_post_decrement() {
        let mut view = ViewState::new();
        // 13 -> 11 -> 9 -> 7 -> 5, then 3 would breach the floor.
        for _ in 0..4 {
            assert!(view.zoom_out());
        }
        assert_eq!(view.font_size(), 5);
        assert!(!view.zoom_out());
        assert_eq!(view.font_size(), 5);
    }

    #[test]
    fn test_zoom_out_from_six_stays_at_six() {
        // 6 - 2 = 4, which is at the floor, so the change is discarded.
        let mut view = ViewState {
            font_size: 6,
            ..ViewState::new()
        };
        assert!(!view.zoom_out());
        assert_eq!(view.font_size(), 6);
        assert!(!view.zoom_out());
        assert_eq!(view.font_size(), 6);
    }

    #[test]
    fn test_status_bar_toggle_is_involution() {
        let mut view = ViewState::new();
        let initial = view.status_bar_visible();
        view.toggle_status_bar();
        assert_ne!(view.status_bar_visible(), initial);
        view.toggle_status_bar();
        assert_eq!(view.status_bar_visible(), initial);
    }

    #[test]
    fn test_set_theme() {
        let mut view = ViewState::new();
        view.set_theme(ThemeKind::Purple);
        assert_eq!(view.theme(), ThemeKind::Purple);
    }
}
