//! Shared chrome styling.
//!
//! Theme palettes from `quill-core` cover the three themed surfaces (text
//! area, menu bar, status bar). Everything else (dropdown panels, modal
//! dialogs, separators) uses the fixed chrome colors below, so dialogs keep
//! a consistent look across document themes.

use iced::Color;

/// Fixed layout metrics.
pub struct Layout;

impl Layout {
    pub const MENU_BAR_HEIGHT: f32 = 34.0;
    pub const STATUS_BAR_HEIGHT: f32 = 26.0;
    pub const SCROLLBAR_WIDTH: f32 = 8.0;
    /// Line height as a multiple of the font size, used to estimate how many
    /// rows fit the viewport.
    pub const LINE_HEIGHT_FACTOR: f32 = 1.3;
}

pub mod colors {
    use iced::Color;

    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_LIGHT: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
}

/// Converts a palette color into an iced color.
pub fn to_iced(color: quill_core::theme::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
