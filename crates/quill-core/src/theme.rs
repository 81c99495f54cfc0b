//! Theme palettes.
//!
//! Five fixed palettes, each a tuple of six colors covering the three themed
//! surfaces: the text area, the menu bar, and the status bar. Applying a
//! theme repaints all three surfaces at once; nothing is persisted between
//! sessions.

use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Background/foreground pair for one themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub background: Color,
    pub foreground: Color,
}

impl Surface {
    const fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// The six colors of one theme, applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Text area
    pub editor: Surface,
    /// Menu bar
    pub menu: Surface,
    /// Status bar
    pub status_bar: Surface,
}

const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
const LIGHT_GREY: Color = Color::rgb(0.83, 0.83, 0.83);

const LIGHT: Palette = Palette {
    editor: Surface::new(WHITE, BLACK),
    menu: Surface::new(LIGHT_GREY, BLACK),
    status_bar: Surface::new(LIGHT_GREY, BLACK),
};

const DARK: Palette = Palette {
    editor: Surface::new(Color::rgb(0.18, 0.18, 0.18), WHITE),
    menu: Surface::new(Color::rgb(0.11, 0.11, 0.11), WHITE),
    status_bar: Surface::new(Color::rgb(0.24, 0.24, 0.24), WHITE),
};

const BLUE: Palette = Palette {
    editor: Surface::new(Color::rgb(0.68, 0.85, 0.90), Color::rgb(0.0, 0.0, 0.55)),
    menu: Surface::new(Color::rgb(0.0, 0.0, 1.0), WHITE),
    status_bar: Surface::new(Color::rgb(0.68, 0.85, 0.90), Color::rgb(0.0, 0.0, 0.55)),
};

const GREEN: Palette = Palette {
    editor: Surface::new(Color::rgb(0.56, 0.93, 0.56), Color::rgb(0.0, 0.39, 0.0)),
    menu: Surface::new(Color::rgb(0.0, 0.50, 0.0), WHITE),
    status_bar: Surface::new(Color::rgb(0.56, 0.93, 0.56), Color::rgb(0.0, 0.39, 0.0)),
};

const PURPLE: Palette = Palette {
    editor: Surface::new(Color::rgb(0.90, 0.90, 0.98), Color::rgb(0.58, 0.0, 0.83)),
    menu: Surface::new(Color::rgb(0.50, 0.0, 0.50), WHITE),
    status_bar: Surface::new(Color::rgb(0.90, 0.90, 0.98), Color::rgb(0.58, 0.0, 0.83)),
};

/// The available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeKind {
    Light,
    Dark,
    Blue,
    Green,
    Purple,
}

impl ThemeKind {
    /// All themes, in menu order.
    pub const ALL: [ThemeKind; 5] = [
        ThemeKind::Light,
        ThemeKind::Dark,
        ThemeKind::Blue,
        ThemeKind::Green,
        ThemeKind::Purple,
    ];

    /// Returns the theme's menu label.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
            ThemeKind::Blue => "Blue",
            ThemeKind::Green => "Green",
            ThemeKind::Purple => "Purple",
        }
    }

    /// Returns the fixed palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            ThemeKind::Light => LIGHT,
            ThemeKind::Dark => DARK,
            ThemeKind::Blue => BLUE,
            ThemeKind::Green => GREEN,
            ThemeKind::Purple => PURPLE,
        }
    }

    /// True for palettes with a dark text-area background.
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeKind::Dark)
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_a_distinct_editor_background() {
        let backgrounds: Vec<Color> = ThemeKind::ALL
            .iter()
            .map(|t| t.palette().editor.background)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_light_palette_colors() {
        let palette = ThemeKind::Light.palette();
        assert_eq!(palette.editor.background, WHITE);
        assert_eq!(palette.editor.foreground, BLACK);
        assert_eq!(palette.menu.background, LIGHT_GREY);
        assert_eq!(palette.status_bar.background, LIGHT_GREY);
    }

    #[test]
    fn test_names_follow_menu_labels() {
        let names: Vec<&str> = ThemeKind::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Light", "Dark", "Blue", "Green", "Purple"]);
    }

    #[test]
    fn test_only_dark_is_dark() {
        assert!(ThemeKind::Dark.is_dark());
        assert!(!ThemeKind::Light.is_dark());
        assert!(!ThemeKind::Blue.is_dark());
    }
}
