//! Color palette definitions.

use crate::types::Color;

/// The colors a theme variant publishes as resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Accent colors
    /// Main accent color.
    pub accent: Color,
    /// Lighter variant of the accent color.
    pub accent_light: Color,
    /// Darker variant of the accent color.
    pub accent_dark: Color,
    /// Text/icon color for content on the accent color.
    pub on_accent: Color,

    // Background colors
    /// Main background color.
    pub background: Color,
    /// Card/surface background color.
    pub surface: Color,

    // Text colors
    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Disabled text color.
    pub text_disabled: Color,

    // Strokes
    /// Control border color.
    pub border: Color,
    /// Divider/separator color.
    pub divider: Color,

    /// Error/critical color.
    pub critical: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            accent: Color::from_rgb8(0x00, 0x78, 0xD4),
            accent_light: Color::from_rgb8(0x42, 0x9C, 0xE3),
            accent_dark: Color::from_rgb8(0x00, 0x5A, 0x9E),
            on_accent: Color::WHITE,

            background: Color::from_rgb8(0xF3, 0xF3, 0xF3),
            surface: Color::WHITE,

            text_primary: Color::from_rgb8(0x1A, 0x1A, 0x1A),
            text_secondary: Color::from_rgb8(0x5D, 0x5D, 0x5D),
            text_disabled: Color::from_rgb8(0xA0, 0xA0, 0xA0),

            border: Color::from_rgb8(0xE5, 0xE5, 0xE5),
            divider: Color::from_rgb8(0xD1, 0xD1, 0xD1),

            critical: Color::from_rgb8(0xC4, 0x2B, 0x1C),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            // Accent is lighter on dark backgrounds.
            accent: Color::from_rgb8(0x60, 0xCD, 0xFF),
            accent_light: Color::from_rgb8(0x99, 0xEB, 0xFF),
            accent_dark: Color::from_rgb8(0x00, 0x78, 0xD4),
            on_accent: Color::BLACK,

            background: Color::from_rgb8(0x20, 0x20, 0x20),
            surface: Color::from_rgb8(0x2B, 0x2B, 0x2B),

            text_primary: Color::WHITE,
            text_secondary: Color::from_rgb8(0xC5, 0xC5, 0xC5),
            text_disabled: Color::from_rgb8(0x78, 0x78, 0x78),

            border: Color::from_rgb8(0x3A, 0x3A, 0x3A),
            divider: Color::from_rgb8(0x45, 0x45, 0x45),

            critical: Color::from_rgb8(0xFF, 0x99, 0xA4),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
