//! Built-in Fluent-style theme.

use crate::resources::{ResourceDictionary, ResourceValue, ThemeVariant};
use crate::styles::Style;

use super::ColorPalette;

/// Resource keys published by [`FluentTheme`].
pub mod keys {
    pub const ACCENT_COLOR: &str = "SystemAccentColor";
    pub const ACCENT_COLOR_LIGHT: &str = "SystemAccentColorLight1";
    pub const ACCENT_COLOR_DARK: &str = "SystemAccentColorDark1";
    pub const TEXT_ON_ACCENT: &str = "TextOnAccentFillColorPrimary";
    pub const BACKGROUND: &str = "SolidBackgroundFillColorBase";
    pub const SURFACE: &str = "CardBackgroundFillColorDefault";
    pub const TEXT_PRIMARY: &str = "TextFillColorPrimary";
    pub const TEXT_SECONDARY: &str = "TextFillColorSecondary";
    pub const TEXT_DISABLED: &str = "TextFillColorDisabled";
    pub const BORDER: &str = "ControlStrokeColorDefault";
    pub const DIVIDER: &str = "DividerStrokeColorDefault";
    pub const CRITICAL: &str = "SystemFillColorCritical";

    /// Variant-independent corner radius, an `f64` in pixels.
    pub const CORNER_RADIUS: &str = "ControlCornerRadius";
    /// Variant-independent font size, an `f64` in pixels.
    pub const FONT_SIZE: &str = "ContentControlThemeFontSize";
}

/// The name given to the style produced by [`FluentTheme::into_style`].
pub const FLUENT_THEME_NAME: &str = "FluentTheme";

/// Builder for the built-in theme.
///
/// The theme is a [`Style`] whose dictionary holds light and dark theme
/// dictionaries filled from a [`ColorPalette`], plus a few
/// variant-independent resources.
///
/// # Example
///
/// ```
/// use trellis_style::resources::ThemeVariant;
/// use trellis_style::theme::{keys, FluentTheme};
/// use trellis_style::types::Color;
///
/// let theme = FluentTheme::new().into_style();
/// let accent = theme
///     .try_get_resource(&keys::ACCENT_COLOR.into(), &ThemeVariant::DARK)
///     .and_then(|v| v.downcast_ref::<Color>().copied());
/// assert_eq!(accent.map(|c| c.to_string()), Some("#60CDFF".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct FluentTheme {
    light: ColorPalette,
    dark: ColorPalette,
    corner_radius: f64,
    font_size: f64,
}

impl FluentTheme {
    /// Create the theme with default palettes.
    pub fn new() -> Self {
        Self {
            light: ColorPalette::light(),
            dark: ColorPalette::dark(),
            corner_radius: 4.0,
            font_size: 14.0,
        }
    }

    /// Replace the palette used for the light variant.
    pub fn with_light_palette(mut self, palette: ColorPalette) -> Self {
        self.light = palette;
        self
    }

    /// Replace the palette used for the dark variant.
    pub fn with_dark_palette(mut self, palette: ColorPalette) -> Self {
        self.dark = palette;
        self
    }

    /// Set the control corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the content font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Build the theme's resource dictionary.
    pub fn build_resources(&self) -> ResourceDictionary {
        let mut resources = ResourceDictionary::new()
            .with(keys::CORNER_RADIUS, ResourceValue::new(self.corner_radius))
            .with(keys::FONT_SIZE, ResourceValue::new(self.font_size));

        fill_palette(resources.theme_dictionary_mut(ThemeVariant::LIGHT), &self.light);
        fill_palette(resources.theme_dictionary_mut(ThemeVariant::DARK), &self.dark);

        resources
    }

    /// Build the theme as a style node.
    pub fn into_style(self) -> Style {
        Style::named(FLUENT_THEME_NAME).with_resources(self.build_resources())
    }
}

impl Default for FluentTheme {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_palette(dict: &mut ResourceDictionary, palette: &ColorPalette) {
    let colors = [
        (keys::ACCENT_COLOR, palette.accent),
        (keys::ACCENT_COLOR_LIGHT, palette.accent_light),
        (keys::ACCENT_COLOR_DARK, palette.accent_dark),
        (keys::TEXT_ON_ACCENT, palette.on_accent),
        (keys::BACKGROUND, palette.background),
        (keys::SURFACE, palette.surface),
        (keys::TEXT_PRIMARY, palette.text_primary),
        (keys::TEXT_SECONDARY, palette.text_secondary),
        (keys::TEXT_DISABLED, palette.text_disabled),
        (keys::BORDER, palette.border),
        (keys::DIVIDER, palette.divider),
        (keys::CRITICAL, palette.critical),
    ];
    for (key, color) in colors {
        dict.insert(key, ResourceValue::new(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn color(style: &Style, key: &'static str, variant: &ThemeVariant) -> Option<Color> {
        style
            .try_get_resource(&key.into(), variant)
            .and_then(|v| v.downcast_ref::<Color>().copied())
    }

    #[test]
    fn variants_publish_their_palette() {
        let theme = FluentTheme::new().into_style();
        assert_eq!(theme.name(), Some(FLUENT_THEME_NAME));

        assert_eq!(
            color(&theme, keys::TEXT_PRIMARY, &ThemeVariant::LIGHT),
            Some(ColorPalette::light().text_primary)
        );
        assert_eq!(
            color(&theme, keys::TEXT_PRIMARY, &ThemeVariant::DARK),
            Some(Color::WHITE)
        );
        // Without a default dictionary, the Default variant sees no colors.
        assert_eq!(color(&theme, keys::TEXT_PRIMARY, &ThemeVariant::DEFAULT), None);
    }

    #[test]
    fn shared_resources_ignore_variant() {
        let theme = FluentTheme::new().with_corner_radius(8.0).into_style();
        for variant in [ThemeVariant::LIGHT, ThemeVariant::DARK, ThemeVariant::DEFAULT] {
            let radius = theme
                .try_get_resource(&keys::CORNER_RADIUS.into(), &variant)
                .and_then(|v| v.downcast_ref::<f64>().copied());
            assert_eq!(radius, Some(8.0));
        }
    }

    #[test]
    fn custom_palette_is_used() {
        let mut palette = ColorPalette::light();
        palette.accent = Color::from_rgb8(0xFF, 0x00, 0x00);
        let theme = FluentTheme::new().with_light_palette(palette).into_style();

        assert_eq!(
            color(&theme, keys::ACCENT_COLOR, &ThemeVariant::LIGHT),
            Some(Color::from_rgb8(0xFF, 0x00, 0x00))
        );
    }
}
