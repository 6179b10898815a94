//! Built-in theme.

mod fluent;
mod palette;

pub use fluent::{keys, FluentTheme, FLUENT_THEME_NAME};
pub use palette::ColorPalette;
