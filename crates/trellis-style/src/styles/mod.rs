//! Style nodes and style collections.

mod collection;
mod style;

pub use collection::Styles;
pub use style::Style;
