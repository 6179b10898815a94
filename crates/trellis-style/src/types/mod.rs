//! Value types carried by theme resources.

mod color;

pub use color::Color;
