//! Error types for the resource system.
//!
//! A missing resource is not an error: lookups return `Option` and callers
//! branch on presence. The errors here cover malformed input and typed access
//! to a value that holds something else.

use crate::resources::ResourceKey;

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the resource system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },

    /// A resource was present but held a value of another type.
    #[error("Resource {key} is not of type {expected}")]
    TypeMismatch {
        key: ResourceKey,
        expected: &'static str,
    },
}

impl Error {
    /// Create a color parse error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch<T: 'static>(key: &ResourceKey) -> Self {
        Self::TypeMismatch {
            key: key.clone(),
            expected: std::any::type_name::<T>(),
        }
    }
}
