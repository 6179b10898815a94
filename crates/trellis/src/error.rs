//! Error types for the element tree.

use crate::element::ElementId;

/// Result type for element tree operations.
pub type ElementResult<T> = std::result::Result<T, ElementError>;

/// Errors that can occur during element tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// The element ID is invalid or the element has been removed.
    #[error("Invalid or removed element {0:?}")]
    InvalidElement(ElementId),

    /// Attempted to make an element its own parent or ancestor.
    #[error("Cannot make {child:?} a descendant of itself via {parent:?}")]
    CircularParentage { child: ElementId, parent: ElementId },

    /// The application root cannot be removed or re-parented.
    #[error("The application root cannot be removed or re-parented")]
    RootImmutable,
}
