//! Resource system for Trellis.
//!
//! This crate provides theme-scoped, named resources and the machinery that
//! resolves them by tree position:
//!
//! - **Resources**: keys, values (including explicit null and deferred
//!   values), dictionaries with merged and per-variant theme dictionaries
//! - **Styles**: composable style nodes and ordered style collections where
//!   later entries override earlier ones
//! - **Resolution**: a walk from a node outward through its ancestors,
//!   nearest definition wins, with an optional cache
//! - **Theme**: a built-in Fluent-style theme with light and dark palettes
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let mut styles = Styles::new();
//! styles.push(Style::new().with_resources(
//!     ResourceDictionary::new().with("Accent", ResourceValue::new("pre")),
//! ));
//! styles.push(FluentTheme::new().into_style());
//! styles.push(Style::new().with_resources(
//!     ResourceDictionary::new().with("Accent", ResourceValue::new("post")),
//! ));
//!
//! let accent = styles.try_get_resource(&"Accent".into(), &ThemeVariant::LIGHT);
//! assert_eq!(accent.and_then(|v| v.downcast_ref::<&str>().copied()), Some("post"));
//! ```

pub mod resolve;
pub mod resources;
pub mod styles;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::{
        find_resource, find_resource_default, ResolverConfig, ResourceNode, ResourceResolver,
        ResourceTree,
    };
    pub use crate::resources::{
        DeferredValue, ResourceDictionary, ResourceEntry, ResourceKey, ResourceValue, ThemeVariant,
    };
    pub use crate::styles::{Style, Styles};
    pub use crate::theme::{ColorPalette, FluentTheme};
    pub use crate::types::Color;
}
