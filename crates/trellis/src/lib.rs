//! Element tree, item containers and input plumbing for Trellis.
//!
//! This crate builds on [`trellis_style`] and provides:
//!
//! - **Element Tree**: arena-backed parent-child tree with per-element
//!   resources, styles, theme variants and visibility
//! - **Items**: the owner/generator/panel protocol for virtualized item
//!   containers, with recycling
//! - **Input**: routed events that carry their causing event, and recovery
//!   of keyboard modifiers along that chain
//! - **Logging**: tracing targets, performance spans and tree dumps
//!
//! # Resource Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut tree = ElementTree::new();
//! let app = tree.root();
//! tree.styles_mut(app).unwrap().push(FluentTheme::new().into_style());
//!
//! let window = tree.add_child(app, "Window").unwrap();
//! tree.set_requested_theme_variant(window, Some(ThemeVariant::DARK)).unwrap();
//! let button = tree.add_child(window, "Button").unwrap();
//!
//! let accent = tree.find_resource(button, &"SystemAccentColor".into());
//! let accent = accent.and_then(|v| v.downcast_ref::<Color>().copied());
//! assert_eq!(accent, Some(ColorPalette::dark().accent));
//! ```
//!
//! # Modifier Example
//!
//! ```
//! use trellis::input::*;
//!
//! let released = PointerReleasedEvent::new(MouseButton::Left, Point::ZERO, KeyboardModifiers::CTRL);
//! let tap = TappedEvent::new(released.position, Some(&released));
//! let click = ClickEvent::new(Some(&tap));
//!
//! assert_eq!(key_modifiers(&click), KeyboardModifiers::CTRL);
//! ```

pub mod element;
pub mod input;
pub mod items;
pub mod logging;

mod error;

pub use element::{ElementId, ElementKind, ElementTree};
pub use error::{ElementError, ElementResult};
pub use logging::{ElementTreeDebug, PerfSpan, TreeFormatOptions, TreeStyle};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::element::{ElementId, ElementKind, ElementTree};
    pub use crate::error::{ElementError, ElementResult};
    pub use crate::input::{key_modifiers, KeyboardModifiers, RoutedEvent};
    pub use crate::items::{
        Container, ContainerPhase, ItemContainerGenerator, ItemsOwner, ItemsPresenter,
        RealizedContainers,
    };
    pub use trellis_style::prelude::*;
}
