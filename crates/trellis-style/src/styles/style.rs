//! Style nodes.

use std::borrow::Cow;

use crate::resources::{ResourceDictionary, ResourceKey, ResourceValue, ThemeVariant};

/// A composable unit of styling that owns an optional resource dictionary.
///
/// Styles nest: a theme is a `Style` whose children are the styles it
/// contributes. Within one style, own resources are consulted first, then
/// children from last to first, so a child appended later shadows an earlier
/// sibling.
///
/// # Example
///
/// ```
/// use trellis_style::resources::{ResourceDictionary, ResourceValue, ThemeVariant};
/// use trellis_style::styles::Style;
///
/// let theme = Style::named("Compact")
///     .with_child(Style::new().with_resources(
///         ResourceDictionary::new().with("Padding", ResourceValue::new(8.0_f64)),
///     ))
///     .with_child(Style::new().with_resources(
///         ResourceDictionary::new().with("Padding", ResourceValue::new(4.0_f64)),
///     ));
///
/// let padding = theme.try_get_resource(&"Padding".into(), &ThemeVariant::DEFAULT);
/// assert_eq!(padding.and_then(|v| v.downcast_ref::<f64>().copied()), Some(4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    name: Option<Cow<'static, str>>,
    resources: Option<ResourceDictionary>,
    children: Vec<Style>,
}

impl Style {
    /// Create an anonymous, empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty style with a diagnostic name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The style's diagnostic name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The style's own dictionary, if it has one.
    pub fn resources(&self) -> Option<&ResourceDictionary> {
        self.resources.as_ref()
    }

    /// The style's own dictionary, created if missing.
    pub fn resources_mut(&mut self) -> &mut ResourceDictionary {
        self.resources.get_or_insert_with(ResourceDictionary::new)
    }

    /// Replace the style's own dictionary.
    pub fn set_resources(&mut self, resources: Option<ResourceDictionary>) {
        self.resources = resources;
    }

    /// Builder-style [`set_resources`](Self::set_resources).
    pub fn with_resources(mut self, resources: ResourceDictionary) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Nested styles, in registration order.
    pub fn children(&self) -> &[Style] {
        &self.children
    }

    /// Mutable access to nested styles.
    pub fn children_mut(&mut self) -> &mut Vec<Style> {
        &mut self.children
    }

    /// Append a nested style.
    pub fn add_child(&mut self, style: Style) {
        self.children.push(style);
    }

    /// Builder-style [`add_child`](Self::add_child).
    pub fn with_child(mut self, style: Style) -> Self {
        self.children.push(style);
        self
    }

    /// Returns `true` if this style or any nested style holds resources.
    pub fn has_resources(&self) -> bool {
        self.resources
            .as_ref()
            .is_some_and(ResourceDictionary::has_resources)
            || self.children.iter().any(Self::has_resources)
    }

    /// Look a key up in this style: own dictionary, then children, last first.
    pub fn try_get_resource(
        &self,
        key: &ResourceKey,
        variant: &ThemeVariant,
    ) -> Option<ResourceValue> {
        if let Some(value) = self
            .resources
            .as_ref()
            .and_then(|dict| dict.try_get_resource(key, variant))
        {
            return Some(value);
        }

        self.children
            .iter()
            .rev()
            .find_map(|child| child.try_get_resource(key, variant))
    }
}
