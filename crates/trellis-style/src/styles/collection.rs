//! Ordered style collections.

use crate::resources::{ResourceDictionary, ResourceKey, ResourceValue, ThemeVariant};

use super::Style;

/// An ordered collection of [`Style`] nodes attached to an element or to the
/// application.
///
/// Theme loading appends in sequence (a pre-hook style, the theme, a
/// post-hook style), and each later entry must be able to override resources
/// of an earlier one. Lookup therefore runs from the last entry to the first.
/// The collection's own dictionary, if any, is consulted before any entry.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    resources: Option<ResourceDictionary>,
    items: Vec<Style>,
}

impl Styles {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style. It shadows every style already present.
    pub fn push(&mut self, style: Style) {
        self.items.push(style);
    }

    /// Insert a style at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, style: Style) {
        self.items.insert(index, style);
    }

    /// Remove and return the style at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Style> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no styles.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate styles in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.items.iter()
    }

    /// Borrow the style at `index`.
    pub fn get(&self, index: usize) -> Option<&Style> {
        self.items.get(index)
    }

    /// Mutably borrow the style at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Style> {
        self.items.get_mut(index)
    }

    /// The collection's own dictionary.
    pub fn resources(&self) -> Option<&ResourceDictionary> {
        self.resources.as_ref()
    }

    /// The collection's own dictionary, created if missing.
    pub fn resources_mut(&mut self) -> &mut ResourceDictionary {
        self.resources.get_or_insert_with(ResourceDictionary::new)
    }

    /// Returns `true` if the collection or any style in it holds resources.
    pub fn has_resources(&self) -> bool {
        self.resources
            .as_ref()
            .is_some_and(ResourceDictionary::has_resources)
            || self.items.iter().any(Style::has_resources)
    }

    /// Look a key up: own dictionary, then styles from last to first.
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

        self.items
            .iter()
            .rev()
            .find_map(|style| style.try_get_resource(key, variant))
    }
}

impl Extend<Style> for Styles {
    fn extend<I: IntoIterator<Item = Style>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Style> for Styles {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self {
            resources: None,
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Styles {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
