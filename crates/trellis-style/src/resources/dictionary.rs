//! Resource dictionaries.

use std::collections::HashMap;

use super::{DeferredValue, ResourceEntry, ResourceKey, ResourceValue, ThemeVariant};

/// A mapping from [`ResourceKey`] to resource values.
///
/// Besides its own entries a dictionary can carry:
///
/// - **theme dictionaries**, one per [`ThemeVariant`], holding values that
///   change with the active theme;
/// - **merged dictionaries**, an ordered list of dictionaries pulled in
///   wholesale.
///
/// [`try_get_resource`](Self::try_get_resource) consults own entries first,
/// then the theme dictionary for the requested variant (following its
/// inheritance chain, then [`ThemeVariant::DEFAULT`]), then merged
/// dictionaries from last to first.
///
/// # Example
///
/// ```
/// use trellis_style::resources::{ResourceDictionary, ResourceValue, ThemeVariant};
///
/// let mut dict = ResourceDictionary::new();
/// dict.insert("Spacing", ResourceValue::new(8.0_f64));
/// dict.insert_null("PreHookMarker");
///
/// let spacing = dict.try_get_resource(&"Spacing".into(), &ThemeVariant::LIGHT);
/// assert_eq!(spacing.and_then(|v| v.downcast_ref::<f64>().copied()), Some(8.0));
///
/// // Present with a null value is not the same as absent.
/// assert!(dict.try_get_resource(&"PreHookMarker".into(), &ThemeVariant::LIGHT).is_some());
/// assert!(dict.try_get_resource(&"Missing".into(), &ThemeVariant::LIGHT).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceDictionary {
    entries: HashMap<ResourceKey, ResourceEntry>,
    theme_dictionaries: HashMap<ThemeVariant, ResourceDictionary>,
    merged: Vec<ResourceDictionary>,
}

impl ResourceDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous entry.
    pub fn insert(
        &mut self,
        key: impl Into<ResourceKey>,
        value: ResourceValue,
    ) -> Option<ResourceEntry> {
        self.entries.insert(key.into(), ResourceEntry::Immediate(value))
    }

    /// Insert an explicit null value.
    pub fn insert_null(&mut self, key: impl Into<ResourceKey>) -> Option<ResourceEntry> {
        self.insert(key, ResourceValue::NULL)
    }

    /// Insert a value produced on first read.
    pub fn insert_deferred(
        &mut self,
        key: impl Into<ResourceKey>,
        factory: impl Fn() -> ResourceValue + 'static,
    ) -> Option<ResourceEntry> {
        self.entries
            .insert(key.into(), ResourceEntry::Deferred(DeferredValue::new(factory)))
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<ResourceKey>, value: ResourceValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove an own entry.
    pub fn remove(&mut self, key: &ResourceKey) -> Option<ResourceEntry> {
        self.entries.remove(key)
    }

    /// Returns `true` if an own entry exists for `key`, null entries included.
    pub fn contains_key(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Read an own entry, resolving it if deferred.
    pub fn get(&self, key: &ResourceKey) -> Option<ResourceValue> {
        self.entries.get(key).map(ResourceEntry::value)
    }

    /// Look a key up in own entries, theme dictionaries and merged
    /// dictionaries.
    pub fn try_get_resource(
        &self,
        key: &ResourceKey,
        variant: &ThemeVariant,
    ) -> Option<ResourceValue> {
        if let Some(entry) = self.entries.get(key) {
            return Some(entry.value());
        }

        if !self.theme_dictionaries.is_empty() {
            if let Some(value) = self.try_get_themed(key, variant) {
                return Some(value);
            }
        }

        self.merged
            .iter()
            .rev()
            .find_map(|dict| dict.try_get_resource(key, variant))
    }

    fn try_get_themed(&self, key: &ResourceKey, variant: &ThemeVariant) -> Option<ResourceValue> {
        let mut tried_default = false;
        for candidate in variant.fallback_chain() {
            tried_default |= *candidate == ThemeVariant::DEFAULT;
            if let Some(value) = self
                .theme_dictionaries
                .get(candidate)
                .and_then(|dict| dict.try_get_resource(key, variant))
            {
                return Some(value);
            }
        }

        if tried_default {
            return None;
        }
        self.theme_dictionaries
            .get(&ThemeVariant::DEFAULT)
            .and_then(|dict| dict.try_get_resource(key, variant))
    }

    /// Returns `true` if this dictionary or anything it merges holds entries.
    pub fn has_resources(&self) -> bool {
        !self.entries.is_empty()
            || self.theme_dictionaries.values().any(Self::has_resources)
            || self.merged.iter().any(Self::has_resources)
    }

    /// Number of own entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no own entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate own keys.
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries.keys()
    }

    /// Remove own entries, theme dictionaries and merged dictionaries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.theme_dictionaries.clear();
        self.merged.clear();
    }

    /// Append a merged dictionary. Later merged dictionaries win.
    pub fn add_merged(&mut self, dictionary: ResourceDictionary) {
        self.merged.push(dictionary);
    }

    /// The merged dictionaries, in registration order.
    pub fn merged_dictionaries(&self) -> &[ResourceDictionary] {
        &self.merged
    }

    /// Mutable access to the merged dictionaries.
    pub fn merged_dictionaries_mut(&mut self) -> &mut Vec<ResourceDictionary> {
        &mut self.merged
    }

    /// The theme dictionary registered for `variant`.
    pub fn theme_dictionary(&self, variant: &ThemeVariant) -> Option<&ResourceDictionary> {
        self.theme_dictionaries.get(variant)
    }

    /// The theme dictionary for `variant`, created if missing.
    pub fn theme_dictionary_mut(&mut self, variant: ThemeVariant) -> &mut ResourceDictionary {
        self.theme_dictionaries.entry(variant).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(dict: Option<ResourceValue>) -> Option<i32> {
        dict.and_then(|v| v.downcast_ref::<i32>().copied())
    }

    #[test]
    fn own_entries_shadow_merged() {
        let mut dict = ResourceDictionary::new();
        dict.add_merged(ResourceDictionary::new().with("x", ResourceValue::new(1)));
        dict.insert("x", ResourceValue::new(2));

        assert_eq!(int(dict.try_get_resource(&"x".into(), &ThemeVariant::LIGHT)), Some(2));
    }

    #[test]
    fn last_merged_wins() {
        let mut dict = ResourceDictionary::new();
        dict.add_merged(ResourceDictionary::new().with("x", ResourceValue::new(1)));
        dict.add_merged(ResourceDictionary::new().with("x", ResourceValue::new(2)));

        assert_eq!(int(dict.try_get_resource(&"x".into(), &ThemeVariant::LIGHT)), Some(2));
        assert!(!dict.contains_key(&"x".into()));
        assert!(dict.has_resources());
    }

    #[test]
    fn theme_dictionaries_follow_variant() {
        let mut dict = ResourceDictionary::new();
        dict.theme_dictionary_mut(ThemeVariant::LIGHT)
            .insert("bg", ResourceValue::new(1));
        dict.theme_dictionary_mut(ThemeVariant::DARK)
            .insert("bg", ResourceValue::new(2));
        dict.theme_dictionary_mut(ThemeVariant::DEFAULT)
            .insert("fg", ResourceValue::new(3));

        let key = ResourceKey::from("bg");
        assert_eq!(int(dict.try_get_resource(&key, &ThemeVariant::LIGHT)), Some(1));
        assert_eq!(int(dict.try_get_resource(&key, &ThemeVariant::DARK)), Some(2));
        assert_eq!(int(dict.try_get_resource(&key, &ThemeVariant::DEFAULT)), None);

        let dim = ThemeVariant::custom("Dim", Some(ThemeVariant::DARK));
        assert_eq!(int(dict.try_get_resource(&key, &dim)), Some(2));
        assert_eq!(int(dict.try_get_resource(&"fg".into(), &dim)), Some(3));
    }

    #[test]
    fn null_entry_is_found() {
        let mut dict = ResourceDictionary::new();
        dict.insert_null("marker");

        let found = dict.try_get_resource(&"marker".into(), &ThemeVariant::DEFAULT);
        assert!(found.is_some_and(|v| v.is_null()));
        assert!(dict.contains_key(&"marker".into()));
    }

    #[test]
    fn deferred_entry_resolves_on_read() {
        let mut dict = ResourceDictionary::new();
        dict.insert_deferred("late", || ResourceValue::new(7));

        assert_eq!(int(dict.get(&"late".into())), Some(7));
        assert!(dict.remove(&"late".into()).is_some());
        assert!(dict.is_empty());
    }
}
