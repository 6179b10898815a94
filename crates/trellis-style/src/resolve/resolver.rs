//! Cached resource resolution.

use std::fmt;
use std::hash::Hash;

use super::cache::{ResourceCache, ResourceCacheKey};
use super::{find_resource, ResourceTree};
use crate::resources::{ResourceKey, ResourceValue, ThemeVariant};

/// Configuration for a [`ResourceResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Whether lookups are cached at all.
    pub cache_enabled: bool,
    /// Maximum number of cached lookups.
    pub cache_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_capacity: 1024,
        }
    }
}

impl ResolverConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that walks the tree on every lookup.
    pub fn uncached() -> Self {
        Self {
            cache_enabled: false,
            ..Self::default()
        }
    }

    /// Enable or disable caching.
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Set the cache capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

/// Resolves resources through a [`ResourceTree`], caching results while the
/// tree's generation is unchanged.
///
/// Trees that report no generation are always walked.
pub struct ResourceResolver<Id> {
    config: ResolverConfig,
    cache: ResourceCache<Id>,
}

impl<Id: Copy + Eq + Hash + fmt::Debug> ResourceResolver<Id> {
    /// Create a resolver.
    pub fn new(config: ResolverConfig) -> Self {
        let cache = ResourceCache::with_capacity(config.cache_capacity);
        Self { config, cache }
    }

    /// The resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find the resource for `key` as seen from `start`.
    ///
    /// Same result as [`find_resource`]; only the cost differs.
    pub fn find_resource<T>(
        &mut self,
        tree: &T,
        start: Id,
        key: &ResourceKey,
        variant: &ThemeVariant,
    ) -> Option<ResourceValue>
    where
        T: ResourceTree<NodeId = Id> + ?Sized,
    {
        let generation = match tree.generation() {
            Some(generation) if self.config.cache_enabled => generation,
            _ => return find_resource(tree, start, key, variant),
        };
        self.cache.sync_generation(generation);

        let cache_key = ResourceCacheKey::new(start, key.clone(), variant.clone());
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached.clone();
        }

        let value = find_resource(tree, start, key, variant);
        self.cache.insert(cache_key, value.clone());
        value
    }

    /// [`find_resource`](Self::find_resource) using the theme variant in
    /// effect at `start`.
    pub fn find_resource_default<T>(
        &mut self,
        tree: &T,
        start: Id,
        key: &ResourceKey,
    ) -> Option<ResourceValue>
    where
        T: ResourceTree<NodeId = Id> + ?Sized,
    {
        let variant = tree.theme_variant(start);
        self.find_resource(tree, start, key, &variant)
    }

    /// Drop every cached lookup.
    pub fn invalidate_all(&mut self) {
        self.cache.invalidate_all();
    }

    /// The underlying cache.
    pub fn cache(&self) -> &ResourceCache<Id> {
        &self.cache
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> Default for ResourceResolver<Id> {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl<Id: fmt::Debug> fmt::Debug for ResourceResolver<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceResolver")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::resolve::ResourceNode;
    use crate::resources::ResourceDictionary;

    /// Two-node tree (child 1 under root 0) with a settable generation.
    struct Pair {
        root: ResourceDictionary,
        generation: Option<u64>,
        parent_reads: Cell<usize>,
    }

    struct Empty;

    impl ResourceNode for Empty {
        fn resources(&self) -> Option<&ResourceDictionary> {
            None
        }
    }

    impl ResourceNode for ResourceDictionary {
        fn resources(&self) -> Option<&ResourceDictionary> {
            Some(self)
        }
    }

    impl ResourceTree for Pair {
        type NodeId = u8;

        fn node(&self, id: u8) -> Option<&dyn ResourceNode> {
            match id {
                0 => Some(&self.root),
                1 => Some(&Empty),
                _ => None,
            }
        }

        fn parent(&self, id: u8) -> Option<u8> {
            self.parent_reads.set(self.parent_reads.get() + 1);
            (id == 1).then_some(0)
        }

        fn generation(&self) -> Option<u64> {
            self.generation
        }
    }

    fn pair(generation: Option<u64>) -> Pair {
        Pair {
            root: ResourceDictionary::new().with("x", ResourceValue::new(1_i32)),
            generation,
            parent_reads: Cell::new(0),
        }
    }

    #[test]
    fn repeated_lookup_hits_cache() {
        let tree = pair(Some(0));
        let mut resolver = ResourceResolver::default();
        let key = ResourceKey::from("x");

        assert!(resolver.find_resource(&tree, 1, &key, &ThemeVariant::LIGHT).is_some());
        let walks = tree.parent_reads.get();
        assert!(resolver.find_resource(&tree, 1, &key, &ThemeVariant::LIGHT).is_some());

        assert_eq!(tree.parent_reads.get(), walks);
        assert_eq!(resolver.cache().hits(), 1);
    }

    #[test]
    fn generation_bump_forces_new_walk() {
        let mut tree = pair(Some(0));
        let mut resolver = ResourceResolver::default();
        let key = ResourceKey::from("x");

        resolver.find_resource(&tree, 1, &key, &ThemeVariant::LIGHT);
        tree.root.insert("x", ResourceValue::new(2_i32));
        tree.generation = Some(1);

        let value = resolver.find_resource(&tree, 1, &key, &ThemeVariant::LIGHT);
        assert_eq!(value.and_then(|v| v.downcast_ref::<i32>().copied()), Some(2));
    }

    #[test]
    fn untracked_trees_are_not_cached() {
        let tree = pair(None);
        let mut resolver = ResourceResolver::default();

        resolver.find_resource(&tree, 1, &"x".into(), &ThemeVariant::LIGHT);
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn disabled_cache_walks_every_time() {
        let tree = pair(Some(0));
        let mut resolver = ResourceResolver::new(ResolverConfig::uncached());

        resolver.find_resource(&tree, 1, &"x".into(), &ThemeVariant::LIGHT);
        assert!(resolver.cache().is_empty());
        assert!(!resolver.config().cache_enabled);
    }
}
