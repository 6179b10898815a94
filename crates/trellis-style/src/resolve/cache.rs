//! Resolution caching for performance.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::TARGET;
use crate::resources::{ResourceKey, ResourceValue, ThemeVariant};

/// Cache key for a resolved resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceCacheKey<Id> {
    node: Id,
    key: ResourceKey,
    variant: ThemeVariant,
}

impl<Id> ResourceCacheKey<Id> {
    /// Create a new cache key.
    pub fn new(node: Id, key: ResourceKey, variant: ThemeVariant) -> Self {
        Self { node, key, variant }
    }
}

/// Cache of resolution results keyed by (start node, key, variant).
///
/// Both hits and misses are cached: a cached `None` is a valid answer. The
/// whole cache is dropped when the tree generation it was filled against
/// changes.
pub struct ResourceCache<Id> {
    entries: HashMap<ResourceCacheKey<Id>, Option<ResourceValue>>,
    generation: Option<u64>,
    max_size: usize,
    hits: u64,
    misses: u64,
}

impl<Id: Copy + Eq + Hash + fmt::Debug> ResourceCache<Id> {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a cache with a specific capacity.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_size.min(1024)),
            generation: None,
            max_size: max_size.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Align the cache with the tree's current generation.
    ///
    /// Returns `true` if the cache was invalidated.
    pub fn sync_generation(&mut self, generation: u64) -> bool {
        if self.generation == Some(generation) {
            return false;
        }
        let stale = self.generation.is_some() && !self.entries.is_empty();
        if stale {
            tracing::debug!(
                target: TARGET,
                from = ?self.generation,
                to = generation,
                dropped = self.entries.len(),
                "tree changed, invalidating resource cache"
            );
        }
        self.entries.clear();
        self.generation = Some(generation);
        stale
    }

    /// Get a cached result. The outer `Option` is the cache hit; the inner
    /// one is the cached lookup result.
    pub fn get(&mut self, key: &ResourceCacheKey<Id>) -> Option<&Option<ResourceValue>> {
        let entry = self.entries.get(key);
        if entry.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        entry
    }

    /// Insert a lookup result.
    pub fn insert(&mut self, key: ResourceCacheKey<Id>, value: Option<ResourceValue>) {
        // Simple eviction: clear half when full
        if self.entries.len() >= self.max_size {
            self.evict_half();
        }
        self.entries.insert(key, value);
    }

    /// Drop every entry for lookups that started at `node`.
    pub fn invalidate(&mut self, node: Id) {
        self.entries.retain(|k, _| k.node != node);
    }

    /// Drop every entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.generation = None;
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to walk the tree.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    fn evict_half(&mut self) {
        let target = self.entries.len() / 2;
        let keys: Vec<_> = self.entries.keys().take(target).cloned().collect();
        for key in keys {
            self.entries.remove(&key);
        }
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> Default for ResourceCache<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: fmt::Debug> fmt::Debug for ResourceCache<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("len", &self.entries.len())
            .field("generation", &self.generation)
            .field("max_size", &self.max_size)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
