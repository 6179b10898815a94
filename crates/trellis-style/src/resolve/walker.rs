//! The resource resolution walk.

use std::iter::FusedIterator;

use super::{ResourceTree, TARGET};
use crate::resources::{ResourceKey, ResourceValue, ThemeVariant};

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'t, T: ResourceTree + ?Sized> {
    tree: &'t T,
    next: Option<T::NodeId>,
}

impl<T: ResourceTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = T::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

impl<T: ResourceTree + ?Sized> FusedIterator for Ancestors<'_, T> {}

/// Iterate `start`, its parent, its grandparent, and so on.
pub fn ancestors<T: ResourceTree + ?Sized>(tree: &T, start: T::NodeId) -> Ancestors<'_, T> {
    Ancestors {
        tree,
        next: Some(start),
    }
}

/// Find the resource for `key` as seen from `start`.
///
/// Each node from `start` outward is asked via
/// [`ResourceNode::try_get_resource`](super::ResourceNode::try_get_resource);
/// the first hit wins, including a hit on a null value. The walk stops at the
/// first node without a parent, so a detached node never sees the
/// application root. `None` means no node on the chain defines the key.
///
/// Cost is proportional to the number of ancestors visited.
pub fn find_resource<T: ResourceTree + ?Sized>(
    tree: &T,
    start: T::NodeId,
    key: &ResourceKey,
    variant: &ThemeVariant,
) -> Option<ResourceValue> {
    let mut depth = 0;

    for id in ancestors(tree, start) {
        if let Some(value) = tree
            .node(id)
            .and_then(|node| node.try_get_resource(key, variant))
        {
            tracing::trace!(target: TARGET, %key, ?id, depth, "resource found");
            return Some(value);
        }
        depth += 1;
    }

    tracing::trace!(target: TARGET, %key, ?start, depth, "resource not found");
    None
}

/// [`find_resource`] using the theme variant in effect at `start`.
pub fn find_resource_default<T: ResourceTree + ?Sized>(
    tree: &T,
    start: T::NodeId,
    key: &ResourceKey,
) -> Option<ResourceValue> {
    find_resource(tree, start, key, &tree.theme_variant(start))
}
