//! The tree capabilities resource resolution relies on.

use std::fmt;
use std::hash::Hash;

use crate::resources::{ResourceDictionary, ResourceKey, ResourceValue, ThemeVariant};
use crate::styles::Styles;

/// A node that may own resources: a control, a style host, or the
/// application root.
pub trait ResourceNode {
    /// The node's own dictionary, if it has one.
    fn resources(&self) -> Option<&ResourceDictionary>;

    /// The node's style collection, if it has one.
    fn styles(&self) -> Option<&Styles> {
        None
    }

    /// Returns `true` if the node's dictionary or styles hold any resources.
    fn has_resources(&self) -> bool {
        self.resources().is_some_and(ResourceDictionary::has_resources)
            || self.styles().is_some_and(Styles::has_resources)
    }

    /// Look a key up on this node alone: own dictionary, then styles.
    fn try_get_resource(&self, key: &ResourceKey, variant: &ThemeVariant) -> Option<ResourceValue> {
        if let Some(value) = self
            .resources()
            .and_then(|dict| dict.try_get_resource(key, variant))
        {
            return Some(value);
        }
        self.styles()
            .and_then(|styles| styles.try_get_resource(key, variant))
    }
}

/// A tree of [`ResourceNode`]s addressed by id.
///
/// The resolver only reads parent links. The tree must be acyclic; a cycle
/// makes resolution loop forever.
pub trait ResourceTree {
    /// Node identifier.
    type NodeId: Copy + Eq + Hash + fmt::Debug;

    /// The node for `id`, if it exists.
    fn node(&self, id: Self::NodeId) -> Option<&dyn ResourceNode>;

    /// The parent of `id`, if any.
    fn parent(&self, id: Self::NodeId) -> Option<Self::NodeId>;

    /// The theme variant in effect at `id`.
    fn theme_variant(&self, _id: Self::NodeId) -> ThemeVariant {
        ThemeVariant::DEFAULT
    }

    /// A counter that changes whenever any dictionary, style collection or
    /// parent link in the tree changes.
    ///
    /// Trees that cannot report this return `None`, and resolution through
    /// them is never cached.
    fn generation(&self) -> Option<u64> {
        None
    }
}
