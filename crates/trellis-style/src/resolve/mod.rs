//! Tree-scoped resource resolution.

mod cache;
mod resolver;
mod tree;
mod walker;

/// `tracing` target for lookups and cache maintenance.
pub const TARGET: &str = "trellis_style::resolve";

pub use cache::{ResourceCache, ResourceCacheKey};
pub use resolver::{ResolverConfig, ResourceResolver};
pub use tree::{ResourceNode, ResourceTree};
pub use walker::{ancestors, find_resource, find_resource_default, Ancestors};
