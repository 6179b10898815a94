//! Resource keys.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

/// Identifies a resource within a [`ResourceDictionary`](super::ResourceDictionary).
///
/// Keys are either string names or Rust type identities. Type keys are used
/// for resources looked up by the type they apply to, such as a default
/// container template.
///
/// # Example
///
/// ```
/// use trellis_style::resources::ResourceKey;
///
/// let by_name = ResourceKey::from("SystemAccentColor");
/// let by_type = ResourceKey::of_type::<String>();
///
/// assert_eq!(by_name, ResourceKey::name("SystemAccentColor"));
/// assert_ne!(by_name, by_type);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    /// A string-named resource.
    Name(Cow<'static, str>),
    /// A resource keyed by a Rust type.
    Type {
        /// The type identity used for comparison.
        id: TypeId,
        /// The type name, for diagnostics only.
        name: &'static str,
    },
}

impl ResourceKey {
    /// Create a string-named key.
    pub fn name(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Name(name.into())
    }

    /// Create a key for the type `T`.
    pub fn of_type<T: 'static>() -> Self {
        Self::Type {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The key's name, if it is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Type { .. } => None,
        }
    }
}

impl From<&'static str> for ResourceKey {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Type { name, .. } => write!(f, "<{name}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_and_owned_names_are_equal() {
        assert_eq!(ResourceKey::from("Accent"), ResourceKey::from("Accent".to_string()));
    }

    #[test]
    fn type_keys_compare_by_type() {
        assert_eq!(ResourceKey::of_type::<u32>(), ResourceKey::of_type::<u32>());
        assert_ne!(ResourceKey::of_type::<u32>(), ResourceKey::of_type::<i32>());
        assert_eq!(ResourceKey::of_type::<u32>().as_name(), None);
    }
}
