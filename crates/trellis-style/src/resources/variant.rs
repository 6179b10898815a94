//! Theme variants.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A theme variant such as light or dark.
///
/// Variants select theme dictionaries inside a
/// [`ResourceDictionary`](super::ResourceDictionary). A custom variant can
/// inherit another one; lookup falls back along that chain and finally to
/// [`ThemeVariant::DEFAULT`].
///
/// Equality and hashing use the key alone.
///
/// # Example
///
/// ```
/// use trellis_style::resources::ThemeVariant;
///
/// let dim = ThemeVariant::custom("Dim", Some(ThemeVariant::DARK));
/// assert_eq!(dim.inherit_variant(), Some(&ThemeVariant::DARK));
/// assert_eq!(ThemeVariant::DARK.inherit_variant(), None);
/// ```
#[derive(Clone)]
pub struct ThemeVariant {
    key: Cow<'static, str>,
    inherit: Option<Rc<ThemeVariant>>,
}

impl ThemeVariant {
    /// The variant used when no specific variant applies.
    pub const DEFAULT: Self = Self::builtin("Default");
    /// The light variant.
    pub const LIGHT: Self = Self::builtin("Light");
    /// The dark variant.
    pub const DARK: Self = Self::builtin("Dark");

    const fn builtin(key: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            inherit: None,
        }
    }

    /// Create a custom variant, optionally inheriting another.
    pub fn custom(key: impl Into<Cow<'static, str>>, inherit: Option<ThemeVariant>) -> Self {
        Self {
            key: key.into(),
            inherit: inherit.map(Rc::new),
        }
    }

    /// The variant's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The variant this one falls back to, if any.
    pub fn inherit_variant(&self) -> Option<&ThemeVariant> {
        self.inherit.as_deref()
    }

    /// Iterate this variant and its inherited variants, nearest first.
    pub fn fallback_chain(&self) -> impl Iterator<Item = &ThemeVariant> {
        std::iter::successors(Some(self), |variant| variant.inherit_variant())
    }
}

impl PartialEq for ThemeVariant {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ThemeVariant {}

impl Hash for ThemeVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inherit {
            Some(base) => write!(f, "ThemeVariant({} : {:?})", self.key, base),
            None => write!(f, "ThemeVariant({})", self.key),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
