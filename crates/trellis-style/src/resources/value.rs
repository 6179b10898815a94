//! Resource values and dictionary entries.

use std::any::Any;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use super::ResourceKey;
use crate::{Error, Result};

/// A resolved resource value.
///
/// A value is either an arbitrary payload or the explicit null value. Null is
/// a real, present value: themes store null placeholders on purpose so that
/// later code can test for the key's presence. Lookups therefore return
/// `Option<ResourceValue>`, where `None` means "not found" and
/// `Some(ResourceValue::NULL)` means "found, and the value is null".
///
/// Cloning is cheap; the payload is shared.
///
/// # Example
///
/// ```
/// use trellis_style::resources::ResourceValue;
///
/// let size = ResourceValue::new(14.0_f32);
/// assert_eq!(size.downcast_ref::<f32>(), Some(&14.0));
///
/// let placeholder = ResourceValue::NULL;
/// assert!(placeholder.is_null());
/// assert_eq!(placeholder.downcast_ref::<f32>(), None);
/// ```
#[derive(Clone)]
pub struct ResourceValue(Option<Rc<dyn Any>>);

impl ResourceValue {
    /// The null value.
    pub const NULL: Self = Self(None);

    /// Wrap a payload.
    pub fn new<T: Any>(value: T) -> Self {
        Self(Some(Rc::new(value)))
    }

    /// Returns `true` for the null value.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrow the payload as `T`. Null and mismatched types yield `None`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref()?.downcast_ref::<T>()
    }

    /// Borrow the payload as `T`, reporting a type mismatch as an error.
    ///
    /// Returns `Ok(None)` for the null value and `Err` when the payload is
    /// present but of another type. `key` is only used for the error message.
    pub fn typed<T: Any>(&self, key: &ResourceKey) -> Result<Option<&T>> {
        match self.0.as_deref() {
            None => Ok(None),
            Some(payload) => payload
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| Error::type_mismatch::<T>(key)),
        }
    }

    /// Returns `true` if both values share the same payload, or both are null.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("ResourceValue(null)"),
            Some(_) => f.write_str("ResourceValue(..)"),
        }
    }
}

/// A value stored in a dictionary: either already available, or produced on
/// first access.
#[derive(Clone)]
pub enum ResourceEntry {
    /// A value available up front.
    Immediate(ResourceValue),
    /// A value produced by a factory the first time it is read.
    Deferred(DeferredValue),
}

impl ResourceEntry {
    /// Resolve the entry, running a deferred factory if needed.
    pub fn value(&self) -> ResourceValue {
        match self {
            Self::Immediate(value) => value.clone(),
            Self::Deferred(deferred) => deferred.get(),
        }
    }

    /// Returns `true` if the entry is deferred and has not been read yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Deferred(deferred) if !deferred.is_resolved())
    }
}

impl From<ResourceValue> for ResourceEntry {
    fn from(value: ResourceValue) -> Self {
        Self::Immediate(value)
    }
}

impl fmt::Debug for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => f.debug_tuple("Immediate").field(value).finish(),
            Self::Deferred(deferred) => f.debug_tuple("Deferred").field(deferred).finish(),
        }
    }
}

/// A lazily produced, memoized resource value.
///
/// Clones share the memo, so the factory runs at most once no matter which
/// clone is read first.
#[derive(Clone)]
pub struct DeferredValue {
    inner: Rc<DeferredInner>,
}

struct DeferredInner {
    factory: Box<dyn Fn() -> ResourceValue>,
    value: OnceCell<ResourceValue>,
}

impl DeferredValue {
    /// Create a deferred value from a factory.
    pub fn new(factory: impl Fn() -> ResourceValue + 'static) -> Self {
        Self {
            inner: Rc::new(DeferredInner {
                factory: Box::new(factory),
                value: OnceCell::new(),
            }),
        }
    }

    /// Returns `true` once the factory has run.
    pub fn is_resolved(&self) -> bool {
        self.inner.value.get().is_some()
    }

    /// Read the value, running the factory on first access.
    pub fn get(&self) -> ResourceValue {
        self.inner
            .value
            .get_or_init(|| (self.inner.factory)())
            .clone()
    }
}

impl fmt::Debug for DeferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredValue")
            .field("value", &self.inner.value.get())
            .finish_non_exhaustive()
    }
}
