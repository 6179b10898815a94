//! Resource keys, values and dictionaries.

mod dictionary;
mod key;
mod value;
mod variant;

pub use dictionary::ResourceDictionary;
pub use key::ResourceKey;
pub use value::{DeferredValue, ResourceEntry, ResourceValue};
pub use variant::ThemeVariant;
