//! Input events and keyboard modifier recovery.

mod events;
mod modifiers;

pub use events::{
    event_chain, key_modifiers, ClickEvent, EventBase, EventChain, Key, KeyDownEvent, MouseButton,
    Point, PointerPressedEvent, PointerReleasedEvent, RoutedEvent, TappedEvent,
};
pub use modifiers::KeyboardModifiers;
