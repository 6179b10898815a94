//! Routed input events and the modifier chain walk.
//!
//! Events synthesized from other events (a tap from a pointer release, a
//! click from a tap or a key press) keep a borrowed reference to the event
//! that caused them. [`key_modifiers`] follows those references to recover
//! the modifier keys held during the original physical input.

use std::fmt;
use std::iter::FusedIterator;

use super::KeyboardModifiers;
use crate::logging::targets;

/// A point in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Button4 = 3,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 4,
}

/// Keys reported by [`KeyDownEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Character(char),
    /// The Enter or Return key.
    Enter,
    /// The Escape key.
    Escape,
    /// The Tab key.
    Tab,
    /// The space bar.
    Space,
    /// The Backspace key.
    Backspace,
    /// The forward Delete key.
    Delete,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// Function key `F1` to `F24`.
    Function(u8),
    /// Either Shift key.
    Shift,
    /// Either Control key.
    Control,
    /// Either Alt key.
    Alt,
    /// Either Meta (Windows or Command) key.
    Meta,
}

/// Common data for all routed events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// An event routed through the element tree.
pub trait RoutedEvent: fmt::Debug {
    /// The event's name, for logging.
    fn name(&self) -> &'static str;

    /// Base event data.
    fn base(&self) -> &EventBase;

    /// The event that caused this one, if it was synthesized.
    ///
    /// The reference is borrowed: the inner event is independent data that
    /// outlives this event, not a part of it.
    fn inner(&self) -> Option<&dyn RoutedEvent> {
        None
    }

    /// The modifier keys this event recorded, if it records any.
    fn key_modifiers(&self) -> Option<KeyboardModifiers> {
        None
    }

    /// Whether a handler has accepted the event.
    fn is_handled(&self) -> bool {
        self.base().is_accepted()
    }
}

/// Iterator over an event and its inner events, outermost first.
pub struct EventChain<'e> {
    next: Option<&'e dyn RoutedEvent>,
}

impl<'e> Iterator for EventChain<'e> {
    type Item = &'e dyn RoutedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for EventChain<'_> {}

/// Iterate `event`, its inner event, that event's inner event, and so on.
pub fn event_chain(event: &dyn RoutedEvent) -> EventChain<'_> {
    EventChain { next: Some(event) }
}

/// The modifier keys in effect for `event`.
///
/// Returns the modifiers of the first event along the chain that records
/// any, or [`KeyboardModifiers::NONE`] if none does.
pub fn key_modifiers(event: &dyn RoutedEvent) -> KeyboardModifiers {
    for (depth, current) in event_chain(event).enumerate() {
        if let Some(modifiers) = current.key_modifiers() {
            tracing::trace!(
                target: targets::INPUT,
                event = event.name(),
                source = current.name(),
                depth,
                %modifiers,
                "modifiers recovered"
            );
            return modifiers;
        }
    }
    KeyboardModifiers::NONE
}

/// A key was pressed.
#[derive(Debug, Clone)]
pub struct KeyDownEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyDownEvent {
    /// Create a new key down event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// Mark this as a repeat of a held key.
    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}

impl RoutedEvent for KeyDownEvent {
    fn name(&self) -> &'static str {
        "KeyDown"
    }

    fn base(&self) -> &EventBase {
        &self.base
    }

    fn key_modifiers(&self) -> Option<KeyboardModifiers> {
        Some(self.modifiers)
    }
}

/// A pointer button was pressed.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressedEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in element-local coordinates.
    pub position: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Number of presses in quick succession, starting at 1.
    pub click_count: u32,
}

impl PointerPressedEvent {
    /// Create a new pointer pressed event.
    pub fn new(button: MouseButton, position: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            position,
            modifiers,
            click_count: 1,
        }
    }
}

impl RoutedEvent for PointerPressedEvent {
    fn name(&self) -> &'static str {
        "PointerPressed"
    }

    fn base(&self) -> &EventBase {
        &self.base
    }

    fn key_modifiers(&self) -> Option<KeyboardModifiers> {
        Some(self.modifiers)
    }
}

/// A pointer button was released.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleasedEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in element-local coordinates.
    pub position: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerReleasedEvent {
    /// Create a new pointer released event.
    pub fn new(button: MouseButton, position: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            position,
            modifiers,
        }
    }
}

impl RoutedEvent for PointerReleasedEvent {
    fn name(&self) -> &'static str {
        "PointerReleased"
    }

    fn base(&self) -> &EventBase {
        &self.base
    }

    fn key_modifiers(&self) -> Option<KeyboardModifiers> {
        Some(self.modifiers)
    }
}

/// A tap gesture, usually synthesized from a pointer release.
#[derive(Debug, Clone, Copy)]
pub struct TappedEvent<'a> {
    /// Base event data.
    pub base: EventBase,
    /// Position in element-local coordinates.
    pub position: Point,
    inner: Option<&'a dyn RoutedEvent>,
}

impl<'a> TappedEvent<'a> {
    /// Create a tap caused by `inner`.
    pub fn new(position: Point, inner: Option<&'a dyn RoutedEvent>) -> Self {
        Self {
            base: EventBase::new(),
            position,
            inner,
        }
    }
}

impl RoutedEvent for TappedEvent<'_> {
    fn name(&self) -> &'static str {
        "Tapped"
    }

    fn base(&self) -> &EventBase {
        &self.base
    }

    fn inner(&self) -> Option<&dyn RoutedEvent> {
        self.inner
    }
}

/// A button click, synthesized from a tap, a key press or an automation
/// request.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent<'a> {
    /// Base event data.
    pub base: EventBase,
    inner: Option<&'a dyn RoutedEvent>,
}

impl<'a> ClickEvent<'a> {
    /// Create a click caused by `inner`.
    pub fn new(inner: Option<&'a dyn RoutedEvent>) -> Self {
        Self {
            base: EventBase::new(),
            inner,
        }
    }
}

impl RoutedEvent for ClickEvent<'_> {
    fn name(&self) -> &'static str {
        "Click"
    }

    fn base(&self) -> &EventBase {
        &self.base
    }

    fn inner(&self) -> Option<&dyn RoutedEvent> {
        self.inner
    }
}
