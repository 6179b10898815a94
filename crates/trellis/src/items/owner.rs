//! The items-control side of container generation.

use std::fmt;

/// A control that displays a collection of items through containers.
///
/// The owner decides what a container is and how an item is bound to one.
/// An [`ItemContainerGenerator`](super::ItemContainerGenerator) forwards to
/// these hooks; a panel drives the generator.
pub trait ItemsOwner {
    /// An entry of the displayed collection.
    type Item;

    /// A container handle. Usually an element id.
    type Element: Clone + PartialEq + fmt::Debug;

    /// The element an item *is*, when the collection holds elements
    /// directly rather than plain data.
    fn item_as_element(&self, _item: &Self::Item) -> Option<Self::Element> {
        None
    }

    /// Whether an element item should be displayed as-is instead of being
    /// wrapped in a new container.
    fn is_item_its_own_container(&self, _element: &Self::Element) -> bool {
        false
    }

    /// Create a new, unbound container.
    fn create_container_for_item(&mut self, item: &Self::Item, index: usize) -> Self::Element;

    /// Bind `item` to `container`: content, templates, item-dependent state.
    fn prepare_item_container(&mut self, container: &Self::Element, item: &Self::Item, index: usize);

    /// Called once `container` is prepared and present in the panel.
    fn item_container_prepared(&mut self, _container: &Self::Element, _item: &Self::Item, _index: usize) {}

    /// The realized `container` moved from `old_index` to `new_index`.
    fn item_container_index_changed(
        &mut self,
        _container: &Self::Element,
        _old_index: usize,
        _new_index: usize,
    ) {
    }

    /// Undo everything [`prepare_item_container`](Self::prepare_item_container) did.
    fn clear_item_container(&mut self, container: &Self::Element);

    /// The realized container for an index, if the owner tracks one.
    fn container_from_index(&self, _index: usize) -> Option<Self::Element> {
        None
    }

    /// The index a container is realized for, if the owner tracks it.
    fn index_from_container(&self, _container: &Self::Element) -> Option<usize> {
        None
    }

    /// Show or hide a container without removing it from the tree.
    fn set_container_visible(&mut self, _container: &Self::Element, _visible: bool) {}
}
