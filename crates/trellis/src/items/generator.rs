//! Container generation for items controls.

use super::{Container, ContainerPhase, ItemsOwner};
use crate::logging::targets;

/// Creates and binds containers on behalf of an [`ItemsOwner`].
///
/// The generator holds nothing but a borrow of its owner. Protocol state
/// lives on each [`Container`], which the panel owns; the generator checks it
/// and forwards to the owner.
///
/// # Protocol
///
/// A panel realizing an item:
/// 1. asks [`is_item_its_own_container`](Self::is_item_its_own_container);
/// 2. if not, calls [`create_container`](Self::create_container) (or reuses
///    a cleared container);
/// 3. calls [`prepare_item_container`](Self::prepare_item_container), adds
///    the container to its children, then calls
///    [`item_container_prepared`](Self::item_container_prepared).
///
/// Unrealizing is [`clear_item_container`](Self::clear_item_container)
/// followed by hiding the container if the panel recycles it. An item that
/// is its own container is prepared once and never cleared.
///
/// # Panics
///
/// Every operation panics when called out of protocol order. These are
/// programming errors in the panel.
pub struct ItemContainerGenerator<'a, O: ItemsOwner> {
    owner: &'a mut O,
}

impl<'a, O: ItemsOwner> ItemContainerGenerator<'a, O> {
    /// Create a generator for `owner`.
    pub fn new(owner: &'a mut O) -> Self {
        Self { owner }
    }

    /// The owner.
    pub fn owner(&self) -> &O {
        &*self.owner
    }

    /// The owner, mutably.
    pub fn owner_mut(&mut self) -> &mut O {
        &mut *self.owner
    }

    /// Whether `item` is displayed as its own container.
    ///
    /// Always `false` for items that are not elements.
    pub fn is_item_its_own_container(&self, item: &O::Item) -> bool {
        self.owner
            .item_as_element(item)
            .is_some_and(|element| self.owner.is_item_its_own_container(&element))
    }

    /// Wrap an item that is its own container, or `None` if it is not.
    ///
    /// The returned container still has to be prepared.
    pub fn own_container(&self, item: &O::Item) -> Option<Container<O::Element>> {
        self.owner
            .item_as_element(item)
            .filter(|element| self.owner.is_item_its_own_container(element))
            .map(Container::own)
    }

    /// Create a new container for `item`.
    ///
    /// # Panics
    ///
    /// If the item is its own container.
    pub fn create_container(&mut self, item: &O::Item, index: usize) -> Container<O::Element> {
        assert!(
            !self.is_item_its_own_container(item),
            "create_container called for item {index}, which is its own container"
        );
        let element = self.owner.create_container_for_item(item, index);
        tracing::trace!(target: targets::ITEMS, ?element, index, "container created");
        Container::created(element)
    }

    /// Bind `item` to `container`.
    ///
    /// # Panics
    ///
    /// If the container is not freshly created or cleared, or if it is an
    /// item's own container that was already prepared once.
    pub fn prepare_item_container(
        &mut self,
        container: &mut Container<O::Element>,
        item: &O::Item,
        index: usize,
    ) {
        assert!(
            !(container.is_own_container() && container.was_prepared()),
            "item {index} is its own container and was already prepared; own containers are prepared once"
        );
        assert!(
            matches!(
                container.phase(),
                ContainerPhase::Created | ContainerPhase::Cleared
            ),
            "prepare_item_container on {:?} in phase {:?}; clear it first",
            container.element(),
            container.phase()
        );

        self.owner
            .prepare_item_container(container.element(), item, index);
        container.set_phase(ContainerPhase::Prepared);
        container.set_index(Some(index));
        tracing::trace!(target: targets::ITEMS, element = ?container.element(), index, "container prepared");
    }

    /// Announce that `container` is prepared and in the panel.
    ///
    /// # Panics
    ///
    /// If [`prepare_item_container`](Self::prepare_item_container) was not
    /// called first.
    pub fn item_container_prepared(
        &mut self,
        container: &mut Container<O::Element>,
        item: &O::Item,
        index: usize,
    ) {
        assert!(
            container.phase() == ContainerPhase::Prepared,
            "item_container_prepared on {:?} in phase {:?}; call prepare_item_container first",
            container.element(),
            container.phase()
        );

        self.owner
            .item_container_prepared(container.element(), item, index);
        container.set_phase(ContainerPhase::Live);
    }

    /// Tell the owner a realized container's index changed.
    ///
    /// # Panics
    ///
    /// If the container is not live.
    pub fn item_container_index_changed(
        &mut self,
        container: &mut Container<O::Element>,
        old_index: usize,
        new_index: usize,
    ) {
        assert!(
            container.phase() == ContainerPhase::Live,
            "item_container_index_changed on {:?} in phase {:?}",
            container.element(),
            container.phase()
        );

        self.owner
            .item_container_index_changed(container.element(), old_index, new_index);
        container.set_index(Some(new_index));
        tracing::trace!(target: targets::ITEMS, element = ?container.element(), old_index, new_index, "container moved");
    }

    /// Unbind `container` from its item.
    ///
    /// # Panics
    ///
    /// If the container is an item's own container, or is not bound.
    pub fn clear_item_container(&mut self, container: &mut Container<O::Element>) {
        assert!(
            !container.is_own_container(),
            "clear_item_container on {:?}, which is its item's own container; own containers are never cleared",
            container.element()
        );
        assert!(
            matches!(
                container.phase(),
                ContainerPhase::Live | ContainerPhase::Prepared
            ),
            "clear_item_container on {:?} in phase {:?}",
            container.element(),
            container.phase()
        );

        self.owner.clear_item_container(container.element());
        container.set_phase(ContainerPhase::Cleared);
        tracing::trace!(target: targets::ITEMS, element = ?container.element(), last_index = ?container.index(), "container cleared");
    }

    /// Show or hide a container, leaving it in the tree.
    pub fn set_container_visible(&mut self, container: &mut Container<O::Element>, visible: bool) {
        if container.is_hidden() == !visible {
            return;
        }
        self.owner.set_container_visible(container.element(), visible);
        container.set_hidden(!visible);
    }

    /// The owner's realized container for `index`.
    #[deprecated(note = "ask the owner or the panel")]
    pub fn container_from_index(&self, index: usize) -> Option<O::Element> {
        self.owner.container_from_index(index)
    }

    /// The index the owner has `container` realized for.
    #[deprecated(note = "ask the owner or the panel")]
    pub fn index_from_container(&self, container: &O::Element) -> Option<usize> {
        self.owner.index_from_container(container)
    }
}
