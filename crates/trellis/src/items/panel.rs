//! Realized-container bookkeeping for virtualizing panels.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use super::{Container, ItemContainerGenerator, ItemsOwner};
use crate::logging::{span_names, targets, PerfSpan};

/// The containers a virtualizing panel currently shows, plus the ones it
/// keeps around for reuse.
///
/// Recycling policy lives here, not in the generator:
/// - unrealizing a regular container clears it, hides it and returns it to
///   the recycle pool;
/// - unrealizing or removing an item's own container hides and parks it,
///   bound, so the same item can come back without being prepared again;
/// - realizing reuses a pooled container before creating a new one.
#[derive(Debug)]
pub struct RealizedContainers<E> {
    realized: BTreeMap<usize, Container<E>>,
    recycle_pool: Vec<Container<E>>,
    parked: Vec<Container<E>>,
}

impl<E> Default for RealizedContainers<E> {
    fn default() -> Self {
        Self {
            realized: BTreeMap::new(),
            recycle_pool: Vec::new(),
            parked: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq + fmt::Debug> RealizedContainers<E> {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Realize the container for `item` at `index`.
    ///
    /// A container already realized at `index` is returned unchanged.
    pub fn realize<O>(
        &mut self,
        generator: &mut ItemContainerGenerator<'_, O>,
        item: &O::Item,
        index: usize,
    ) -> &Container<E>
    where
        O: ItemsOwner<Element = E>,
    {
        if self.realized.contains_key(&index) {
            return &self.realized[&index];
        }

        let container = match generator.own_container(item) {
            Some(own) => self.realize_own(generator, own, item, index),
            None => {
                let mut container = match self.recycle_pool.pop() {
                    Some(recycled) => {
                        tracing::trace!(target: targets::ITEMS, element = ?recycled.element(), index, "reusing pooled container");
                        recycled
                    }
                    None => generator.create_container(item, index),
                };
                generator.set_container_visible(&mut container, true);
                generator.prepare_item_container(&mut container, item, index);
                generator.item_container_prepared(&mut container, item, index);
                container
            }
        };

        self.realized.entry(index).or_insert(container)
    }

    fn realize_own<O>(
        &mut self,
        generator: &mut ItemContainerGenerator<'_, O>,
        own: Container<E>,
        item: &O::Item,
        index: usize,
    ) -> Container<E>
    where
        O: ItemsOwner<Element = E>,
    {
        let parked = self
            .parked
            .iter()
            .position(|parked| parked.element() == own.element());

        match parked {
            Some(position) => {
                let mut container = self.parked.swap_remove(position);
                if let Some(old_index) = container.index().filter(|&old| old != index) {
                    generator.item_container_index_changed(&mut container, old_index, index);
                }
                generator.set_container_visible(&mut container, true);
                tracing::trace!(target: targets::ITEMS, element = ?container.element(), index, "own container restored");
                container
            }
            None => {
                let mut container = own;
                generator.prepare_item_container(&mut container, item, index);
                generator.item_container_prepared(&mut container, item, index);
                container
            }
        }
    }

    /// Unrealize the container at `index`. Returns `false` if nothing was
    /// realized there.
    pub fn unrealize<O>(&mut self, generator: &mut ItemContainerGenerator<'_, O>, index: usize) -> bool
    where
        O: ItemsOwner<Element = E>,
    {
        let Some(mut container) = self.realized.remove(&index) else {
            return false;
        };

        if container.is_own_container() {
            generator.set_container_visible(&mut container, false);
            self.parked.push(container);
        } else {
            generator.clear_item_container(&mut container);
            generator.set_container_visible(&mut container, false);
            self.recycle_pool.push(container);
        }
        true
    }

    /// Unrealize every realized container.
    pub fn unrealize_all<O>(&mut self, generator: &mut ItemContainerGenerator<'_, O>)
    where
        O: ItemsOwner<Element = E>,
    {
        let indices: Vec<usize> = self.realized.keys().copied().collect();
        for index in indices {
            self.unrealize(generator, index);
        }
    }

    /// Shift realized containers after `count` items were inserted at `index`.
    pub fn items_inserted<O>(
        &mut self,
        generator: &mut ItemContainerGenerator<'_, O>,
        index: usize,
        count: usize,
    ) where
        O: ItemsOwner<Element = E>,
    {
        if count == 0 {
            return;
        }
        let moved = self.realized.split_off(&index);
        for (old_index, mut container) in moved {
            let new_index = old_index + count;
            generator.item_container_index_changed(&mut container, old_index, new_index);
            self.realized.insert(new_index, container);
        }
    }

    /// Drop the containers of `count` items removed at `index` and shift
    /// the ones after them.
    ///
    /// Regular containers go to the recycle pool. Own containers are hidden
    /// and parked, still bound, so an element that is moved or re-added is
    /// never prepared twice.
    pub fn items_removed<O>(
        &mut self,
        generator: &mut ItemContainerGenerator<'_, O>,
        index: usize,
        count: usize,
    ) where
        O: ItemsOwner<Element = E>,
    {
        if count == 0 {
            return;
        }
        let end = index.saturating_add(count);
        let mut tail = self.realized.split_off(&index);
        let moved = tail.split_off(&end);

        for (_, mut container) in tail {
            if container.is_own_container() {
                generator.set_container_visible(&mut container, false);
                tracing::trace!(target: targets::ITEMS, element = ?container.element(), "own container parked on removal");
                self.parked.push(container);
            } else {
                generator.clear_item_container(&mut container);
                generator.set_container_visible(&mut container, false);
                self.recycle_pool.push(container);
            }
        }

        for (old_index, mut container) in moved {
            let new_index = old_index - count;
            generator.item_container_index_changed(&mut container, old_index, new_index);
            self.realized.insert(new_index, container);
        }
    }

    /// Forget the parked own container of `item` for good.
    ///
    /// Call this once the item's element is destroyed. Returns `false` if
    /// nothing was parked for it.
    pub fn release_parked<O>(&mut self, generator: &ItemContainerGenerator<'_, O>, item: &O::Item) -> bool
    where
        O: ItemsOwner<Element = E>,
    {
        let Some(own) = generator.own_container(item) else {
            return false;
        };
        let before = self.parked.len();
        self.parked.retain(|parked| parked.element() != own.element());
        before != self.parked.len()
    }

    /// Realize exactly the items in `range`, unrealizing everything else.
    ///
    /// `item_at` supplies the item for an index.
    pub fn realize_range<'i, O>(
        &mut self,
        generator: &mut ItemContainerGenerator<'_, O>,
        range: Range<usize>,
        mut item_at: impl FnMut(usize) -> Option<&'i O::Item>,
    ) where
        O: ItemsOwner<Element = E>,
        O::Item: 'i,
    {
        let _span = PerfSpan::new(span_names::REALIZE);
        let outside: Vec<usize> = self
            .realized
            .keys()
            .copied()
            .filter(|index| !range.contains(index))
            .collect();
        for index in outside {
            self.unrealize(generator, index);
        }
        for index in range {
            if let Some(item) = item_at(index) {
                self.realize(generator, item, index);
            }
        }
    }

    /// The container realized at `index`.
    pub fn get(&self, index: usize) -> Option<&Container<E>> {
        self.realized.get(&index)
    }

    /// The element realized at `index`.
    pub fn container_from_index(&self, index: usize) -> Option<&E> {
        self.realized.get(&index).map(Container::element)
    }

    /// The index `element` is realized at.
    pub fn index_from_container(&self, element: &E) -> Option<usize> {
        self.realized
            .iter()
            .find(|(_, container)| container.element() == element)
            .map(|(&index, _)| index)
    }

    /// Realized indices, ascending.
    pub fn realized_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.realized.keys().copied()
    }

    /// Number of cleared containers waiting for reuse.
    pub fn pool_len(&self) -> usize {
        self.recycle_pool.len()
    }

    /// Number of hidden own containers kept bound.
    pub fn parked_len(&self) -> usize {
        self.parked.len()
    }

    /// Number of realized containers.
    pub fn len(&self) -> usize {
        self.realized.len()
    }

    /// Returns `true` if nothing is realized.
    pub fn is_empty(&self) -> bool {
        self.realized.is_empty()
    }
}

/// An items owner, its items and its panel, driven together.
///
/// # Example
///
/// ```
/// use trellis::items::{ItemsOwner, ItemsPresenter};
///
/// struct Labels {
///     next: u32,
/// }
///
/// impl ItemsOwner for Labels {
///     type Item = String;
///     type Element = u32;
///
///     fn create_container_for_item(&mut self, _: &String, _: usize) -> u32 {
///         self.next += 1;
///         self.next
///     }
///     fn prepare_item_container(&mut self, _: &u32, _: &String, _: usize) {}
///     fn clear_item_container(&mut self, _: &u32) {}
/// }
///
/// let mut presenter = ItemsPresenter::new(Labels { next: 0 });
/// presenter.extend(["a", "b", "c", "d"].map(String::from));
///
/// presenter.set_viewport(0..2);
/// presenter.set_viewport(2..4);
/// // The two containers from the first viewport were reused.
/// assert_eq!(presenter.owner().next, 2);
/// ```
pub struct ItemsPresenter<O: ItemsOwner> {
    owner: O,
    items: Vec<O::Item>,
    panel: RealizedContainers<O::Element>,
}

impl<O: ItemsOwner> ItemsPresenter<O> {
    /// Create a presenter with no items.
    pub fn new(owner: O) -> Self {
        Self {
            owner,
            items: Vec::new(),
            panel: RealizedContainers::new(),
        }
    }

    /// The owner.
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// The owner, mutably.
    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    /// The items.
    pub fn items(&self) -> &[O::Item] {
        &self.items
    }

    /// The panel.
    pub fn panel(&self) -> &RealizedContainers<O::Element> {
        &self.panel
    }

    /// A generator over the owner.
    pub fn generator(&mut self) -> ItemContainerGenerator<'_, O> {
        ItemContainerGenerator::new(&mut self.owner)
    }

    /// Append items.
    pub fn extend(&mut self, items: impl IntoIterator<Item = O::Item>) {
        let index = self.items.len();
        self.items.extend(items);
        let count = self.items.len() - index;
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.items_inserted(&mut generator, index, count);
    }

    /// Insert an item at `index`.
    ///
    /// # Panics
    ///
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, item: O::Item) {
        self.items.insert(index, item);
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.items_inserted(&mut generator, index, 1);
    }

    /// Remove and return the item at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<O::Item> {
        if index >= self.items.len() {
            return None;
        }
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.items_removed(&mut generator, index, 1);
        Some(self.items.remove(index))
    }

    /// Realize the item at `index`. `None` if the index is out of range.
    pub fn realize(&mut self, index: usize) -> Option<&Container<O::Element>> {
        let item = self.items.get(index)?;
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        Some(self.panel.realize(&mut generator, item, index))
    }

    /// Forget the parked own container of `item`, once its element is
    /// destroyed.
    pub fn release(&mut self, item: &O::Item) -> bool {
        let generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.release_parked(&generator, item)
    }

    /// Unrealize the item at `index`.
    pub fn unrealize(&mut self, index: usize) -> bool {
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.unrealize(&mut generator, index)
    }

    /// Realize exactly the items in `range`, clamped to the item count.
    pub fn set_viewport(&mut self, range: Range<usize>) {
        let range = range.start.min(self.items.len())..range.end.min(self.items.len());
        let items = &self.items;
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel
            .realize_range(&mut generator, range, |index| items.get(index));
    }

    /// Unrealize everything and return the owner and items.
    pub fn into_parts(mut self) -> (O, Vec<O::Item>) {
        let mut generator = ItemContainerGenerator::new(&mut self.owner);
        self.panel.unrealize_all(&mut generator);
        (self.owner, self.items)
    }
}

impl<O> fmt::Debug for ItemsPresenter<O>
where
    O: ItemsOwner + fmt::Debug,
    O::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemsPresenter")
            .field("owner", &self.owner)
            .field("items", &self.items)
            .field("panel", &self.panel)
            .finish()
    }
}
