//! Container generation driven against a real element tree.

use std::collections::HashMap;

use trellis::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Label(String),
    Control(ElementId),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    prepare: usize,
    prepared: usize,
    clear: usize,
}

/// A list box: wraps labels in `ListBoxItem` elements and shows control
/// entries directly.
struct ListBox {
    tree: ElementTree,
    host: ElementId,
    content: HashMap<ElementId, String>,
    counts: HashMap<ElementId, Counts>,
    /// Every protocol call, in order, as `(call, element)`.
    log: Vec<(&'static str, ElementId)>,
}

impl ListBox {
    fn new() -> Self {
        let mut tree = ElementTree::new();
        let host = tree.add_child(tree.root(), "ListBox").unwrap();
        Self {
            tree,
            host,
            content: HashMap::new(),
            counts: HashMap::new(),
            log: Vec::new(),
        }
    }

    fn counts(&self, element: ElementId) -> Counts {
        self.counts.get(&element).copied().unwrap_or_default()
    }

    fn calls_for(&self, element: ElementId) -> Vec<&'static str> {
        self.log
            .iter()
            .filter(|(_, e)| *e == element)
            .map(|(call, _)| *call)
            .collect()
    }
}

impl ItemsOwner for ListBox {
    type Item = Entry;
    type Element = ElementId;

    fn item_as_element(&self, item: &Entry) -> Option<ElementId> {
        match item {
            Entry::Control(id) => Some(*id),
            Entry::Label(_) => None,
        }
    }

    fn is_item_its_own_container(&self, element: &ElementId) -> bool {
        self.tree
            .type_name(*element)
            .is_ok_and(|name| name == "ListBoxItem" || name == "Separator")
    }

    fn create_container_for_item(&mut self, _item: &Entry, _index: usize) -> ElementId {
        self.tree.add_child(self.host, "ListBoxItem").unwrap()
    }

    fn prepare_item_container(&mut self, container: &ElementId, item: &Entry, _index: usize) {
        if let Entry::Label(text) = item {
            self.content.insert(*container, text.clone());
        }
        if self.tree.parent(*container).unwrap() != Some(self.host) {
            self.tree.set_parent(*container, Some(self.host)).unwrap();
        }
        self.counts.entry(*container).or_default().prepare += 1;
        self.log.push(("prepare", *container));
    }

    fn item_container_prepared(&mut self, container: &ElementId, _item: &Entry, _index: usize) {
        self.counts.entry(*container).or_default().prepared += 1;
        self.log.push(("prepared", *container));
    }

    fn clear_item_container(&mut self, container: &ElementId) {
        self.content.remove(container);
        self.counts.entry(*container).or_default().clear += 1;
        self.log.push(("clear", *container));
    }

    fn set_container_visible(&mut self, container: &ElementId, visible: bool) {
        self.tree.set_visible(*container, visible).unwrap();
        self.log
            .push((if visible { "show" } else { "hide" }, *container));
    }
}

fn labels(count: usize) -> Vec<Entry> {
    (0..count).map(|i| Entry::Label(format!("item {i}"))).collect()
}

#[test]
fn self_hosting_item_is_prepared_once_across_cycles() {
    init_tracing();
    let mut list = ListBox::new();
    let separator = list.tree.add_element("Separator");

    let mut presenter = ItemsPresenter::new(list);
    presenter.extend(labels(3));
    presenter.insert(1, Entry::Control(separator));

    for _ in 0..4 {
        presenter.set_viewport(0..4);
        assert!(presenter.owner().tree.is_visible(separator).unwrap());
        presenter.set_viewport(10..12);
        assert!(!presenter.owner().tree.is_visible(separator).unwrap());
    }

    assert_eq!(
        presenter.owner().counts(separator),
        Counts {
            prepare: 1,
            prepared: 1,
            clear: 0,
        }
    );
    // Hidden, not detached.
    assert_eq!(presenter.owner().tree.parent(separator).unwrap(), Some(presenter.owner().host));
}

#[test]
fn moving_a_self_hosting_item_keeps_its_binding() {
    init_tracing();
    let mut list = ListBox::new();
    let separator = list.tree.add_element("Separator");

    let mut presenter = ItemsPresenter::new(list);
    presenter.insert(0, Entry::Control(separator));
    presenter.extend(labels(2));
    presenter.set_viewport(0..3);

    let moved = presenter.remove(0).unwrap();
    assert!(!presenter.owner().tree.is_visible(separator).unwrap());
    presenter.insert(2, moved);
    presenter.set_viewport(0..3);

    assert_eq!(
        presenter.owner().counts(separator),
        Counts {
            prepare: 1,
            prepared: 1,
            clear: 0,
        }
    );
    assert_eq!(presenter.panel().index_from_container(&separator), Some(2));
    assert!(presenter.owner().tree.is_visible(separator).unwrap());
    assert_eq!(
        presenter.owner().calls_for(separator),
        ["prepare", "prepared", "hide", "show"]
    );
}

#[test]
fn recycled_container_is_cleared_before_each_reuse() {
    init_tracing();
    let mut presenter = ItemsPresenter::new(ListBox::new());
    presenter.extend(labels(3));

    presenter.set_viewport(0..1);
    let container = *presenter.panel().container_from_index(0).unwrap();
    assert_eq!(presenter.owner().content[&container], "item 0");

    presenter.set_viewport(1..2);
    assert_eq!(presenter.panel().container_from_index(1), Some(&container));
    assert_eq!(presenter.owner().content[&container], "item 1");

    presenter.set_viewport(2..3);
    assert_eq!(presenter.panel().container_from_index(2), Some(&container));
    assert_eq!(presenter.owner().content[&container], "item 2");

    assert_eq!(
        presenter.owner().calls_for(container),
        [
            "prepare", "prepared", // item 0
            "clear", "hide", //
            "show", "prepare", "prepared", // item 1
            "clear", "hide", //
            "show", "prepare", "prepared", // item 2
        ]
    );
    assert_eq!(presenter.owner().tree.children(presenter.owner().host).unwrap().len(), 1);
}

#[test]
fn scrolling_keeps_container_count_bounded() {
    let mut presenter = ItemsPresenter::new(ListBox::new());
    presenter.extend(labels(100));

    for start in 0..90 {
        presenter.set_viewport(start..start + 10);
        assert_eq!(presenter.panel().len(), 10);
    }

    let host = presenter.owner().host;
    let created = presenter.owner().tree.children(host).unwrap().len();
    assert_eq!(created, 10);
    assert_eq!(presenter.panel().realized_indices().collect::<Vec<_>>(), (89..99).collect::<Vec<_>>());
}

#[test]
fn panel_lookups_track_insertions() {
    let mut presenter = ItemsPresenter::new(ListBox::new());
    presenter.extend(labels(4));
    presenter.set_viewport(0..4);
    let last = *presenter.panel().container_from_index(3).unwrap();

    presenter.insert(0, Entry::Label("new".to_string()));
    assert_eq!(presenter.panel().index_from_container(&last), Some(4));

    presenter.remove(2);
    assert_eq!(presenter.panel().index_from_container(&last), Some(3));
    assert_eq!(presenter.panel().realized_indices().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn wrapped_controls_are_not_self_hosting() {
    let mut list = ListBox::new();
    let button = list.tree.add_element("Button");
    let generator = ItemContainerGenerator::new(&mut list);

    assert!(!generator.is_item_its_own_container(&Entry::Control(button)));
    assert!(!generator.is_item_its_own_container(&Entry::Label("x".into())));
}

#[test]
#[should_panic(expected = "own containers are never cleared")]
fn clearing_a_self_hosting_container_panics() {
    let mut list = ListBox::new();
    let item = list.tree.add_element("ListBoxItem");
    let entry = Entry::Control(item);
    let mut generator = ItemContainerGenerator::new(&mut list);

    let mut container = generator.own_container(&entry).unwrap();
    generator.prepare_item_container(&mut container, &entry, 0);
    generator.item_container_prepared(&mut container, &entry, 0);
    generator.clear_item_container(&mut container);
}

#[test]
#[should_panic(expected = "call prepare_item_container first")]
fn announcing_an_unprepared_container_panics() {
    let mut list = ListBox::new();
    let entry = Entry::Label("x".into());
    let mut generator = ItemContainerGenerator::new(&mut list);

    let mut container = generator.create_container(&entry, 0);
    generator.item_container_prepared(&mut container, &entry, 0);
}
