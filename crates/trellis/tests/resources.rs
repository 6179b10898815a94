//! Resource resolution through the element tree.

use std::cell::Cell;
use std::rc::Rc;

use trellis::prelude::*;
use trellis_style::theme::keys as fluent_keys;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn int(value: Option<ResourceValue>) -> Option<i32> {
    value.and_then(|v| v.downcast_ref::<i32>().copied())
}

fn text(value: Option<ResourceValue>) -> Option<&'static str> {
    value.and_then(|v| v.downcast_ref::<&'static str>().copied())
}

/// `root -> A{"x": 1} -> B -> C`
fn chain() -> (ElementTree, [ElementId; 3]) {
    let mut tree = ElementTree::new();
    let a = tree.add_child(tree.root(), "Border").unwrap();
    let b = tree.add_child(a, "StackPanel").unwrap();
    let c = tree.add_child(b, "Button").unwrap();
    tree.resources_mut(a)
        .unwrap()
        .insert("x", ResourceValue::new(1_i32));
    (tree, [a, b, c])
}

#[test]
fn ancestor_value_is_found() {
    init_tracing();
    let (tree, [_, _, c]) = chain();

    assert_eq!(int(tree.find_resource(c, &"x".into())), Some(1));
}

#[test]
fn missing_key_is_not_found() {
    init_tracing();
    let (tree, [a, _, c]) = chain();

    assert!(tree.find_resource(c, &"y".into()).is_none());
    assert!(tree.find_resource(a, &"y".into()).is_none());
}

#[test]
fn nearer_ancestor_shadows_farther() {
    let (mut tree, [_, b, c]) = chain();
    tree.resources_mut(b)
        .unwrap()
        .insert("x", ResourceValue::new(2_i32));

    assert_eq!(int(tree.find_resource(c, &"x".into())), Some(2));
}

#[test]
fn null_is_found_and_distinct_from_missing() {
    let (mut tree, [_, b, c]) = chain();
    tree.resources_mut(b).unwrap().insert_null("x");

    let found = tree.find_resource(c, &"x".into());
    assert!(found.as_ref().is_some_and(ResourceValue::is_null));
    assert!(tree.find_resource(c, &"y".into()).is_none());
}

#[test]
fn detached_element_does_not_reach_application_resources() {
    let mut tree = ElementTree::new();
    let root = tree.root();
    tree.resources_mut(root)
        .unwrap()
        .insert("AppFont", ResourceValue::new("Segoe"));
    let popup = tree.add_element("Popup");
    let content = tree.add_child(popup, "Border").unwrap();

    assert!(tree.find_resource(popup, &"AppFont".into()).is_none());
    assert!(tree.find_resource(content, &"AppFont".into()).is_none());

    // Attaching the popup puts the root back on its chain.
    tree.set_parent(popup, Some(root)).unwrap();
    assert_eq!(text(tree.find_resource(content, &"AppFont".into())), Some("Segoe"));
}

#[test]
fn later_styles_override_earlier_ones() {
    init_tracing();
    let mut tree = ElementTree::new();
    let root = tree.root();
    let styles = tree.styles_mut(root).unwrap();
    styles.push(Style::new().with_resources(
        ResourceDictionary::new().with("t", ResourceValue::new("pre")),
    ));
    styles.push(FluentTheme::new().into_style());
    styles.push(Style::new().with_resources(
        ResourceDictionary::new().with("t", ResourceValue::new("post")),
    ));
    let button = tree.add_child(root, "Button").unwrap();

    assert_eq!(text(tree.find_resource(button, &"t".into())), Some("post"));
    // Theme keys defined only by the middle style are still reachable.
    assert!(tree
        .find_resource(button, &fluent_keys::ACCENT_COLOR.into())
        .is_some());
}

#[test]
fn own_dictionary_beats_styles_on_same_element() {
    let mut tree = ElementTree::new();
    let window = tree.add_child(tree.root(), "Window").unwrap();
    tree.styles_mut(window).unwrap().push(Style::new().with_resources(
        ResourceDictionary::new().with("x", ResourceValue::new(2_i32)),
    ));
    tree.resources_mut(window)
        .unwrap()
        .insert("x", ResourceValue::new(1_i32));

    assert_eq!(int(tree.find_resource(window, &"x".into())), Some(1));
}

#[test]
fn requested_variant_selects_theme_dictionary() {
    let mut tree = ElementTree::new();
    let root = tree.root();
    tree.styles_mut(root)
        .unwrap()
        .push(FluentTheme::new().into_style());
    let light_panel = tree.add_child(root, "StackPanel").unwrap();
    let dark_panel = tree.add_child(root, "StackPanel").unwrap();
    tree.set_requested_theme_variant(dark_panel, Some(ThemeVariant::DARK))
        .unwrap();
    let dark_button = tree.add_child(dark_panel, "Button").unwrap();

    let accent = |id| {
        tree.find_resource(id, &fluent_keys::ACCENT_COLOR.into())
            .and_then(|v| v.downcast_ref::<Color>().copied())
    };
    assert_eq!(accent(light_panel), Some(ColorPalette::light().accent));
    assert_eq!(accent(dark_button), Some(ColorPalette::dark().accent));
}

#[test]
fn deferred_value_is_produced_once() {
    let calls = Rc::new(Cell::new(0));
    let (mut tree, [a, _, c]) = chain();
    let counter = Rc::clone(&calls);
    tree.resources_mut(a).unwrap().insert_deferred("Brush", move || {
        counter.set(counter.get() + 1);
        ResourceValue::new(Color::BLACK)
    });

    let first = tree.find_resource(c, &"Brush".into()).unwrap();
    let second = tree.find_resource(c, &"Brush".into()).unwrap();

    assert_eq!(calls.get(), 1);
    assert!(first.ptr_eq(&second));
}

#[test]
fn resolver_cache_follows_tree_changes() {
    init_tracing();
    let (mut tree, [a, b, c]) = chain();
    let mut resolver = ResourceResolver::new(ResolverConfig::default());
    let key = ResourceKey::from("x");

    assert_eq!(int(resolver.find_resource_default(&tree, c, &key)), Some(1));
    assert_eq!(int(resolver.find_resource_default(&tree, c, &key)), Some(1));
    assert_eq!(resolver.cache().hits(), 1);

    tree.resources_mut(b)
        .unwrap()
        .insert("x", ResourceValue::new(5_i32));
    assert_eq!(int(resolver.find_resource_default(&tree, c, &key)), Some(5));

    tree.set_parent(c, Some(a)).unwrap();
    tree.resources_mut(b).unwrap().remove(&key);
    assert_eq!(int(resolver.find_resource_default(&tree, c, &key)), Some(1));

    tree.remove(a).unwrap();
    assert!(resolver.find_resource_default(&tree, c, &key).is_none());
}

#[test]
fn cached_and_uncached_agree() {
    let (tree, ids) = chain();
    let mut cached = ResourceResolver::new(ResolverConfig::default().cache_capacity(2));
    let mut uncached = ResourceResolver::new(ResolverConfig::uncached());

    for _ in 0..3 {
        for &id in &ids {
            for name in ["x", "y"] {
                let key = ResourceKey::from(name);
                assert_eq!(
                    int(cached.find_resource_default(&tree, id, &key)),
                    int(uncached.find_resource_default(&tree, id, &key)),
                );
            }
        }
    }
    assert!(cached.cache().len() <= 2);
    assert!(uncached.cache().is_empty());
}

#[test]
fn type_keys_resolve_like_names() {
    #[derive(Debug, PartialEq)]
    struct ButtonTheme(&'static str);

    let (mut tree, [a, _, c]) = chain();
    tree.resources_mut(a)
        .unwrap()
        .insert(ResourceKey::of_type::<ButtonTheme>(), ResourceValue::new(ButtonTheme("flat")));

    let key = ResourceKey::of_type::<ButtonTheme>();
    let found = tree.find_resource(c, &key).unwrap();
    assert_eq!(found.typed::<ButtonTheme>(&key).unwrap(), Some(&ButtonTheme("flat")));
    assert!(found.typed::<i32>(&key).is_err());
}
