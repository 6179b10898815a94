//! Element tree for Trellis.
//!
//! Provides the tree that controls live in:
//! - Stable element identifiers via arena-based storage
//! - Parent-child relationships with cascade removal
//! - Per-element resource dictionaries and style collections
//! - Requested theme variants, inherited down the tree
//! - Visibility, used by panels to hide recycled containers
//!
//! The tree implements [`ResourceTree`], so resources resolve against it
//! directly with [`ElementTree::find_resource`] or through a
//! [`ResourceResolver`](trellis_style::resolve::ResourceResolver).
//!
//! # Example
//!
//! ```
//! use trellis::element::ElementTree;
//! use trellis_style::resources::ResourceValue;
//!
//! let mut tree = ElementTree::new();
//! let window = tree.add_child(tree.root(), "Window").unwrap();
//! let button = tree.add_child(window, "Button").unwrap();
//!
//! tree.resources_mut(window)
//!     .unwrap()
//!     .insert("ButtonPadding", ResourceValue::new(6.0_f64));
//!
//! let padding = tree.find_resource(button, &"ButtonPadding".into());
//! assert_eq!(padding.and_then(|v| v.downcast_ref::<f64>().copied()), Some(6.0));
//! ```

use slotmap::{new_key_type, SlotMap};
use trellis_style::resolve::{find_resource, ResourceNode, ResourceTree};
use trellis_style::resources::{ResourceDictionary, ResourceKey, ResourceValue, ThemeVariant};
use trellis_style::styles::Styles;

use crate::error::{ElementError, ElementResult};
use crate::logging::{span_names, targets, PerfSpan};

new_key_type! {
    /// A unique identifier for an element in an [`ElementTree`].
    ///
    /// Ids stay valid while the tree changes around the element and become
    /// invalid once it is removed. They are never reused.
    pub struct ElementId;
}

/// What role an element plays in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The application root. Exactly one per tree.
    Application,
    /// Any other element.
    Control,
}

/// Data stored in the tree for each element.
#[derive(Debug)]
struct ElementData {
    kind: ElementKind,
    type_name: &'static str,
    name: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    resources: Option<ResourceDictionary>,
    styles: Option<Styles>,
    requested_theme_variant: Option<ThemeVariant>,
    visible: bool,
}

impl ElementData {
    fn new(kind: ElementKind, type_name: &'static str) -> Self {
        Self {
            kind,
            type_name,
            name: String::new(),
            parent: None,
            children: Vec::new(),
            resources: None,
            styles: None,
            requested_theme_variant: None,
            visible: true,
        }
    }
}

impl ResourceNode for ElementData {
    fn resources(&self) -> Option<&ResourceDictionary> {
        self.resources.as_ref()
    }

    fn styles(&self) -> Option<&Styles> {
        self.styles.as_ref()
    }
}

/// The tree of elements, rooted at an application element.
///
/// Every mutation that can change what a resource lookup returns (dictionary
/// or style access through `_mut` accessors, re-parenting, removal, theme
/// variant changes) bumps [`generation`](Self::generation).
#[derive(Debug)]
pub struct ElementTree {
    elements: SlotMap<ElementId, ElementData>,
    root: ElementId,
    generation: u64,
}

impl ElementTree {
    /// Create a tree with an application root using the light theme variant.
    pub fn new() -> Self {
        Self::with_theme_variant(ThemeVariant::LIGHT)
    }

    /// Create a tree whose application root requests `variant`.
    pub fn with_theme_variant(variant: ThemeVariant) -> Self {
        let mut elements = SlotMap::with_key();
        let mut data = ElementData::new(ElementKind::Application, "Application");
        data.name = "Application".to_string();
        data.requested_theme_variant = Some(variant);
        let root = elements.insert(data);
        Self {
            elements,
            root,
            generation: 0,
        }
    }

    /// The application root.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The current mutation generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of elements, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: the root cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check if an element exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Add a detached element.
    pub fn add_element(&mut self, type_name: &'static str) -> ElementId {
        let id = self
            .elements
            .insert(ElementData::new(ElementKind::Control, type_name));
        tracing::trace!(target: targets::ELEMENT, ?id, type_name, "added element");
        id
    }

    /// Add an element as the last child of `parent`.
    pub fn add_child(&mut self, parent: ElementId, type_name: &'static str) -> ElementResult<ElementId> {
        self.get(parent)?;
        let id = self.add_element(type_name);
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Set the parent of an element.
    ///
    /// Handles removal from the old parent's children. Passing `None`
    /// detaches the element.
    pub fn set_parent(&mut self, id: ElementId, new_parent: Option<ElementId>) -> ElementResult<()> {
        if id == self.root {
            return Err(ElementError::RootImmutable);
        }
        self.get(id)?;

        if let Some(parent_id) = new_parent {
            self.get(parent_id)?;
            if self.is_ancestor_of(id, parent_id) {
                return Err(ElementError::CircularParentage {
                    child: id,
                    parent: parent_id,
                });
            }
        }

        let old_parent = self.elements.get(id).and_then(|d| d.parent);
        if let Some(old_parent_id) = old_parent {
            if let Some(parent_data) = self.elements.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        if let Some(data) = self.elements.get_mut(id) {
            data.parent = new_parent;
        }

        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.elements.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        self.bump();
        Ok(())
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_of(&self, potential_ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.elements.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Remove an element and all its descendants.
    #[tracing::instrument(skip(self), target = "trellis::element", level = "trace")]
    pub fn remove(&mut self, id: ElementId) -> ElementResult<()> {
        if id == self.root {
            return Err(ElementError::RootImmutable);
        }
        let parent = self.get(id)?.parent;

        let mut doomed = vec![id];
        let mut next = 0;
        while let Some(&current) = doomed.get(next) {
            if let Some(data) = self.elements.get(current) {
                doomed.extend_from_slice(&data.children);
            }
            next += 1;
        }
        tracing::trace!(target: targets::ELEMENT, ?id, descendant_count = doomed.len() - 1, "removing element subtree");

        if let Some(parent_data) = parent.and_then(|p| self.elements.get_mut(p)) {
            parent_data.children.retain(|&child| child != id);
        }
        for element in doomed {
            self.elements.remove(element);
        }

        self.bump();
        Ok(())
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> ElementResult<Option<ElementId>> {
        Ok(self.get(id)?.parent)
    }

    /// Get the children of an element.
    pub fn children(&self, id: ElementId) -> ElementResult<&[ElementId]> {
        Ok(self.get(id)?.children.as_slice())
    }

    /// Get the element's kind.
    pub fn kind(&self, id: ElementId) -> ElementResult<ElementKind> {
        Ok(self.get(id)?.kind)
    }

    /// Get the element's type name.
    pub fn type_name(&self, id: ElementId) -> ElementResult<&'static str> {
        Ok(self.get(id)?.type_name)
    }

    /// Get the element's name.
    pub fn name(&self, id: ElementId) -> ElementResult<&str> {
        Ok(self.get(id)?.name.as_str())
    }

    /// Set the element's name.
    pub fn set_name(&mut self, id: ElementId, name: impl Into<String>) -> ElementResult<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Get the element's own resource dictionary, if it has one.
    pub fn resources(&self, id: ElementId) -> ElementResult<Option<&ResourceDictionary>> {
        Ok(self.get(id)?.resources.as_ref())
    }

    /// Get the element's own resource dictionary, creating it if missing.
    ///
    /// Bumps the generation: the caller is assumed to modify it.
    pub fn resources_mut(&mut self, id: ElementId) -> ElementResult<&mut ResourceDictionary> {
        self.get(id)?;
        self.bump();
        let data = self.get_mut(id)?;
        Ok(data.resources.get_or_insert_with(ResourceDictionary::new))
    }

    /// Replace the element's own resource dictionary.
    pub fn set_resources(
        &mut self,
        id: ElementId,
        resources: Option<ResourceDictionary>,
    ) -> ElementResult<()> {
        self.get_mut(id)?.resources = resources;
        self.bump();
        Ok(())
    }

    /// Get the element's style collection, if it has one.
    pub fn styles(&self, id: ElementId) -> ElementResult<Option<&Styles>> {
        Ok(self.get(id)?.styles.as_ref())
    }

    /// Get the element's style collection, creating it if missing.
    ///
    /// Bumps the generation: the caller is assumed to modify it.
    pub fn styles_mut(&mut self, id: ElementId) -> ElementResult<&mut Styles> {
        self.get(id)?;
        self.bump();
        let data = self.get_mut(id)?;
        Ok(data.styles.get_or_insert_with(Styles::new))
    }

    /// Request a theme variant for an element and its descendants.
    pub fn set_requested_theme_variant(
        &mut self,
        id: ElementId,
        variant: Option<ThemeVariant>,
    ) -> ElementResult<()> {
        self.get_mut(id)?.requested_theme_variant = variant;
        self.bump();
        Ok(())
    }

    /// The variant explicitly requested on this element.
    pub fn requested_theme_variant(&self, id: ElementId) -> ElementResult<Option<&ThemeVariant>> {
        Ok(self.get(id)?.requested_theme_variant.as_ref())
    }

    /// The variant in effect at an element: the nearest requested variant
    /// among the element and its ancestors, else the root's, else light.
    pub fn actual_theme_variant(&self, id: ElementId) -> ThemeVariant {
        let mut current = Some(id);
        while let Some(current_id) = current {
            let Some(data) = self.elements.get(current_id) else {
                break;
            };
            if let Some(variant) = &data.requested_theme_variant {
                return variant.clone();
            }
            current = data.parent;
        }

        self.elements
            .get(self.root)
            .and_then(|root| root.requested_theme_variant.clone())
            .unwrap_or(ThemeVariant::LIGHT)
    }

    /// Show or hide an element.
    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> ElementResult<()> {
        self.get_mut(id)?.visible = visible;
        Ok(())
    }

    /// Whether the element itself is visible, ignoring ancestors.
    pub fn is_visible(&self, id: ElementId) -> ElementResult<bool> {
        Ok(self.get(id)?.visible)
    }

    /// Find a resource as seen from `id`, using the variant in effect there.
    pub fn find_resource(&self, id: ElementId, key: &ResourceKey) -> Option<ResourceValue> {
        self.find_resource_for_variant(id, key, &self.actual_theme_variant(id))
    }

    /// Find a resource as seen from `id` for an explicit variant.
    pub fn find_resource_for_variant(
        &self,
        id: ElementId,
        key: &ResourceKey,
        variant: &ThemeVariant,
    ) -> Option<ResourceValue> {
        let _span = PerfSpan::new(span_names::RESOURCE_LOOKUP);
        find_resource(self, id, key, variant)
    }

    fn get(&self, id: ElementId) -> ElementResult<&ElementData> {
        self.elements.get(id).ok_or(ElementError::InvalidElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> ElementResult<&mut ElementData> {
        self.elements
            .get_mut(id)
            .ok_or(ElementError::InvalidElement(id))
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Count the element's own resource entries plus those of its styles'
    /// own dictionaries. Used for debug output.
    pub(crate) fn resource_count(&self, id: ElementId) -> usize {
        self.elements.get(id).map_or(0, |data| {
            data.resources.as_ref().map_or(0, ResourceDictionary::len)
                + data.styles.as_ref().map_or(0, |styles| {
                    styles.resources().map_or(0, ResourceDictionary::len)
                        + styles
                            .iter()
                            .filter_map(|style| style.resources())
                            .map(ResourceDictionary::len)
                            .sum::<usize>()
                })
        })
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTree for ElementTree {
    type NodeId = ElementId;

    fn node(&self, id: ElementId) -> Option<&dyn ResourceNode> {
        self.elements.get(id).map(|data| data as &dyn ResourceNode)
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|data| data.parent)
    }

    fn theme_variant(&self, id: ElementId) -> ThemeVariant {
        self.actual_theme_variant(id)
    }

    fn generation(&self) -> Option<u64> {
        Some(self.generation)
    }
}
