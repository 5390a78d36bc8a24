//! In-memory document model.
//!
//! The lookup page is a small element tree: input fields, the containers that
//! hold their suggestion lists and the find-matchup anchor. [`Document`]
//! stores that tree in a slotmap so elements can be referenced by stable
//! [`ElementId`] handles while the widgets rebuild their result lists.
//!
//! # Example
//!
//! ```
//! use onevone::dom::{Document, Selector};
//!
//! let mut doc = Document::new();
//! let container = doc.append_child(doc.root(), "div");
//! doc.add_class(container, "input-container");
//! let input = doc.append_child(container, "input");
//! doc.set_id(input, "champion");
//! doc.set_value(input, "Ahri");
//!
//! let found = doc.find_by_id("champion");
//! assert_eq!(found, Some(input));
//! assert_eq!(doc.select_all(&Selector::class("input-container")), vec![container]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to an element in a [`Document`].
    pub struct ElementId;
}

/// A document shared between the page and its widgets.
pub type SharedDocument = Arc<Mutex<Document>>;

/// One element node.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    data_value: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The class list, in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Form value (for input elements).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `data-value` attribute.
    pub fn data_value(&self) -> Option<&str> {
        self.data_value.as_deref()
    }

    /// The parent element.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child elements, in order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// A simple element selector: every given part must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Match any element.
    pub fn any() -> Self {
        Self::default()
    }

    /// Match by tag name.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::any().with_tag(tag)
    }

    /// Match by `id` attribute.
    pub fn id(id: impl Into<String>) -> Self {
        Self::any().with_id(id)
    }

    /// Match by class.
    pub fn class(class: impl Into<String>) -> Self {
        Self::any().with_class(class)
    }

    /// Also require the tag name.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Also require the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Also require a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Whether `element` satisfies this selector.
    pub fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().is_none_or(|tag| element.tag == tag)
            && self.id.as_deref().is_none_or(|id| element.id() == Some(id))
            && self.class.as_deref().is_none_or(|class| element.has_class(class))
    }
}

/// An element tree rooted at a `body` element.
///
/// Operations on stale handles are ignored (mutators) or return empty
/// results (queries).
#[derive(Debug)]
pub struct Document {
    elements: SlotMap<ElementId, Element>,
    root: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the root element.
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::new("body"));
        Self { elements, root }
    }

    /// Wrap this document for sharing.
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of live elements, root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: the root element cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `id` refers to a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        self.elements.insert(Element::new(tag))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Returns false if either handle is stale, if `child` already has a
    /// parent, or if `child` is `parent` or one of its ancestors.
    pub fn append(&mut self, parent: ElementId, child: ElementId) -> bool {
        if !self.contains(parent)
            || child == self.root
            || self.elements.get(child).is_none_or(|c| c.parent.is_some())
            || self.is_ancestor_or_self(child, parent)
        {
            return false;
        }
        if let Some(element) = self.elements.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.elements.get_mut(parent) {
            element.children.push(child);
        }
        true
    }

    /// Create an element and append it to `parent`.
    ///
    /// The element stays detached if `parent` is stale.
    pub fn append_child(&mut self, parent: ElementId, tag: impl Into<String>) -> ElementId {
        let child = self.create_element(tag);
        self.append(parent, child);
        child
    }

    /// Remove an element and all of its descendants.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root {
            return;
        }
        if let Some(parent) = self.parent(id)
            && let Some(element) = self.elements.get_mut(parent)
        {
            element.children.retain(|&c| c != id);
        }
        self.remove_subtree(id);
    }

    /// Remove every descendant of `id`, keeping `id` itself.
    pub fn clear_children(&mut self, id: ElementId) {
        let children = match self.elements.get_mut(id) {
            Some(element) => std::mem::take(&mut element.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(element) = self.elements.remove(next) {
                stack.extend(element.children);
            }
        }
    }

    /// The parent of `id`.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|e| e.parent)
    }

    /// The children of `id`.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements.get(id).map_or(&[], |e| e.children.as_slice())
    }

    /// The other children of `id`'s parent, in order.
    pub fn siblings(&self, id: ElementId) -> Vec<ElementId> {
        self.parent(id)
            .map(|parent| {
                self.children(parent)
                    .iter()
                    .copied()
                    .filter(|&c| c != id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestors_inclusive(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut current = self.contains(id).then_some(id);
        while let Some(next) = current {
            out.push(next);
            current = self.parent(next);
        }
        out
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: ElementId, id: ElementId) -> bool {
        self.ancestors_inclusive(id).contains(&ancestor)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Attached elements matching `selector`, in document order.
    pub fn select_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.select_within(self.root, selector)
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn select_within(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    /// The first attached element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.select_all(&Selector::id(id)).into_iter().next()
    }

    /// The nearest of `id` and its ancestors matching `selector`.
    pub fn closest(&self, id: ElementId, selector: &Selector) -> Option<ElementId> {
        self.ancestors_inclusive(id)
            .into_iter()
            .find(|&a| self.matches(a, selector))
    }

    /// Whether `id` matches `selector`.
    pub fn matches(&self, id: ElementId, selector: &Selector) -> bool {
        self.elements.get(id).is_some_and(|e| selector.matches(e))
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// The tag name of `id`.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).map(Element::tag)
    }

    /// Set the `id` attribute.
    pub fn set_id(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.id = Some(value.into());
        }
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: ElementId, class: impl Into<String>) {
        let class = class.into();
        if let Some(element) = self.elements.get_mut(id)
            && !element.has_class(&class)
        {
            element.classes.push(class);
        }
    }

    /// Whether `id` carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    /// The class list of `id`.
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.elements.get(id).map_or(&[], |e| e.classes.as_slice())
    }

    /// Form value of `id`; empty for stale handles.
    pub fn value(&self, id: ElementId) -> &str {
        self.elements.get(id).map_or("", Element::value)
    }

    /// Set the form value.
    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.into();
        }
    }

    /// Text content of `id`; empty for stale handles.
    pub fn text(&self, id: ElementId) -> &str {
        self.elements.get(id).map_or("", Element::text)
    }

    /// Set the text content.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.into();
        }
    }

    /// The `data-value` attribute of `id`.
    pub fn data_value(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).and_then(Element::data_value)
    }

    /// Set the `data-value` attribute.
    pub fn set_data_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.data_value = Some(value.into());
        }
    }
}
