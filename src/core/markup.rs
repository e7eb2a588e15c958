// Markup Document
// In-memory element tree loaded from YAML; the host document for the tab widget

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use super::document::{ElementId, HostDocument};
use super::error::DocumentError;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Markup Structures                                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Top-level markup file
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupFile {
    /// Optional document title (shown in the header)
    pub title: Option<String>,
    /// Root element
    pub root: NodeYaml,
}

/// One element in the markup file
#[derive(Debug, Clone, Deserialize)]
pub struct NodeYaml {
    /// Element tag (e.g. "main", "button")
    pub tag: String,
    /// Text content
    #[serde(default)]
    pub text: String,
    /// Attributes; scalars of any type are stored as strings
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Child elements in document order
    #[serde(default)]
    pub children: Vec<NodeYaml>,
}

/// Attribute value as written in YAML (`tabindex: 0` and `tabindex: "0"` are the same)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// `hidden:` with no value; presence is what counts
    Empty(()),
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    fn into_string(self) -> String {
        match self {
            AttributeValue::Empty(()) => String::new(),
            AttributeValue::Bool(b) => b.to_string(),
            AttributeValue::Int(i) => i.to_string(),
            AttributeValue::Float(f) => f.to_string(),
            AttributeValue::Text(s) => s,
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Element Tree                                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    text: String,
    attributes: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Element matcher used by the query functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `[role="..."]`
    Role(&'a str),
    /// `#id`
    Id(&'a str),
    /// `[name="value"]`
    Attr(&'a str, &'a str),
}

impl Selector<'_> {
    fn matches(&self, node: &Node) -> bool {
        let attr_is = |name: &str, value: &str| node.attributes.get(name).map(|v| v == value).unwrap_or(false);
        match *self {
            Selector::Role(role) => attr_is("role", role),
            Selector::Id(id) => attr_is("id", id),
            Selector::Attr(name, value) => attr_is(name, value),
        }
    }
}

/// Arena-backed element tree with a focus pointer
#[derive(Debug, Clone)]
pub struct Document {
    title: Option<String>,
    nodes: Vec<Node>,
    focused: Option<ElementId>,
}

impl Document {
    /// Create a document containing only a root element
    pub fn new(root_tag: &str) -> Self {
        Self {
            title: None,
            nodes: vec![Node {
                tag: root_tag.to_string(),
                text: String::new(),
                attributes: BTreeMap::new(),
                parent: None,
                children: Vec::new(),
            }],
            focused: None,
        }
    }

    /// Parse a document from YAML markup
    pub fn from_yaml(content: &str) -> Result<Self, DocumentError> {
        let markup: MarkupFile = serde_yaml::from_str(content)?;
        Self::from_markup(markup)
    }

    /// Load a document from a YAML file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Build a document from parsed markup, rejecting duplicate ids
    pub fn from_markup(markup: MarkupFile) -> Result<Self, DocumentError> {
        let MarkupFile { title, root } = markup;

        let mut doc = Self::new(&root.tag);
        doc.title = title;
        let root_id = doc.root();
        doc.fill(root_id, root);

        let mut seen = HashSet::new();
        for node in &doc.nodes {
            if let Some(id) = node.attributes.get("id") {
                if !seen.insert(id.as_str()) {
                    return Err(DocumentError::DuplicateId(id.clone()));
                }
            }
        }

        tracing::debug!(elements = doc.nodes.len(), "document built");
        Ok(doc)
    }

    fn fill(&mut self, element: ElementId, spec: NodeYaml) {
        let node = &mut self.nodes[element.0];
        node.text = spec.text;
        node.attributes = spec
            .attributes
            .into_iter()
            .map(|(k, v)| (k, v.into_string()))
            .collect();

        for child in spec.children {
            let child_id = self.append_child(element, &child.tag);
            self.fill(child_id, child);
        }
    }

    /// Document title, if the markup declared one
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The root element
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Append a new element as the last child of `parent`
    pub fn append_child(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            text: String::new(),
            attributes: BTreeMap::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(element.0).map(|n| n.tag.as_str())
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(element.0).map(|n| n.text.as_str())
    }

    pub fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.text = text.to_string();
        }
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(element.0).and_then(|n| n.parent)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(element.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Read an attribute
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.nodes
            .get(element.0)
            .and_then(|n| n.attributes.get(name))
            .map(|v| v.as_str())
    }

    /// Write an attribute
    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: impl ToString) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attribute(&mut self, element: ElementId, name: &str) -> bool {
        self.nodes
            .get_mut(element.0)
            .map(|n| n.attributes.remove(name).is_some())
            .unwrap_or(false)
    }

    /// Whether the element carries the `hidden` marker
    pub fn is_hidden(&self, element: ElementId) -> bool {
        self.attribute(element, "hidden").is_some()
    }

    /// Element holding input focus
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// First descendant of `scope` (scope excluded) matching the selector, in document order
    pub fn query_selector(&self, scope: ElementId, selector: Selector<'_>) -> Option<ElementId> {
        let mut found = None;
        self.walk(scope, &mut |id, node| {
            if found.is_none() && selector.matches(node) {
                found = Some(id);
            }
        });
        found
    }

    /// All descendants of `scope` (scope excluded) matching the selector, in document order
    pub fn query_selector_all(&self, scope: ElementId, selector: Selector<'_>) -> Vec<ElementId> {
        let mut found = Vec::new();
        self.walk(scope, &mut |id, node| {
            if selector.matches(node) {
                found.push(id);
            }
        });
        found
    }

    /// Look up an element anywhere in the document by id
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.query_selector(self.root(), Selector::Id(id))
    }

    fn walk<F: FnMut(ElementId, &Node)>(&self, scope: ElementId, visit: &mut F) {
        for &child in self.children(scope) {
            visit(child, &self.nodes[child.0]);
            self.walk(child, visit);
        }
    }

    /// Container whose subtree holds a tab's panels and images (the tab-list's parent)
    fn container_of(&self, tab: ElementId) -> ElementId {
        self.parent(tab)
            .and_then(|list| self.parent(list))
            .unwrap_or_else(|| self.root())
    }

    fn referenced(&self, tab: ElementId, attribute: &str) -> Option<ElementId> {
        let target = self.attribute(tab, attribute)?;
        self.query_selector(self.container_of(tab), Selector::Id(target))
    }
}

impl HostDocument for Document {
    fn tab_list(&self) -> Option<ElementId> {
        self.query_selector(self.root(), Selector::Role("tablist"))
    }

    fn tabs(&self, tab_list: ElementId) -> Vec<ElementId> {
        self.query_selector_all(tab_list, Selector::Role("tab"))
    }

    fn selected_tab(&self, tab_list: ElementId) -> Option<ElementId> {
        self.query_selector(tab_list, Selector::Attr("aria-selected", "true"))
    }

    fn panel_for(&self, tab: ElementId) -> Option<ElementId> {
        self.referenced(tab, "aria-controls")
    }

    fn panels(&self, tab: ElementId) -> Vec<ElementId> {
        self.query_selector_all(self.container_of(tab), Selector::Role("tabpanel"))
    }

    fn image_for(&self, tab: ElementId) -> Option<ElementId> {
        self.referenced(tab, "data-image")
    }

    fn images(&self, tab: ElementId) -> Vec<ElementId> {
        let Some(tab_list) = self.parent(tab) else {
            return Vec::new();
        };

        let mut images = Vec::new();
        for sibling in self.tabs(tab_list) {
            if let Some(image) = self.image_for(sibling) {
                if !images.contains(&image) {
                    images.push(image);
                }
            }
        }
        images
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        if visible {
            self.remove_attribute(element, "hidden");
        } else {
            self.set_attribute(element, "hidden", true);
        }
    }

    fn set_selected(&mut self, tab: ElementId, selected: bool) {
        self.set_attribute(tab, "aria-selected", selected);
    }

    fn set_tab_index(&mut self, tab: ElementId, tab_index: i32) {
        self.set_attribute(tab, "tabindex", tab_index);
    }

    fn focus(&mut self, element: ElementId) {
        if element.0 < self.nodes.len() {
            self.focused = Some(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"
title: Test
root:
  tag: main
  children:
    - tag: div
      attributes: { role: tablist }
      children:
        - tag: button
          text: One
          attributes: { role: tab, id: t1, aria-controls: p1, aria-selected: true, tabindex: 0, data-image: i1 }
        - tag: button
          text: Two
          attributes: { role: tab, id: t2, aria-controls: p2, aria-selected: false, tabindex: -1, data-image: i2 }
    - tag: article
      text: First
      attributes: { role: tabpanel, id: p1 }
    - tag: article
      text: Second
      attributes: { role: tabpanel, id: p2, hidden: true }
    - tag: picture
      attributes: { id: i1 }
    - tag: picture
      attributes: { id: i2, hidden: true }
"#;

    #[test]
    fn test_parse_scalars_as_strings() {
        let doc = Document::from_yaml(MARKUP).unwrap();
        let t1 = doc.element_by_id("t1").unwrap();
        assert_eq!(doc.attribute(t1, "tabindex"), Some("0"));
        assert_eq!(doc.attribute(t1, "aria-selected"), Some("true"));
        assert_eq!(doc.text(t1), Some("One"));
        assert_eq!(doc.title(), Some("Test"));
    }

    #[test]
    fn test_query_order_and_scope() {
        let doc = Document::from_yaml(MARKUP).unwrap();
        let list = doc.tab_list().unwrap();
        let tabs = doc.tabs(list);
        assert_eq!(tabs.len(), 2);
        assert_eq!(doc.attribute(tabs[0], "id"), Some("t1"));
        assert_eq!(doc.attribute(tabs[1], "id"), Some("t2"));

        // Panels live outside the tab-list
        assert!(doc.query_selector(list, Selector::Role("tabpanel")).is_none());
        assert_eq!(doc.panels(tabs[0]).len(), 2);
    }

    #[test]
    fn test_references_resolve() {
        let doc = Document::from_yaml(MARKUP).unwrap();
        let t2 = doc.element_by_id("t2").unwrap();
        assert_eq!(doc.panel_for(t2), doc.element_by_id("p2"));
        assert_eq!(doc.image_for(t2), doc.element_by_id("i2"));
        assert_eq!(doc.images(t2), vec![doc.element_by_id("i1").unwrap(), doc.element_by_id("i2").unwrap()]);
    }

    #[test]
    fn test_visibility_marker() {
        let mut doc = Document::from_yaml(MARKUP).unwrap();
        let p2 = doc.element_by_id("p2").unwrap();
        assert!(doc.is_hidden(p2));
        doc.set_visible(p2, true);
        assert!(!doc.is_hidden(p2));
        assert_eq!(doc.attribute(p2, "hidden"), None);
        doc.set_visible(p2, false);
        assert!(doc.is_hidden(p2));
    }

    #[test]
    fn test_valueless_and_float_attributes() {
        let markup = r#"
root:
  tag: main
  children:
    - tag: section
      attributes:
        role: tabpanel
        id: p
        hidden:
        data-ratio: 0.5
"#;
        let doc = Document::from_yaml(markup).unwrap();
        let panel = doc.element_by_id("p").unwrap();
        assert!(doc.is_hidden(panel));
        assert_eq!(doc.attribute(panel, "hidden"), Some(""));
        assert_eq!(doc.attribute(panel, "data-ratio"), Some("0.5"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let markup = r#"
root:
  tag: main
  children:
    - tag: div
      attributes: { id: twin }
    - tag: div
      attributes: { id: twin }
"#;
        match Document::from_yaml(markup) {
            Err(DocumentError::DuplicateId(id)) => assert_eq!(id, "twin"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        assert!(matches!(
            Document::from_yaml("root: [unclosed"),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_focus_ignores_unknown_element() {
        let mut doc = Document::new("main");
        doc.focus(ElementId::new(42));
        assert_eq!(doc.focused(), None);

        let child = doc.append_child(doc.root(), "button");
        doc.focus(child);
        assert_eq!(doc.focused(), Some(child));
    }
}
