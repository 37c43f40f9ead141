//! Arena-based document snapshot.
//!
//! The tree stores every node in one contiguous vector and uses [`NodeId`]
//! indices for parent/child relationships, so a snapshot can be walked in any
//! direction without borrow checker issues.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{ElementStyle, StyleError, StyleSnapshot};

/// Position of a node in the snapshot arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// What a snapshot node holds. Text, comments and doctypes are never
/// captured, so only two kinds remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The root; carries no style.
    Document,
    /// A captured element.
    Element(ElementData),
}

/// A node plus its tree links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotNode {
    /// Document root or element.
    pub node_type: NodeType,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// In document order.
    pub children: Vec<NodeId>,
}

/// Everything the snapshot captured about one element.
///
/// Only the computed values of the properties the extractor reads are kept;
/// a capture never carries the full ~500 property declaration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase local name.
    pub tag_name: String,
    /// Raw `class` attribute.
    pub class_name: String,
    /// Trimmed text content (captured for headings only).
    pub text: Option<String>,
    /// Computed values keyed by hyphenated property name.
    pub style: BTreeMap<String, String>,
    /// Properties whose read threw in the page.
    pub unreadable: BTreeSet<String>,
}

impl ElementData {
    /// A bare element with the given tag (lowercased).
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }

    /// Set one computed property value.
    #[must_use]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        let _ = self.style.insert(property.to_string(), value.to_string());
        self
    }

    /// Set the captured text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Mark a property as unreadable.
    #[must_use]
    pub fn with_unreadable(mut self, property: &str) -> Self {
        let _ = self.unreadable.insert(property.to_string());
        self
    }
}

impl ElementStyle for ElementData {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn computed_value(&self, property: &str) -> Result<&str, StyleError> {
        if self.unreadable.contains(property) {
            return Err(StyleError::Unreadable(property.to_string()));
        }
        self.style
            .get(property)
            .map(String::as_str)
            .ok_or_else(|| StyleError::Missing(property.to_string()))
    }
}

/// The element that owns a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StylesheetSource {
    /// `<link rel="stylesheet">`
    External {
        /// Resolved `href`.
        href: String,
    },
    /// `<style>`
    Inline,
}

/// One stylesheet owner and its rule count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetInfo {
    /// Owner kind.
    pub source: StylesheetSource,
    /// `cssRules.length`, or `None` when the rules are not accessible
    /// (cross-origin sheets throw a `SecurityError`).
    pub rule_count: Option<usize>,
}

/// A captured page: element arena plus document-level metadata.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    /// All nodes, indexed by `NodeId`. The document node is at `NodeId::ROOT`.
    nodes: Vec<SnapshotNode>,
    /// URL the page was captured from.
    url: Option<String>,
    /// `document.title`
    title: Option<String>,
    /// `<meta>` content keyed by `property` or `name`.
    meta: BTreeMap<String, String>,
    /// Stylesheet owners in document order.
    stylesheets: Vec<StylesheetInfo>,
}

impl DocumentSnapshot {
    /// Create a snapshot holding just the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![SnapshotNode {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
            }],
            url: None,
            title: None,
            meta: BTreeMap::new(),
            stylesheets: Vec::new(),
        }
    }

    /// The node at `id`, if it exists.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SnapshotNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, including the document node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the snapshot holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Allocate a new element node. The node is not yet attached to the tree.
    pub fn alloc(&mut self, element: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SnapshotNode {
            node_type: NodeType::Element(element),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Link `child` as the last child of `parent`. Unknown ids are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let known = self.nodes.len();
        if parent.0 < known && child.0 < known {
            self.nodes[parent.0].children.push(child);
            self.nodes[child.0].parent = Some(parent);
        }
    }

    /// Allocate `element` and append it under `parent` in one step.
    pub fn push(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let id = self.alloc(element);
        self.append_child(parent, id);
        id
    }

    /// Parent of `id`; `None` for the root and unknown ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Children of `id` in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| &node.children)
    }

    /// Element data of `id`, unless it is the root.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.get(id)?.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Document => None,
        }
    }

    /// All element ids in document (pre-)order.
    #[must_use]
    pub fn iter_all(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            if self.as_element(id).is_some() {
                order.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// URL the page was captured from.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Record the URL the page was captured from.
    pub fn set_url(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    /// Record `document.title`.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Record one `<meta>` entry.
    pub fn insert_meta(&mut self, key: &str, content: &str) {
        let _ = self.meta.insert(key.to_string(), content.to_string());
    }

    /// All recorded `<meta>` entries.
    #[must_use]
    pub const fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    /// Record one stylesheet owner.
    pub fn add_stylesheet(&mut self, source: StylesheetSource, rule_count: Option<usize>) {
        self.stylesheets.push(StylesheetInfo { source, rule_count });
    }
}

impl Default for DocumentSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSnapshot for DocumentSnapshot {
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn ElementStyle> + '_> {
        Box::new(
            self.iter_all()
                .into_iter()
                .filter_map(|id| self.as_element(id))
                .map(|element| element as &dyn ElementStyle),
        )
    }

    fn stylesheets(&self) -> &[StylesheetInfo] {
        &self.stylesheets
    }

    fn document_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn meta_content(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}
