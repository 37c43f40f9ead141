//! JSON wire format of a captured snapshot.
//!
//! This is what the in-page serialisation script returns and what
//! `swatch --save-snapshot` writes. Elements are listed in document order;
//! each names its parent by position, so a parent always precedes its
//! children.
//!
//! ```json
//! {
//!   "url": "https://example.com/",
//!   "title": "Example",
//!   "meta": { "og:title": "Example Domain" },
//!   "elements": [
//!     { "tag": "body", "className": "", "parent": null, "style": { "color": "rgb(0, 0, 0)" } },
//!     { "tag": "h1", "className": "hero", "parent": 0, "text": "Hello", "style": {} }
//!   ],
//!   "stylesheets": [ { "source": { "kind": "inline" }, "ruleCount": 12 } ]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{DocumentSnapshot, ElementData, NodeId, SnapshotError, StyleSnapshot, StylesheetInfo};

/// Top-level snapshot payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSnapshot {
    /// `location.href` at capture time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `document.title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta>` content keyed by `property` or `name`.
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    /// Elements in document order.
    #[serde(default)]
    pub elements: Vec<WireElement>,
    /// Stylesheet owners in document order.
    #[serde(default)]
    pub stylesheets: Vec<StylesheetInfo>,
}

/// One serialised element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireElement {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw `class` attribute.
    #[serde(default)]
    pub class_name: String,
    /// Position of the parent element, `None` for top-level elements.
    #[serde(default)]
    pub parent: Option<usize>,
    /// Trimmed text content, headings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Computed values keyed by hyphenated property name.
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    /// Properties whose read threw in the page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<String>,
}

impl DocumentSnapshot {
    /// Parse a snapshot from its JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed JSON and
    /// [`SnapshotError::DanglingParent`] when an element's parent does not
    /// precede it.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let wire: WireSnapshot = serde_json::from_str(json)?;
        Self::from_wire(wire)
    }

    /// Build a snapshot from an already-decoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::DanglingParent`] when an element's parent does
    /// not precede it.
    pub fn from_wire(wire: WireSnapshot) -> Result<Self, SnapshotError> {
        let mut snapshot = Self::new();
        if let Some(url) = &wire.url {
            snapshot.set_url(url);
        }
        if let Some(title) = &wire.title {
            snapshot.set_title(title);
        }
        for (key, content) in &wire.meta {
            snapshot.insert_meta(key, content);
        }
        for sheet in wire.stylesheets {
            snapshot.add_stylesheet(sheet.source, sheet.rule_count);
        }

        let mut ids: Vec<NodeId> = Vec::with_capacity(wire.elements.len());
        for (index, element) in wire.elements.into_iter().enumerate() {
            let parent = match element.parent {
                None => NodeId::ROOT,
                Some(parent) if parent < index => ids[parent],
                Some(parent) => return Err(SnapshotError::DanglingParent { index, parent }),
            };
            let data = ElementData {
                tag_name: element.tag.to_ascii_lowercase(),
                class_name: element.class_name,
                text: element.text,
                style: element.style,
                unreadable: element.unreadable.into_iter().collect(),
            };
            ids.push(snapshot.push(parent, data));
        }

        Ok(snapshot)
    }

    /// Convert back into the wire payload (document order).
    #[must_use]
    pub fn to_wire(&self) -> WireSnapshot {
        let order = self.iter_all();
        let positions: HashMap<NodeId, usize> = order
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();

        let elements = order
            .iter()
            .filter_map(|&id| {
                let data = self.as_element(id)?;
                let parent = self
                    .parent(id)
                    .and_then(|parent| positions.get(&parent).copied());
                Some(WireElement {
                    tag: data.tag_name.clone(),
                    class_name: data.class_name.clone(),
                    parent,
                    text: data.text.clone(),
                    style: data.style.clone(),
                    unreadable: data.unreadable.iter().cloned().collect(),
                })
            })
            .collect();

        WireSnapshot {
            url: self.url().map(str::to_string),
            title: self.document_title().map(str::to_string),
            meta: self.meta().clone(),
            elements,
            stylesheets: self.stylesheets().to_vec(),
        }
    }

    /// Serialise to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&self.to_wire())?)
    }
}
