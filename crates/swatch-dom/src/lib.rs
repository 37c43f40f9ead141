//! Rendered-document snapshots for the swatch extractor.
//!
//! This crate provides the single capability the extraction pipeline consumes
//! from a browser: a read-only view of a loaded page where every element
//! exposes its tag, its class list and the computed value of a named style
//! property.
//!
//! # Design
//!
//! - [`StyleSnapshot`] / [`ElementStyle`] are the capability traits. The
//!   extraction algorithms only ever see these, so they run unchanged against
//!   a live capture or a synthetic document built in a test.
//! - [`DocumentSnapshot`] is the concrete, arena-based implementation, using
//!   [`NodeId`] indices for all relationships.
//! - [`wire`] is the JSON format produced by the in-page serialisation script.

pub mod error;
pub mod snapshot;
pub mod wire;

pub use error::{SnapshotError, StyleError};
pub use snapshot::{
    DocumentSnapshot, ElementData, NodeId, NodeType, SnapshotNode, StylesheetInfo,
    StylesheetSource,
};

/// [CSSOM § 9 Extensions to the Window Interface](https://www.w3.org/TR/cssom-1/#extensions-to-the-window-interface)
///
/// One element of a rendered page, seen through `getComputedStyle()`.
pub trait ElementStyle {
    /// Lowercase local name, e.g. `"p"`.
    fn tag_name(&self) -> &str;

    /// Raw value of the `class` attribute (empty when absent).
    fn class_name(&self) -> &str;

    /// Trimmed text content, when the snapshot captured it for this element.
    fn text_content(&self) -> Option<&str>;

    /// "The getComputedStyle(elt, pseudoElt) method must run these steps..."
    ///
    /// Resolved value of `property` (hyphenated CSS name).
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] when the property was not captured or its read
    /// failed in the page. Callers skip just that property.
    fn computed_value(&self, property: &str) -> Result<&str, StyleError>;
}

/// A read-only view of a rendered page.
///
/// Elements are yielded in document order. Implementations must be
/// deterministic: two calls to [`StyleSnapshot::elements`] yield the same
/// sequence.
pub trait StyleSnapshot {
    /// All elements of the page in document order.
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn ElementStyle> + '_>;

    /// One entry per stylesheet owner (`<link rel="stylesheet">` or `<style>`).
    fn stylesheets(&self) -> &[StylesheetInfo];

    /// `document.title`, if the page has one.
    fn document_title(&self) -> Option<&str>;

    /// Content of the `<meta>` whose `property` or `name` equals `key`.
    fn meta_content(&self, key: &str) -> Option<&str>;
}
