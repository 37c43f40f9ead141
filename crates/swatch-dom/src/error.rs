//! Snapshot error types.

/// Failure to read one property of one element.
///
/// Never fatal: the extraction walk skips the property and continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The snapshot did not capture this property.
    #[error("property '{0}' was not captured")]
    Missing(String),
    /// The page threw while resolving this property.
    #[error("property '{0}' could not be read")]
    Unreadable(String),
}

/// Failure to build a snapshot from its wire format.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The payload is not valid snapshot JSON.
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An element names a parent that does not precede it in document order.
    #[error("element {index} names parent {parent}, which does not precede it")]
    DanglingParent {
        /// Position of the offending element.
        index: usize,
        /// The parent index it named.
        parent: usize,
    },
}
