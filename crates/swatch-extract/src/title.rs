//! Page title resolution.

use swatch_dom::{ElementStyle, StyleSnapshot};

/// Title reported when no source yields any text.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Resolve a human-readable page title.
///
/// # Algorithm
///
/// STEP 1: `document.title`, i.e. the text of the `<title>` element.
///
/// STEP 2: The Open Graph `og:title` meta tag.
///
/// STEP 3: The text content of the first `<h1>` in document order.
///
/// STEP 4: [`UNKNOWN_TITLE`].
///
/// A source that is present but blank is skipped.
#[must_use]
pub fn extract_title<S: StyleSnapshot + ?Sized>(snapshot: &S) -> String {
    // STEP 1
    let from_title = snapshot.document_title();
    // STEP 2
    let from_meta = || snapshot.meta_content("og:title");
    // STEP 3
    let from_heading = || {
        snapshot
            .elements()
            .find(|element| element.tag_name() == "h1")
            .and_then(ElementStyle::text_content)
    };

    non_blank(from_title)
        .or_else(|| non_blank(from_meta()))
        .or_else(|| non_blank(from_heading()))
        // STEP 4
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}
