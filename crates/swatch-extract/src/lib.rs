//! Design-token extraction over a rendered-page snapshot.
//!
//! # Scope
//!
//! Every extractor is a pure function of a [`StyleSnapshot`]:
//! - **Colors** - palette from color-bearing computed properties
//! - **Gradients** - gradient layers of `background-image`
//! - **Typography** - text styles grouped by tag and font properties, plus
//!   stylesheet statistics
//! - **Title** - fallback chain over the document title sources
//!
//! The extractors never fail. Values they cannot read are skipped and
//! reported once through [`swatch_common::warning::warn_once`].
//!
//! # Example
//!
//! ```
//! use swatch_dom::{DocumentSnapshot, ElementData, NodeId};
//!
//! let mut snapshot = DocumentSnapshot::new();
//! let _ = snapshot.push(NodeId::ROOT, ElementData::new("p").with_style("color", "rgb(255, 0, 0)"));
//!
//! let tokens = swatch_extract::extract_all(&snapshot);
//! assert_eq!(tokens.colors[0].hex, "#ff0000");
//! assert_eq!(tokens.title, "Unknown Title");
//! ```

pub mod colors;
pub mod gradients;
pub mod title;
pub mod typography;

use serde::Serialize;
use swatch_common::warning::clear_warnings;
use swatch_css::GradientRecord;
use swatch_dom::StyleSnapshot;

pub use colors::{COLOR_PROPERTIES, ColorRecord, extract_colors};
pub use gradients::{GRADIENT_PROPERTIES, extract_gradients};
pub use title::{UNKNOWN_TITLE, extract_title};
pub use typography::{
    CssMeta, GroupingPolicy, TypographyGroup, TypographyReport, extract_typography,
    extract_typography_with,
};

/// Every computed property any extractor reads, without duplicates.
///
/// A capture only needs to serialise these.
#[must_use]
pub fn captured_properties() -> Vec<&'static str> {
    let mut properties: Vec<&'static str> = Vec::new();
    for property in COLOR_PROPERTIES
        .iter()
        .chain(GRADIENT_PROPERTIES)
        .chain(typography::TYPOGRAPHY_PROPERTIES.iter())
    {
        if !properties.contains(property) {
            properties.push(*property);
        }
    }
    properties
}

/// All tokens extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignTokens {
    /// Resolved page title.
    pub title: String,
    /// Text styles, largest first.
    pub typography: Vec<TypographyGroup>,
    /// Stylesheet and element statistics.
    pub meta: CssMeta,
    /// Palette, darkest first.
    pub colors: Vec<ColorRecord>,
    /// Distinct gradients in document order.
    pub gradients: Vec<GradientRecord>,
}

/// A finished report: the tokens plus the page they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignReport {
    /// URL the snapshot was captured from.
    pub url: String,
    /// Extracted tokens.
    pub tokens: DesignTokens,
}

/// Run every extractor with the default grouping policy.
#[must_use]
pub fn extract_all<S: StyleSnapshot + ?Sized>(snapshot: &S) -> DesignTokens {
    extract_all_with(snapshot, GroupingPolicy::default())
}

/// Run every extractor, grouping typography under `policy`.
///
/// Each call starts a fresh warning pass, so a value that was reported for
/// one page is reported again for the next. The warning set is process-wide:
/// extractions running concurrently reset each other's deduplication and may
/// repeat a warning.
#[must_use]
pub fn extract_all_with<S: StyleSnapshot + ?Sized>(
    snapshot: &S,
    policy: GroupingPolicy,
) -> DesignTokens {
    clear_warnings();

    let TypographyReport { typography, meta } = extract_typography_with(snapshot, policy);
    DesignTokens {
        title: extract_title(snapshot),
        typography,
        meta,
        colors: extract_colors(snapshot),
        gradients: extract_gradients(snapshot),
    }
}
