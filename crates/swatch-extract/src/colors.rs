//! Color palette collection.
//!
//! [CSS Color Level 4 § 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-type)
//!
//! Every element contributes the computed values of its color-bearing
//! properties. Keywords that do not denote a concrete color are dropped, the
//! rest are normalised to `#rrggbb`, deduplicated, and ordered dark to light.

use std::collections::HashSet;

use serde::Serialize;
use swatch_common::warning::warn_once;
use swatch_css::{ColorValue, nearest_named, split_components};
use swatch_dom::{StyleError, StyleSnapshot};

/// Properties whose computed value is a `<color>`.
pub const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "outline-color",
    "text-decoration-color",
];

/// Values that carry no concrete color, compared with whitespace removed.
const NON_COLORS: &[&str] = &[
    "transparent",
    "none",
    "inherit",
    "initial",
    "currentcolor",
    "rgba(0,0,0,0)",
];

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRecord {
    /// Nearest dictionary name.
    pub name: String,
    /// `#rrggbb`, lowercase.
    pub hex: String,
    /// `rgb(R, G, B)`
    pub rgb: String,
}

impl ColorRecord {
    fn from_color(color: ColorValue) -> Self {
        Self {
            name: nearest_named(&color).to_string(),
            hex: color.to_hex_string(),
            rgb: color.to_rgb_string(),
        }
    }
}

/// Collect the page palette.
///
/// The result holds one record per distinct hex (first occurrence wins) and
/// is stably sorted by luma, darkest first.
#[must_use]
pub fn extract_colors<S: StyleSnapshot + ?Sized>(snapshot: &S) -> Vec<ColorRecord> {
    let mut seen = HashSet::new();
    let mut palette: Vec<ColorValue> = Vec::new();

    for element in snapshot.elements() {
        for property in COLOR_PROPERTIES {
            let value = match element.computed_value(property) {
                Ok(value) => value,
                Err(StyleError::Missing(_)) => continue,
                Err(error) => {
                    warn_once("color", &error.to_string());
                    continue;
                }
            };

            for candidate in color_candidates(property, value) {
                if is_non_color(&candidate) {
                    continue;
                }
                let Some(color) = ColorValue::parse(&candidate) else {
                    warn_once(
                        "color",
                        &format!("skipping unparseable {property} value '{candidate}'"),
                    );
                    continue;
                };
                let opaque = ColorValue { a: 255, ..color };
                if seen.insert(opaque) {
                    palette.push(opaque);
                }
            }
        }
    }

    palette.sort_by(|a, b| a.luma().total_cmp(&b.luma()));
    log::debug!(target: "swatch", "collected {} colors", palette.len());
    palette.into_iter().map(ColorRecord::from_color).collect()
}

/// The `border-color` shorthand computes to up to four space-separated
/// colors (one per side); every other property holds exactly one.
fn color_candidates(property: &str, value: &str) -> Vec<String> {
    if property == "border-color" {
        split_components(value)
    } else {
        vec![value.trim().to_string()]
    }
}

/// True for empty values and the keywords in [`NON_COLORS`].
fn is_non_color(value: &str) -> bool {
    let squashed: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    squashed.is_empty() || NON_COLORS.contains(&squashed.as_str())
}
