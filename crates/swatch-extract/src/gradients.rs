//! Gradient collection.
//!
//! Gradients only ever appear in image-valued properties, so each element's
//! `background-image` (and the `background` shorthand, for snapshots that
//! captured it) is handed to the gradient parser layer by layer.

use std::collections::HashSet;

use swatch_common::warning::warn_once;
use swatch_css::{GradientRecord, parse_gradients};
use swatch_dom::{StyleError, StyleSnapshot};

/// Properties that can hold a gradient.
pub const GRADIENT_PROPERTIES: &[&str] = &["background-image", "background"];

/// Collect every distinct gradient on the page, in document order.
///
/// Two gradients are the same when their first and last stops resolve to the
/// same colors; the first one seen is kept.
#[must_use]
pub fn extract_gradients<S: StyleSnapshot + ?Sized>(snapshot: &S) -> Vec<GradientRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut gradients = Vec::new();

    for element in snapshot.elements() {
        for property in GRADIENT_PROPERTIES {
            let value = match element.computed_value(property) {
                Ok(value) => value,
                Err(StyleError::Missing(_)) => continue,
                Err(error) => {
                    warn_once("gradient", &error.to_string());
                    continue;
                }
            };

            for gradient in parse_gradients(value) {
                let (start, end) = gradient.endpoints();
                let key = (start.to_string(), end.to_string());
                if seen.insert(key) {
                    gradients.push(gradient);
                }
            }
        }
    }

    log::debug!(target: "swatch", "collected {} gradients", gradients.len());
    gradients
}
