//! CSS value handling for the swatch extractor.
//!
//! # Scope
//!
//! This crate implements:
//! - **Color normalisation** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - `#rgb` / `#rrggbb` hex notations
//!   - legacy and modern `rgb()` / `rgba()` functions
//!   - nearest human-readable name over a fixed named-color dictionary
//!
//! - **Function splitting** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - top-level comma splitting that respects nested function parentheses
//!
//! - **Gradients** ([CSS Images Level 3 § 3](https://www.w3.org/TR/css-images-3/#gradients))
//!   - type classification, orientation detection, color-stop extraction
//!
//! # Not Yet Implemented
//!
//! - `hsl()`, `hwb()`, `lab()` and named keywords in the normaliser (browsers
//!   report computed colors as `rgb()`, so captured pages never need them)
//! - Stop positions and interpolation hints

/// Color values, normalisation and luma per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Gradient parsing per [CSS Images Level 3](https://www.w3.org/TR/css-images-3/#gradients).
pub mod gradient;
/// Named-color dictionary used for nearest-name lookup.
pub mod names;
/// Parenthesis-aware comma splitting.
pub mod tokenizer;

pub use color::{ColorValue, UNKNOWN_HEX, UNKNOWN_NAME, to_hex};
pub use gradient::{GradientKind, GradientRecord, parse_gradient, parse_gradients};
pub use names::{NAMED_COLORS, nearest_name, nearest_named};
pub use tokenizer::{split_components, split_top_level};
