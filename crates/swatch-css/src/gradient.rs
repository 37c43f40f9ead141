//! Gradient parsing.
//!
//! [CSS Images Level 3 § 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
//!
//! ```text
//! linear-gradient() = linear-gradient(
//!   [ <angle> | to <side-or-corner> ]? ,
//!   <color-stop-list>
//! )
//! ```
//!
//! Only the colors matter for a palette: the orientation prelude is dropped,
//! each remaining argument contributes its leading color token, and the first
//! and last stops name the gradient.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::color::to_hex;
use crate::names::nearest_name;
use crate::tokenizer::split_top_level;

/// `<angle>` per [CSS Values § 7.1](https://www.w3.org/TR/css-values-4/#angles).
static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[+-]?(\d+\.?\d*|\.\d+)(deg|grad|rad|turn)$").expect("angle pattern is valid")
});

/// Leading color token of a color stop: hex, `rgb[a]()`, `hsl[a]()` or a bare word.
static COLOR_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(#[0-9a-f]{3,8}|rgba?\([^)]*\)|hsla?\([^)]*\)|[a-z]+)")
        .expect("color token pattern is valid")
});

/// Words that look like colors to the bare-word pattern but belong to the
/// gradient grammar: orientation, repetition, and the radial/conic
/// `<rg-ending-shape>`, `<rg-extent-keyword>` and `<position>` keywords.
const RESERVED_WORDS: &[&str] = &[
    "to", "at", "from", "deg", "rad", "grad", "turn", "repeat", "repeating", "linear", "radial",
    "conic", "circle", "ellipse", "closest", "farthest", "side", "corner", "center", "left",
    "right", "top", "bottom", "in",
];

/// Gradient function family.
///
/// Classification is by substring, checked in declaration order, so the
/// `repeating-` variants win over their plain counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    /// `repeating-linear-gradient()`
    RepeatingLinear,
    /// `repeating-radial-gradient()`
    RepeatingRadial,
    /// `repeating-conic-gradient()`
    RepeatingConic,
    /// `linear-gradient()`
    Linear,
    /// `radial-gradient()`
    Radial,
    /// `conic-gradient()`
    Conic,
    /// Anything else mentioning "gradient" (vendor or future syntax).
    Other,
}

impl GradientKind {
    const PRECEDENCE: [(&'static str, Self); 6] = [
        ("repeating-linear-gradient", Self::RepeatingLinear),
        ("repeating-radial-gradient", Self::RepeatingRadial),
        ("repeating-conic-gradient", Self::RepeatingConic),
        ("linear-gradient", Self::Linear),
        ("radial-gradient", Self::Radial),
        ("conic-gradient", Self::Conic),
    ];

    /// Classify a gradient value.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        let lowered = value.to_ascii_lowercase();
        Self::PRECEDENCE
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map_or(Self::Other, |&(_, kind)| kind)
    }

    /// Short name, e.g. `"linear"` or `"repeating-radial"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RepeatingLinear => "repeating-linear",
            Self::RepeatingRadial => "repeating-radial",
            Self::RepeatingConic => "repeating-conic",
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
            Self::Other => "other",
        }
    }
}

/// A usable gradient: at least two color stops, endpoints normalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientRecord {
    /// `"<start name> to <end name>"`
    pub name: String,
    /// Function family.
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// First stop as `#rrggbb`.
    pub start: String,
    /// Last stop as `#rrggbb`.
    pub end: String,
    /// Every stop as `#rrggbb`, in order.
    pub stops: Vec<String>,
}

impl GradientRecord {
    /// Identity used for deduplication.
    #[must_use]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.start, &self.end)
    }
}

/// Parse a single gradient function.
///
/// The arguments are the text between the first `(` after the word
/// `gradient` and the last `)`. Returns `None` when the value is not a
/// gradient, its parentheses are missing, or fewer than two color stops can
/// be read.
#[must_use]
pub fn parse_gradient(value: &str) -> Option<GradientRecord> {
    let value = value.trim();
    let function_start = value.to_ascii_lowercase().find("gradient")?;
    let kind = GradientKind::classify(value);

    // A `background` shorthand may put a color before the function.
    let open = function_start + value[function_start..].find('(')?;
    let close = value.rfind(')')?;
    if close <= open {
        return None;
    }
    let mut arguments = split_top_level(&value[open + 1..close]);

    if arguments.first().is_some_and(|first| is_orientation(first)) {
        let _ = arguments.remove(0);
    }

    let stops: Vec<&str> = arguments.iter().filter_map(|arg| leading_color(arg)).collect();
    if stops.len() < 2 {
        return None;
    }

    // Names come from the raw tokens so an unreadable stop is "Unknown",
    // not the name of the sentinel hex.
    let name = format!(
        "{} to {}",
        nearest_name(stops.first()?),
        nearest_name(stops.last()?)
    );
    let stops: Vec<String> = stops.into_iter().map(to_hex).collect();
    let start = stops.first()?.clone();
    let end = stops.last()?.clone();

    Some(GradientRecord {
        name,
        kind,
        start,
        end,
        stops,
    })
}

/// Parse every gradient layer of a property value such as
/// `linear-gradient(...), url(noise.png), radial-gradient(...)`.
#[must_use]
pub fn parse_gradients(value: &str) -> Vec<GradientRecord> {
    if !value.to_ascii_lowercase().contains("gradient") {
        return Vec::new();
    }
    split_top_level(value)
        .iter()
        .filter_map(|layer| parse_gradient(layer))
        .collect()
}

/// `to <side-or-corner>` or an `<angle>`.
fn is_orientation(segment: &str) -> bool {
    let segment = segment.trim();
    let lowered = segment.to_ascii_lowercase();
    lowered == "to" || lowered.starts_with("to ") || ANGLE_RE.is_match(segment)
}

/// Leading color token of a stop, unless it is a gradient keyword.
fn leading_color(segment: &str) -> Option<&str> {
    let token = COLOR_TOKEN_RE.find(segment.trim_start())?.as_str();
    let is_word = token.chars().all(|c| c.is_ascii_alphabetic());
    if is_word && RESERVED_WORDS.contains(&token.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(token)
}
