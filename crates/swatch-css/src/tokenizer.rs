//! Top-level comma splitting for CSS component values.
//!
//! [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
//!
//! A full tokenizer is not needed here: computed values are already
//! normalised by the browser, and the only structure that matters is whether a
//! comma sits inside a function's parentheses. `rgba(1,2,3,0.5), #fff` is two
//! values; the commas inside `rgba(...)` are not separators. Quoted strings
//! (`"Foo, Bar"` in a font list, `url("a,b.png")`) are opaque as well.

/// Split `value` on commas that are not nested inside parentheses.
///
/// Segments are trimmed and empty segments dropped. Unbalanced input never
/// fails: a stray `)` cannot take the depth below zero, and an unclosed `(`
/// keeps the rest of the input in the last segment.
#[must_use]
pub fn split_top_level(value: &str) -> Vec<String> {
    split_at_depth_zero(value, |c| c == ',')
}

/// Split a space-separated component list such as the computed
/// `border-color` value `rgb(0, 0, 0) rgb(255, 0, 0)`.
///
/// Whitespace inside function parentheses is kept.
#[must_use]
pub fn split_components(value: &str) -> Vec<String> {
    split_at_depth_zero(value, char::is_whitespace)
}

fn split_at_depth_zero(value: &str, is_separator: impl Fn(char) -> bool) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;

    for c in value.chars() {
        match c {
            _ if quote.is_some() => {
                if quote == Some(c) {
                    quote = None;
                }
                current.push(c);
            }
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            _ if depth == 0 && is_separator(c) => {
                push_segment(&mut segments, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_segment(&mut segments, &current);

    segments
}

fn push_segment(segments: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}
