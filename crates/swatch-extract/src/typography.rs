//! Typography grouping and stylesheet statistics.
//!
//! [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
//!
//! Text-bearing elements are bucketed into equivalence classes by tag and a
//! set of font properties, so a page with three hundred identical paragraphs
//! reports one paragraph style with `count: 300`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use swatch_common::warning::warn_once;
use swatch_css::split_top_level;
use swatch_dom::{ElementStyle, StyleError, StyleSnapshot, StylesheetSource};

/// Tags that carry text worth describing. Everything else (`script`, `img`,
/// `svg`, layout wrappers other than `div`) is ignored entirely.
pub const TEXT_TAGS: &[&str] = &[
    "p",
    "span",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "a",
    "button",
    "label",
    "li",
    "th",
    "td",
    "caption",
    "blockquote",
    "figcaption",
    "cite",
    "q",
    "strong",
    "em",
    "small",
    "pre",
    "code",
    "div",
];

/// The typography properties read from every text element, in report order.
pub const TYPOGRAPHY_PROPERTIES: [&str; 8] = [
    "font-family",
    "font-size",
    "font-weight",
    "line-height",
    "letter-spacing",
    "text-transform",
    "font-style",
    "text-decoration",
];

/// How many of [`TYPOGRAPHY_PROPERTIES`] form the default grouping key.
const CORE_PROPERTY_COUNT: usize = 5;

/// Which properties decide that two elements share a style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupingPolicy {
    /// Tag plus `font-family`, `font-size`, `font-weight`, `line-height` and
    /// `letter-spacing`. The remaining properties of a group are those of
    /// its first element.
    #[default]
    Core,
    /// Tag, `class` attribute and all eight typography properties.
    Strict,
}

impl GroupingPolicy {
    fn key(self, tag: &str, class_name: &str, values: &[String; 8]) -> TypographyKey {
        match self {
            Self::Core => TypographyKey {
                tag: tag.to_string(),
                class_name: None,
                values: values[..CORE_PROPERTY_COUNT].to_vec(),
            },
            Self::Strict => TypographyKey {
                tag: tag.to_string(),
                class_name: Some(class_name.to_string()),
                values: values.to_vec(),
            },
        }
    }
}

/// Identity of a typography group under some [`GroupingPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypographyKey {
    tag: String,
    class_name: Option<String>,
    values: Vec<String>,
}

/// One distinct text style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypographyGroup {
    /// Tag of every member.
    pub tag: String,
    /// `class` attribute of the first member.
    #[serde(rename = "className")]
    pub class_name: String,
    /// First family of the `font-family` list, unquoted.
    pub font_family: String,
    /// Computed `font-size`, e.g. `"16px"`.
    pub font_size: String,
    /// Computed `font-weight`, e.g. `"400"`.
    pub font_weight: String,
    /// Computed `line-height`.
    pub line_height: String,
    /// Computed `letter-spacing`.
    pub letter_spacing: String,
    /// Computed `text-transform`.
    pub text_transform: String,
    /// Computed `font-style`.
    pub font_style: String,
    /// Computed `text-decoration`.
    pub text_decoration: String,
    /// Number of elements collapsed into this group.
    pub count: usize,
}

impl TypographyGroup {
    fn new(tag: &str, class_name: &str, values: [String; 8]) -> Self {
        let [
            font_family,
            font_size,
            font_weight,
            line_height,
            letter_spacing,
            text_transform,
            font_style,
            text_decoration,
        ] = values;
        Self {
            tag: tag.to_string(),
            class_name: class_name.to_string(),
            font_family,
            font_size,
            font_weight,
            line_height,
            letter_spacing,
            text_transform,
            font_style,
            text_decoration,
            count: 1,
        }
    }

    /// Leading number of `font-size`, or `NaN` when there is none.
    #[must_use]
    pub fn font_size_value(&self) -> f64 {
        leading_number(&self.font_size).unwrap_or(f64::NAN)
    }
}

/// Stylesheet and element statistics gathered alongside the groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssMeta {
    /// Number of `<link rel="stylesheet">` owners.
    #[serde(rename = "externalCSSCount")]
    pub external_css_count: usize,
    /// Rules in accessible `<style>` sheets.
    #[serde(rename = "inlineCSSCount")]
    pub inline_css_count: usize,
    /// Rules in every accessible sheet.
    pub typography_rules_count: usize,
    /// Elements beyond the first in every group.
    pub duplicates_removed: usize,
    /// Text elements per tag.
    pub tag_counts: BTreeMap<String, usize>,
    /// Distinct tags in `tag_counts`.
    pub total_tags_found: usize,
}

/// Output of [`extract_typography`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyReport {
    /// Groups, largest `font-size` first.
    pub typography: Vec<TypographyGroup>,
    /// Statistics.
    pub meta: CssMeta,
}

/// Group text elements with the default [`GroupingPolicy::Core`] policy.
#[must_use]
pub fn extract_typography<S: StyleSnapshot + ?Sized>(snapshot: &S) -> TypographyReport {
    extract_typography_with(snapshot, GroupingPolicy::default())
}

/// Group text elements under `policy`.
///
/// # Algorithm
///
/// STEP 1: Walk elements in document order, skipping tags outside
/// [`TEXT_TAGS`], and count each remaining tag.
///
/// STEP 2: Read the eight typography properties; a property whose read fails
/// is left empty.
///
/// STEP 3: The first element with a given key creates a group; later ones
/// increment its `count` and `duplicatesRemoved`.
///
/// STEP 4: Stably sort groups by descending `font-size`, unparseable sizes
/// last.
///
/// STEP 5: Count stylesheet rules, skipping inaccessible sheets.
#[must_use]
pub fn extract_typography_with<S: StyleSnapshot + ?Sized>(
    snapshot: &S,
    policy: GroupingPolicy,
) -> TypographyReport {
    let mut meta = CssMeta::default();
    let mut groups: Vec<TypographyGroup> = Vec::new();
    let mut index: HashMap<TypographyKey, usize> = HashMap::new();

    for element in snapshot.elements() {
        // STEP 1
        let tag = element.tag_name();
        if !TEXT_TAGS.contains(&tag) {
            continue;
        }
        *meta.tag_counts.entry(tag.to_string()).or_insert(0) += 1;

        // STEP 2
        let values = read_typography(element);

        // STEP 3
        let key = policy.key(tag, element.class_name(), &values);
        if let Some(&existing) = index.get(&key) {
            groups[existing].count += 1;
            meta.duplicates_removed += 1;
        } else {
            let _ = index.insert(key, groups.len());
            groups.push(TypographyGroup::new(tag, element.class_name(), values));
        }
    }
    meta.total_tags_found = meta.tag_counts.len();

    // STEP 4
    groups.sort_by(|a, b| descending_nan_last(a.font_size_value(), b.font_size_value()));

    // STEP 5
    for sheet in snapshot.stylesheets() {
        if matches!(sheet.source, StylesheetSource::External { .. }) {
            meta.external_css_count += 1;
        }
        let Some(rules) = sheet.rule_count else {
            log::debug!(target: "swatch", "skipping inaccessible stylesheet {:?}", sheet.source);
            continue;
        };
        meta.typography_rules_count += rules;
        if sheet.source == StylesheetSource::Inline {
            meta.inline_css_count += rules;
        }
    }

    log::debug!(
        target: "swatch",
        "grouped {} text elements into {} styles",
        meta.tag_counts.values().sum::<usize>(),
        groups.len()
    );
    TypographyReport {
        typography: groups,
        meta,
    }
}

fn read_typography(element: &dyn ElementStyle) -> [String; 8] {
    TYPOGRAPHY_PROPERTIES.map(|property| match element.computed_value(property) {
        Ok(value) if property == "font-family" => primary_family(value),
        Ok(value) => value.trim().to_string(),
        Err(StyleError::Missing(_)) => String::new(),
        Err(error) => {
            warn_once("typography", &error.to_string());
            String::new()
        }
    })
}

/// [§ 4.2 Font family: the font-family property](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// "a prioritized list of font family names and/or generic family names"
///
/// Only the first entry names the intended face. Matching single or double
/// quotes around it are removed.
#[must_use]
pub fn primary_family(value: &str) -> String {
    let entries = split_top_level(value);
    let first = entries.first().map_or("", String::as_str);
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&quote| first.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(first);
    unquoted.trim().to_string()
}

/// Leading floating-point number of a dimension such as `"18.5px"`.
fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().ok()
}

/// Larger first; `NaN` compares equal to `NaN` and after every number.
fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
