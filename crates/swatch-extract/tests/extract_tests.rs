//! Integration tests for the extractors, run against synthetic snapshots.

use quickcheck_macros::quickcheck;
use swatch_css::ColorValue;
use swatch_dom::{DocumentSnapshot, ElementData, NodeId, StylesheetSource};
use swatch_extract::typography::primary_family;
use swatch_extract::{
    GroupingPolicy, UNKNOWN_TITLE, captured_properties, extract_all, extract_colors,
    extract_gradients, extract_title, extract_typography, extract_typography_with,
};

/// A paragraph with the five grouping properties set.
fn paragraph(class_name: &str, size: &str) -> ElementData {
    ElementData::new("p")
        .with_class(class_name)
        .with_style("font-family", "\"Inter\", Helvetica, sans-serif")
        .with_style("font-size", size)
        .with_style("font-weight", "400")
        .with_style("line-height", "24px")
        .with_style("letter-spacing", "normal")
        .with_style("text-transform", "none")
        .with_style("font-style", "normal")
        .with_style("text-decoration", "none solid rgb(0, 0, 0)")
}

fn snapshot_of(elements: Vec<ElementData>) -> DocumentSnapshot {
    let mut snapshot = DocumentSnapshot::new();
    let body = snapshot.push(NodeId::ROOT, ElementData::new("body"));
    for element in elements {
        let _ = snapshot.push(body, element);
    }
    snapshot
}

// ========== Colors ==========

#[test]
fn test_colors_are_unique_and_sorted_by_luma() {
    let snapshot = snapshot_of(vec![
        ElementData::new("div")
            .with_style("color", "rgb(255, 255, 255)")
            .with_style("background-color", "rgb(0, 0, 0)"),
        ElementData::new("p")
            .with_style("color", "#FFF")
            .with_style("border-top-color", "rgb(255, 0, 0)"),
        ElementData::new("a").with_style("outline-color", "rgba(0, 0, 255, 0.5)"),
    ]);

    let colors = extract_colors(&snapshot);
    let hexes: Vec<&str> = colors.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(hexes, vec!["#000000", "#0000ff", "#ff0000", "#ffffff"]);
    assert_eq!(colors[0].name, "Black");
    assert_eq!(colors[3].rgb, "rgb(255, 255, 255)");
}

#[test]
fn test_colors_skip_non_colors() {
    let snapshot = snapshot_of(vec![
        ElementData::new("div")
            .with_style("color", "currentColor")
            .with_style("background-color", "rgba(0, 0, 0, 0)")
            .with_style("border-left-color", "TRANSPARENT")
            .with_style("outline-color", "  ")
            .with_style("text-decoration-color", "inherit"),
        ElementData::new("div")
            .with_style("color", "initial")
            .with_style("background-color", "none"),
    ]);

    assert!(extract_colors(&snapshot).is_empty());
}

#[test]
fn test_colors_skip_unparseable_values() {
    let snapshot = snapshot_of(vec![
        ElementData::new("div")
            .with_style("color", "hsl(120, 50%, 50%)")
            .with_style("background-color", "rgb(10, 20, 30)"),
    ]);

    let colors = extract_colors(&snapshot);
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex, "#0a141e");
}

#[test]
fn test_colors_split_border_color_sides() {
    let snapshot = snapshot_of(vec![ElementData::new("div").with_style(
        "border-color",
        "rgb(255, 0, 0) rgb(0, 128, 0) rgb(255, 0, 0) rgba(0, 0, 0, 0)",
    )]);

    let hexes: Vec<String> = extract_colors(&snapshot).into_iter().map(|c| c.hex).collect();
    // Green (luma 75.1) sorts just before red (luma 76.2).
    assert_eq!(hexes, vec!["#008000", "#ff0000"]);
}

#[test]
fn test_colors_skip_unreadable_properties() {
    let snapshot = snapshot_of(vec![
        ElementData::new("div")
            .with_style("color", "rgb(1, 2, 3)")
            .with_unreadable("color")
            .with_style("background-color", "rgb(4, 5, 6)"),
    ]);

    let colors = extract_colors(&snapshot);
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex, "#040506");
}

#[test]
fn test_colors_repeated_value_collapses() {
    let snapshot = snapshot_of(vec![
        ElementData::new("p").with_style("color", "rgb(10, 10, 10)"),
        ElementData::new("p").with_style("color", "rgb(10, 10, 10)"),
    ]);
    assert_eq!(extract_colors(&snapshot).len(), 1);
}

// ========== Gradients ==========

#[test]
fn test_gradients_are_deduplicated_by_endpoints() {
    let snapshot = snapshot_of(vec![
        ElementData::new("div").with_style(
            "background-image",
            "linear-gradient(45deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%)",
        ),
        ElementData::new("section").with_style(
            "background-image",
            "radial-gradient(rgb(255, 0, 0), rgb(0, 255, 0), rgb(0, 0, 255))",
        ),
        ElementData::new("div").with_style(
            "background-image",
            "linear-gradient(rgb(0, 0, 255), rgb(255, 0, 0)), url(\"a.png\")",
        ),
        ElementData::new("div").with_style("background-image", "none"),
    ]);

    let gradients = extract_gradients(&snapshot);
    assert_eq!(gradients.len(), 2);
    assert_eq!(gradients[0].endpoints(), ("#ff0000", "#0000ff"));
    assert_eq!(gradients[0].name, "Red to Blue");
    assert_eq!(gradients[0].kind.as_str(), "linear");
    assert_eq!(gradients[1].endpoints(), ("#0000ff", "#ff0000"));
}

#[test]
fn test_gradients_read_background_shorthand() {
    let snapshot = snapshot_of(vec![ElementData::new("div").with_style(
        "background",
        "rgba(0, 0, 0, 0) repeating-linear-gradient(rgb(0, 0, 0), rgb(255, 255, 255)) repeat scroll 0% 0%",
    )]);

    let gradients = extract_gradients(&snapshot);
    assert_eq!(gradients.len(), 1);
    assert_eq!(gradients[0].kind.as_str(), "repeating-linear");
}

// ========== Typography ==========

#[test]
fn test_typography_collapses_equal_styles_across_classes() {
    let snapshot = snapshot_of(vec![paragraph("intro", "16px"), paragraph("body", "16px")]);

    let report = extract_typography(&snapshot);
    assert_eq!(report.typography.len(), 1);
    assert_eq!(report.typography[0].count, 2);
    assert_eq!(report.typography[0].class_name, "intro");
    assert_eq!(report.meta.duplicates_removed, 1);
}

#[test]
fn test_typography_strict_policy_keeps_classes_apart() {
    let snapshot = snapshot_of(vec![paragraph("intro", "16px"), paragraph("body", "16px")]);

    let report = extract_typography_with(&snapshot, GroupingPolicy::Strict);
    assert_eq!(report.typography.len(), 2);
    assert_eq!(report.meta.duplicates_removed, 0);
}

#[test]
fn test_typography_non_key_properties_come_from_first_member() {
    let snapshot = snapshot_of(vec![
        paragraph("", "16px"),
        paragraph("", "16px").with_style("font-style", "italic"),
    ]);

    let core = extract_typography(&snapshot);
    assert_eq!(core.typography.len(), 1);
    assert_eq!(core.typography[0].font_style, "normal");

    let strict = extract_typography_with(&snapshot, GroupingPolicy::Strict);
    assert_eq!(strict.typography.len(), 2);
}

#[test]
fn test_typography_ignores_tags_outside_allowlist() {
    let snapshot = snapshot_of(vec![
        ElementData::new("script").with_style("font-size", "13px"),
        ElementData::new("img"),
        paragraph("", "16px"),
    ]);

    let report = extract_typography(&snapshot);
    assert!(!report.meta.tag_counts.contains_key("script"));
    assert!(!report.meta.tag_counts.contains_key("body"));
    assert!(report.typography.iter().all(|group| group.tag == "p"));
    assert_eq!(report.meta.total_tags_found, 1);
}

#[test]
fn test_typography_counts_partition_filtered_elements() {
    let snapshot = snapshot_of(vec![
        paragraph("", "16px"),
        paragraph("", "14px"),
        paragraph("", "16px"),
        ElementData::new("h1").with_style("font-size", "32px"),
        ElementData::new("span"),
        ElementData::new("nav"),
    ]);

    let report = extract_typography(&snapshot);
    let grouped: usize = report.typography.iter().map(|group| group.count).sum();
    let counted: usize = report.meta.tag_counts.values().sum();
    assert_eq!(grouped, 5);
    assert_eq!(counted, 5);
    assert_eq!(report.meta.tag_counts["p"], 3);
    assert_eq!(report.meta.total_tags_found, 3);
    assert_eq!(report.meta.duplicates_removed, 1);
}

#[test]
fn test_typography_sorted_by_font_size_unparseable_last() {
    let snapshot = snapshot_of(vec![
        ElementData::new("span").with_style("font-size", "medium"),
        paragraph("", "14px"),
        ElementData::new("h1").with_style("font-size", "32px"),
        ElementData::new("h2").with_style("font-size", "24.5px"),
        ElementData::new("em"),
    ]);

    let sizes: Vec<String> = extract_typography(&snapshot)
        .typography
        .into_iter()
        .map(|group| format!("{}:{}", group.tag, group.font_size))
        .collect();
    assert_eq!(sizes, vec!["h1:32px", "h2:24.5px", "p:14px", "span:medium", "em:"]);
}

#[test]
fn test_typography_primary_family() {
    assert_eq!(primary_family("\"Inter\", Helvetica, sans-serif"), "Inter");
    assert_eq!(primary_family("\"Foo, Bar\", serif"), "Foo, Bar");
    assert_eq!(primary_family("'Baz, Qux'"), "Baz, Qux");
    assert_eq!(primary_family("'Open Sans', serif"), "Open Sans");
    assert_eq!(primary_family("Georgia"), "Georgia");
    // An unclosed string runs to the end of the value.
    assert_eq!(primary_family("\"Mismatched', serif"), "\"Mismatched', serif");
    assert_eq!(primary_family(""), "");

    let snapshot = snapshot_of(vec![paragraph("", "16px")]);
    assert_eq!(extract_typography(&snapshot).typography[0].font_family, "Inter");
}

#[test]
fn test_typography_unreadable_property_is_left_empty() {
    let snapshot = snapshot_of(vec![paragraph("", "16px").with_unreadable("line-height")]);

    let group = &extract_typography(&snapshot).typography[0];
    assert_eq!(group.line_height, "");
    assert_eq!(group.font_size, "16px");
}

#[test]
fn test_css_meta_counts_stylesheets() {
    let mut snapshot = snapshot_of(vec![paragraph("", "16px")]);
    snapshot.add_stylesheet(
        StylesheetSource::External {
            href: "https://cdn.example.com/site.css".to_string(),
        },
        None,
    );
    snapshot.add_stylesheet(
        StylesheetSource::External {
            href: "/local.css".to_string(),
        },
        Some(40),
    );
    snapshot.add_stylesheet(StylesheetSource::Inline, Some(3));
    snapshot.add_stylesheet(StylesheetSource::Inline, Some(2));

    let meta = extract_typography(&snapshot).meta;
    assert_eq!(meta.external_css_count, 2);
    assert_eq!(meta.inline_css_count, 5);
    assert_eq!(meta.typography_rules_count, 45);
}

#[test]
fn test_css_meta_json_field_names() {
    let snapshot = snapshot_of(vec![paragraph("lead", "16px")]);
    let json = serde_json::to_value(extract_typography(&snapshot)).unwrap();

    let meta = &json["meta"];
    for key in [
        "externalCSSCount",
        "inlineCSSCount",
        "typographyRulesCount",
        "duplicatesRemoved",
        "tagCounts",
        "totalTagsFound",
    ] {
        assert!(meta.get(key).is_some(), "missing {key}");
    }

    let group = &json["typography"][0];
    assert_eq!(group["className"], "lead");
    assert_eq!(group["font-family"], "Inter");
    assert_eq!(group["letter-spacing"], "normal");
    assert_eq!(group["count"], 1);
}

// ========== Title ==========

#[test]
fn test_title_fallback_chain() {
    let mut snapshot = snapshot_of(vec![
        ElementData::new("h1").with_text("Heading"),
        ElementData::new("h1").with_text("Second heading"),
    ]);
    assert_eq!(extract_title(&snapshot), "Heading");

    snapshot.insert_meta("og:title", "Open Graph");
    assert_eq!(extract_title(&snapshot), "Open Graph");

    snapshot.set_title("  Document  ");
    assert_eq!(extract_title(&snapshot), "Document");
}

#[test]
fn test_title_skips_blank_sources() {
    let mut snapshot = snapshot_of(vec![ElementData::new("h1").with_text("Heading")]);
    snapshot.set_title("   ");
    snapshot.insert_meta("og:title", "");
    assert_eq!(extract_title(&snapshot), "Heading");
}

#[test]
fn test_title_unknown() {
    let snapshot = snapshot_of(vec![ElementData::new("h1")]);
    assert_eq!(extract_title(&snapshot), UNKNOWN_TITLE);
    assert_eq!(extract_title(&DocumentSnapshot::new()), "Unknown Title");
}

// ========== Whole pipeline ==========

#[test]
fn test_pipeline_is_deterministic() {
    let mut snapshot = snapshot_of(vec![
        paragraph("a", "16px").with_style("color", "rgb(20, 20, 20)"),
        paragraph("b", "18px").with_style("color", "rgb(200, 10, 10)"),
        ElementData::new("h1")
            .with_text("Hello")
            .with_style("font-size", "40px")
            .with_style("background-image", "linear-gradient(#fff, #000)"),
        ElementData::new("li").with_style("background-color", "rgb(240, 240, 240)"),
        ElementData::new("td"),
        ElementData::new("code"),
    ]);
    snapshot.add_stylesheet(StylesheetSource::Inline, Some(7));

    let first = serde_json::to_string(&extract_all(&snapshot)).unwrap();
    let second = serde_json::to_string(&extract_all(&snapshot)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pipeline_on_empty_snapshot() {
    let tokens = extract_all(&DocumentSnapshot::new());
    assert_eq!(tokens.title, UNKNOWN_TITLE);
    assert!(tokens.colors.is_empty());
    assert!(tokens.gradients.is_empty());
    assert!(tokens.typography.is_empty());
    assert_eq!(tokens.meta.total_tags_found, 0);
}

#[test]
fn test_captured_properties_cover_every_extractor() {
    let properties = captured_properties();
    for property in ["color", "border-color", "background-image", "font-family", "text-decoration"] {
        assert!(properties.contains(&property), "missing {property}");
    }
    let mut deduped = properties.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), properties.len());
}

#[quickcheck]
fn prop_palette_is_unique_and_luma_sorted(channels: Vec<(u8, u8, u8)>) -> bool {
    let snapshot = snapshot_of(
        channels
            .iter()
            .map(|(r, g, b)| ElementData::new("div").with_style("color", &format!("rgb({r}, {g}, {b})")))
            .collect(),
    );
    let colors = extract_colors(&snapshot);

    let mut hexes: Vec<&str> = colors.iter().map(|c| c.hex.as_str()).collect();
    let lumas: Vec<f64> = colors
        .iter()
        .filter_map(|c| ColorValue::parse(&c.hex))
        .map(|c| c.luma())
        .collect();
    let sorted = lumas.windows(2).all(|pair| pair[0] <= pair[1]);
    let total = hexes.len();
    hexes.sort_unstable();
    hexes.dedup();
    sorted && hexes.len() == total && lumas.len() == total
}

#[quickcheck]
fn prop_typography_counts_match_allowlisted_elements(sizes: Vec<u8>) -> bool {
    let elements: Vec<ElementData> = sizes
        .iter()
        .map(|size| paragraph("c", &format!("{size}px")))
        .collect();
    let report = extract_typography(&snapshot_of(elements));
    let total: usize = report.typography.iter().map(|group| group.count).sum();
    total == sizes.len() && report.typography.len() + report.meta.duplicates_removed == sizes.len()
}
