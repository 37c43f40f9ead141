//! Colored terminal rendering of a report.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use swatch_css::ColorValue;
use swatch_extract::{CssMeta, DesignReport};

const BLOCK: &str = "██";

/// Render `report` as a human-readable summary with truecolor swatches.
pub fn render(report: &DesignReport) -> String {
    let tokens = &report.tokens;
    let mut out = String::new();

    let _ = writeln!(out, "{}", tokens.title.bold());
    let _ = writeln!(out, "{}", report.url.dimmed());

    let _ = writeln!(out, "\n{} ({})", "Colors".bold().underline(), tokens.colors.len());
    for color in &tokens.colors {
        let _ = writeln!(
            out,
            "  {}  {}  {:<24} {}",
            swatch(&color.hex),
            color.hex,
            color.name,
            color.rgb.dimmed()
        );
    }

    let _ = writeln!(out, "\n{} ({})", "Gradients".bold().underline(), tokens.gradients.len());
    for gradient in &tokens.gradients {
        let strip: String = gradient.stops.iter().map(|stop| swatch(stop)).collect();
        let _ = writeln!(
            out,
            "  {strip}  {:<16} {}  {} -> {}",
            gradient.kind.as_str(),
            gradient.name,
            gradient.start.dimmed(),
            gradient.end.dimmed()
        );
    }

    let _ = writeln!(
        out,
        "\n{} ({} styles, {} duplicates removed)",
        "Typography".bold().underline(),
        tokens.typography.len(),
        tokens.meta.duplicates_removed
    );
    for group in &tokens.typography {
        let _ = writeln!(
            out,
            "  {} {:<24} {:>8} {:>5} {:>8}  x{}",
            format!("{:<10}", group.tag).bold(),
            group.font_family,
            group.font_size,
            group.font_weight,
            group.line_height,
            group.count
        );
    }

    let _ = writeln!(out, "\n{}", stylesheet_line(&tokens.meta).dimmed());
    out
}

fn stylesheet_line(meta: &CssMeta) -> String {
    format!(
        "{} external stylesheets, {} inline rules, {} rules total, {} text tags",
        meta.external_css_count,
        meta.inline_css_count,
        meta.typography_rules_count,
        meta.total_tags_found
    )
}

fn swatch(hex: &str) -> String {
    ColorValue::parse(hex).map_or_else(
        || BLOCK.to_string(),
        |color| BLOCK.truecolor(color.r, color.g, color.b).to_string(),
    )
}
