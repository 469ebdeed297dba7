//! Preview output formatting.

use owo_colors::OwoColorize;
use poe_filter_rs::filter::{FilterContext, ItemStyle};
use serde::Serialize;

use super::helpers::{format_beam, format_color};

/// JSON output structure for the preview command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutput<'a> {
    pub item: &'a FilterContext,
    pub result: &'a ItemStyle,
}

/// Formats a preview result as JSON.
pub fn format_preview_json(
    item: &FilterContext,
    result: &ItemStyle,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PreviewOutput { item, result })
}

/// Formats a preview result for humans.
pub fn format_preview_table(item: &FilterContext, result: &ItemStyle, use_colors: bool) -> String {
    let mut output = String::new();

    let title = if item.base_type.trim().is_empty() {
        "(no base type)".to_string()
    } else {
        item.base_type.clone()
    };
    let (visibility, matched) = match (result.is_hidden, result.matched_line) {
        (true, Some(line)) => ("Hidden", format!("block at line {line}")),
        (false, Some(line)) => ("Shown", format!("block at line {line}")),
        (_, None) => ("Shown", "no block matched, default style".to_string()),
    };

    if use_colors {
        let rendered = if result.is_hidden {
            visibility.red().bold().to_string()
        } else {
            visibility.green().bold().to_string()
        };
        output.push_str(&format!("{}: {}\n", title.bold(), rendered));
        output.push_str(&format!("{}\n\n", matched.dimmed()));
    } else {
        output.push_str(&format!("{title}: {visibility}\n"));
        output.push_str(&format!("{matched}\n\n"));
    }

    let style = &result.style;
    let rows = [
        ("Font size", style.font_size.to_string()),
        ("Text", format_color(&style.text_color, use_colors)),
        ("Border", format_color(&style.border_color, use_colors)),
        ("Background", format_color(&style.background_color, use_colors)),
        ("Beam", format_beam(style.beam, use_colors)),
    ];
    for (label, value) in rows {
        output.push_str(&format!("  {:<12}{}\n", label, value));
    }

    output
}
