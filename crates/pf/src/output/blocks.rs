//! Block listing output formatting.

use owo_colors::OwoColorize;
use poe_filter_rs::filter::{FilterBlock, FilterStyle};
use serde::Serialize;

use super::helpers::{format_beam, format_color, format_visibility, truncate_str};

/// Longest condition text shown before truncation.
const MAX_CONDITION_WIDTH: usize = 60;

/// JSON output structure for the blocks command.
#[derive(Serialize)]
pub struct BlocksListOutput<'a> {
    pub blocks: &'a [FilterBlock],
}

/// Formats blocks as JSON.
pub fn format_blocks_json(blocks: &[FilterBlock]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BlocksListOutput { blocks })
}

/// Formats blocks as an indented listing.
pub fn format_blocks_table(blocks: &[FilterBlock], use_colors: bool) -> String {
    if blocks.is_empty() {
        return "No blocks found.\n".to_string();
    }

    let mut output = String::new();

    for block in blocks {
        let line = format!("{:>5}", block.line);
        let line = if use_colors {
            line.dimmed().to_string()
        } else {
            line
        };
        output.push_str(&format!(
            "{} {}\n",
            line,
            format_visibility(block.visibility, use_colors)
        ));

        if block.is_catch_all() {
            let note = "(matches every item)";
            if use_colors {
                output.push_str(&format!("        {}\n", note.italic()));
            } else {
                output.push_str(&format!("        {note}\n"));
            }
        }
        for condition in &block.conditions {
            output.push_str(&format!(
                "        {}\n",
                truncate_str(&condition.to_string(), MAX_CONDITION_WIDTH)
            ));
        }

        output.push_str(&format_style_summary(&block.style, use_colors));
    }

    output
}

/// Formats the style lines of a block that differ from the default.
fn format_style_summary(style: &FilterStyle, use_colors: bool) -> String {
    let default = FilterStyle::default();
    let mut output = String::new();

    if style.font_size != default.font_size {
        output.push_str(&format!("        -> font size {}\n", style.font_size));
    }
    let colors = [
        ("text", style.text_color, default.text_color),
        ("border", style.border_color, default.border_color),
        ("background", style.background_color, default.background_color),
    ];
    for (label, color, default_color) in colors {
        if color != default_color {
            output.push_str(&format!(
                "        -> {} {}\n",
                label,
                format_color(&color, use_colors)
            ));
        }
    }
    if style.beam.is_some() {
        output.push_str(&format!(
            "        -> beam {}\n",
            format_beam(style.beam, use_colors)
        ));
    }

    output
}
