//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use poe_filter_rs::filter::{Color, EffectColor, Severity, Visibility};

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Clamps a filter color channel into the terminal's 0-255 range.
fn swatch_channel(value: i64) -> u8 {
    u8::try_from(value.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX)
}

/// Formats a color as its CSS string, preceded by a truecolor swatch.
///
/// The swatch clamps out-of-range channels; the text shows them as written.
pub fn format_color(color: &Color, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} {}",
            "  ".on_truecolor(
                swatch_channel(color.r),
                swatch_channel(color.g),
                swatch_channel(color.b)
            ),
            color
        )
    } else {
        color.to_string()
    }
}

/// Formats a beam as "Name (#HEX)", or "none".
pub fn format_beam(beam: Option<EffectColor>, use_colors: bool) -> String {
    let Some(beam) = beam else {
        return "none".to_string();
    };

    let label = format!("{} ({})", beam.name(), beam.hex());
    if use_colors {
        let (r, g, b) = beam.channels();
        label.truecolor(r, g, b).to_string()
    } else {
        label
    }
}

/// Formats a severity label.
pub fn format_severity(severity: Severity, use_colors: bool) -> String {
    let label = severity.to_string();
    if use_colors {
        match severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warning => label.yellow().to_string(),
        }
    } else {
        label
    }
}

/// Formats a block visibility keyword.
pub fn format_visibility(visibility: Visibility, use_colors: bool) -> String {
    let label = visibility.as_str();
    if use_colors {
        match visibility {
            Visibility::Show => label.green().to_string(),
            Visibility::Hide => label.dimmed().to_string(),
        }
    } else {
        label.to_string()
    }
}
