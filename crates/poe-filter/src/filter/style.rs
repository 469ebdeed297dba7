//! Visual styling of filtered items.
//!
//! Style lines (`SetTextColor`, `SetBorderColor`, `SetBackgroundColor`,
//! `SetFontSize`, `PlayEffect`) are parsed leniently: anything malformed is
//! ignored rather than reported. Any integer is accepted; range checks live
//! in the validator.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::{FilterError, FilterResult};

/// Font size applied when no `SetFontSize` directive is present.
pub const DEFAULT_FONT_SIZE: i64 = 32;

/// Alpha value meaning fully opaque.
const OPAQUE_ALPHA: i64 = 255;

/// An RGB color with optional alpha, as written in `Set*Color` directives.
///
/// Channels are kept exactly as written, so an out-of-range value such as
/// `300` renders as `rgb(300, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: i64,
    /// Green channel.
    pub g: i64,
    /// Blue channel.
    pub b: i64,
    /// Alpha channel; `None` means fully opaque.
    pub alpha: Option<i64>,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Creates a color with alpha. An alpha of 255 is stored as opaque.
    pub const fn rgba(r: i64, g: i64, b: i64, alpha: i64) -> Self {
        let alpha = if alpha == OPAQUE_ALPHA { None } else { Some(alpha) };
        Self { r, g, b, alpha }
    }

    /// Parses the channel arguments of a color directive.
    ///
    /// Returns `None` unless there are exactly 3 or 4 values, each an
    /// integer.
    pub fn from_channels(values: &[&str]) -> Option<Self> {
        let channels = values
            .iter()
            .map(|v| v.parse::<i64>().ok())
            .collect::<Option<Vec<i64>>>()?;

        match channels.as_slice() {
            [r, g, b] => Some(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Some(Color::rgba(*r, *g, *b, *a)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    /// Formats as a CSS color, `rgb(r, g, b)` or `rgba(r, g, b, a)` with
    /// alpha scaled to 0-1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(alpha) => write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                alpha as f64 / OPAQUE_ALPHA as f64
            ),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Beam colors accepted by `PlayEffect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectColor {
    Yellow,
    White,
    Red,
    Green,
    Blue,
    Brown,
    Cyan,
    Grey,
    Orange,
    Pink,
    Purple,
}

impl EffectColor {
    /// Every palette entry.
    pub const ALL: [EffectColor; 11] = [
        EffectColor::Yellow,
        EffectColor::White,
        EffectColor::Red,
        EffectColor::Green,
        EffectColor::Blue,
        EffectColor::Brown,
        EffectColor::Cyan,
        EffectColor::Grey,
        EffectColor::Orange,
        EffectColor::Pink,
        EffectColor::Purple,
    ];

    /// Returns the palette name as written in a filter script.
    pub fn name(&self) -> &'static str {
        match self {
            EffectColor::Yellow => "Yellow",
            EffectColor::White => "White",
            EffectColor::Red => "Red",
            EffectColor::Green => "Green",
            EffectColor::Blue => "Blue",
            EffectColor::Brown => "Brown",
            EffectColor::Cyan => "Cyan",
            EffectColor::Grey => "Grey",
            EffectColor::Orange => "Orange",
            EffectColor::Pink => "Pink",
            EffectColor::Purple => "Purple",
        }
    }

    /// Returns the hex color used to render the beam.
    pub fn hex(&self) -> &'static str {
        match self {
            EffectColor::Yellow => "#FFD700",
            EffectColor::White => "#FFFFFF",
            EffectColor::Red => "#FF0000",
            EffectColor::Green => "#00FF00",
            EffectColor::Blue => "#0000FF",
            EffectColor::Brown => "#8B4513",
            EffectColor::Cyan => "#00FFFF",
            EffectColor::Grey => "#808080",
            EffectColor::Orange => "#FFA500",
            EffectColor::Pink => "#FFC0CB",
            EffectColor::Purple => "#800080",
        }
    }

    /// Returns the color as RGB channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(u8::MAX);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for EffectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectColor {
    type Err = FilterError;

    /// Names are case-sensitive.
    fn from_str(s: &str) -> FilterResult<Self> {
        EffectColor::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| FilterError::unknown_effect_color(s))
    }
}

impl Serialize for EffectColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// Accumulated visual directives of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStyle {
    /// `SetFontSize`
    pub font_size: i64,
    /// `SetTextColor`
    pub text_color: Color,
    /// `SetBorderColor`
    pub border_color: Color,
    /// `SetBackgroundColor`
    pub background_color: Color,
    /// `PlayEffect`; serialized as the palette hex value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam: Option<EffectColor>,
}

impl Default for FilterStyle {
    /// The look of an item no rule touched.
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            text_color: Color::rgb(158, 155, 138),
            border_color: Color::rgb(0, 0, 0),
            background_color: Color::rgb(0, 0, 0),
            beam: None,
        }
    }
}

impl FilterStyle {
    /// Merges one directive, overwriting the field it sets.
    pub fn apply(&mut self, directive: StyleDirective) {
        match directive {
            StyleDirective::FontSize(size) => self.font_size = size,
            StyleDirective::TextColor(color) => self.text_color = color,
            StyleDirective::BorderColor(color) => self.border_color = color,
            StyleDirective::BackgroundColor(color) => self.background_color = color,
            StyleDirective::Beam(color) => self.beam = Some(color),
        }
    }
}

/// A single style mutation parsed from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleDirective {
    /// `SetFontSize <n>`
    FontSize(i64),
    /// `SetTextColor <r> <g> <b> [a]`
    TextColor(Color),
    /// `SetBorderColor <r> <g> <b> [a]`
    BorderColor(Color),
    /// `SetBackgroundColor <r> <g> <b> [a]`
    BackgroundColor(Color),
    /// `PlayEffect <ColorName>`
    Beam(EffectColor),
}

/// Parses a style line into a directive.
///
/// Returns `None` if the line is not a recognized style directive or its
/// arguments are malformed.
///
/// # Example
///
/// ```
/// use poe_filter_rs::filter::{parse_style, Color, StyleDirective};
///
/// assert_eq!(
///     parse_style("SetTextColor 255 0 0"),
///     Some(StyleDirective::TextColor(Color::rgb(255, 0, 0)))
/// );
/// assert_eq!(parse_style("SetFontSize big"), None);
/// ```
pub fn parse_style(line: &str) -> Option<StyleDirective> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&keyword, args) = tokens.split_first()?;

    match keyword {
        "SetFontSize" => args
            .first()
            .and_then(|size| size.parse::<i64>().ok())
            .map(StyleDirective::FontSize),
        "SetTextColor" => Color::from_channels(args).map(StyleDirective::TextColor),
        "SetBorderColor" => Color::from_channels(args).map(StyleDirective::BorderColor),
        "SetBackgroundColor" => Color::from_channels(args).map(StyleDirective::BackgroundColor),
        "PlayEffect" => {
            // Temporary beams only flash on drop and are not part of the style.
            if args
                .get(1)
                .is_some_and(|flag| flag.eq_ignore_ascii_case("temp"))
            {
                return None;
            }
            let color = args
                .first()
                .and_then(|name| name.parse().ok())
                .unwrap_or(EffectColor::White);
            Some(StyleDirective::Beam(color))
        }
        _ => None,
    }
}
