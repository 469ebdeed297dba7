//! Static checks for filter scripts.
//!
//! The validator is stricter than the evaluator: it reports lines outside
//! of any block, blocks without conditions, and malformed numeric or color
//! arguments that the evaluator would silently ignore. It never evaluates
//! an item.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::ast::{ConditionType, Operator, Visibility};
use super::lexer::{has_quotes, numbered_lines, split_keyword, strip_comment};
use super::style::EffectColor;

/// Smallest font size the game client accepts.
pub const MIN_FONT_SIZE: i64 = 18;

/// Largest font size the game client accepts.
pub const MAX_FONT_SIZE: i64 = 45;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

const COLOR_DIRECTIVES: [&str; 3] = ["SetTextColor", "SetBorderColor", "SetBackgroundColor"];

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A diagnostic attached to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

impl ValidationError {
    /// Creates an error-severity diagnostic.
    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.severity, self.message)
    }
}

/// Result of validating a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True if no error-severity diagnostic was produced. Warnings alone
    /// keep a filter valid; see [`ValidationReport::is_valid_strict`].
    pub is_valid: bool,
    /// Diagnostics of both severities, in line order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Builds a report from diagnostics.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        let is_valid = !errors.iter().any(ValidationError::is_error);
        Self { is_valid, errors }
    }

    /// Returns true if no error-severity diagnostic was produced.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns true only if there are no diagnostics at all, treating
    /// warnings as failures.
    pub fn is_valid_strict(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.errors.len() - self.error_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    OutsideBlock,
    InsideBlock { has_condition: bool },
}

/// Validates a filter script.
///
/// # Example
///
/// ```
/// use poe_filter_rs::filter::validate_filter;
///
/// let report = validate_filter("Show\n    Rarity Unique\n    SetFontSize 10\n");
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].line, 3);
/// ```
pub fn validate_filter(filter_text: &str) -> ValidationReport {
    let mut errors = Vec::new();
    let mut state = BlockState::OutsideBlock;
    let mut last_line = 0;

    for (number, raw) in numbered_lines(filter_text) {
        last_line = number;

        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        if Visibility::from_keyword(raw).is_some() {
            if state == (BlockState::InsideBlock { has_condition: false }) {
                errors.push(ValidationError::error(
                    number - 1,
                    "Previous block has no conditions",
                ));
            }
            state = BlockState::InsideBlock {
                has_condition: false,
            };
            continue;
        }

        match &mut state {
            BlockState::OutsideBlock => {
                errors.push(ValidationError::error(
                    number,
                    "Line must be inside Show/Hide block",
                ));
            }
            BlockState::InsideBlock { has_condition } => {
                if is_condition_line(line) {
                    *has_condition = true;
                }
            }
        }

        validate_line(number, line, &mut errors);
    }

    if state == (BlockState::InsideBlock { has_condition: false }) {
        errors.push(ValidationError::error(
            last_line,
            "Final block has no conditions",
        ));
    }

    let report = ValidationReport::new(errors);
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated filter"
    );
    report
}

/// Returns true if the line starts with a condition keyword.
fn is_condition_line(line: &str) -> bool {
    split_keyword(line).is_some_and(|(keyword, _)| keyword.parse::<ConditionType>().is_ok())
}

/// Checks the arguments of a single comment-free line.
fn validate_line(number: usize, line: &str, errors: &mut Vec<ValidationError>) {
    let Some((keyword, rest)) = split_keyword(line) else {
        return;
    };

    match keyword {
        "Show" | "Hide" if rest.is_empty() => errors.push(ValidationError::warning(
            number,
            format!("{keyword} followed by a comment does not start a block; put the comment on its own line"),
        )),
        "BaseType" | "Class" => validate_string_values(number, keyword, rest, errors),
        "SetFontSize" => validate_font_size(number, rest, errors),
        "PlayEffect" => validate_effect(number, rest, errors),
        _ if COLOR_DIRECTIVES.contains(&keyword) => validate_color(number, keyword, rest, errors),
        _ => {
            if let Ok(condition_type) = keyword.parse::<ConditionType>() {
                if condition_type.is_numeric() {
                    validate_numeric_condition(number, keyword, rest, errors);
                }
            }
        }
    }
}

/// `<keyword> <operator> <integer >= 0>`
fn validate_numeric_condition(
    number: usize,
    keyword: &str,
    rest: &str,
    errors: &mut Vec<ValidationError>,
) {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let [operator, value, extra @ ..] = tokens.as_slice() else {
        errors.push(ValidationError::error(
            number,
            format!("{keyword} requires an operator and a value"),
        ));
        return;
    };

    if operator.parse::<Operator>().is_err() {
        errors.push(ValidationError::error(
            number,
            format!("Invalid operator '{operator}' for {keyword}"),
        ));
    }

    match value.parse::<i64>() {
        Ok(n) if n < 0 => errors.push(ValidationError::error(
            number,
            format!("{keyword} value must not be negative"),
        )),
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::error(
            number,
            format!("{keyword} value must be a number, got '{value}'"),
        )),
    }

    if !extra.is_empty() {
        errors.push(ValidationError::error(
            number,
            format!("{keyword} takes a single value"),
        ));
    }
}

/// `Set*Color <r> <g> <b> [a]`, each 0-255.
fn validate_color(number: usize, keyword: &str, rest: &str, errors: &mut Vec<ValidationError>) {
    let values: Vec<&str> = rest.split_whitespace().collect();

    if !(3..=4).contains(&values.len()) {
        errors.push(ValidationError::error(
            number,
            format!("{keyword} requires 3 or 4 values (R G B [A])"),
        ));
    }

    for value in values {
        if !value.parse::<i64>().is_ok_and(|v| (0..=255).contains(&v)) {
            errors.push(ValidationError::error(
                number,
                format!("Invalid color value '{value}' in {keyword} (must be 0-255)"),
            ));
        }
    }
}

fn validate_font_size(number: usize, rest: &str, errors: &mut Vec<ValidationError>) {
    let in_range = rest
        .split_whitespace()
        .next()
        .and_then(|size| size.parse::<i64>().ok())
        .is_some_and(|size| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size));

    if !in_range {
        errors.push(ValidationError::error(
            number,
            format!("Font size must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}"),
        ));
    }
}

/// Unquoted multi-word values are read as alternatives, which is rarely
/// what the author meant.
fn validate_string_values(
    number: usize,
    keyword: &str,
    rest: &str,
    errors: &mut Vec<ValidationError>,
) {
    let value = match split_keyword(rest) {
        Some((first, remainder)) if !remainder.is_empty() && first.parse::<Operator>().is_ok() => {
            remainder
        }
        _ => rest,
    };

    if !has_quotes(value) && value.split_whitespace().count() > 1 {
        errors.push(ValidationError::warning(
            number,
            format!("Multiple values should be in quotes ({keyword})"),
        ));
    }
}

fn validate_effect(number: usize, rest: &str, errors: &mut Vec<ValidationError>) {
    let Some(name) = rest.split_whitespace().next() else {
        errors.push(ValidationError::error(
            number,
            "PlayEffect requires a color",
        ));
        return;
    };

    if name.parse::<EffectColor>().is_ok() {
        return;
    }

    let message = match suggest_effect_color(name) {
        Some(suggestion) => {
            format!("Invalid effect color '{name}' (did you mean '{suggestion}'?)")
        }
        None => format!("Invalid effect color '{name}'"),
    };
    errors.push(ValidationError::error(number, message));
}

/// Finds the palette name closest to a misspelled one.
fn suggest_effect_color(name: &str) -> Option<&'static str> {
    EffectColor::ALL
        .iter()
        .map(|color| {
            let score = strsim::jaro_winkler(&name.to_lowercase(), &color.name().to_lowercase());
            (color.name(), score)
        })
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}
