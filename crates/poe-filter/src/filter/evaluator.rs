//! Block evaluation against an item.
//!
//! A filter is a sequence of `Show`/`Hide` blocks. Blocks are tried top to
//! bottom and the first one whose conditions all hold decides the item's
//! visibility and style, mirroring the game client's priority rule.
//!
//! # Example
//!
//! ```
//! use poe_filter_rs::filter::{get_item_style, FilterContext, FilterStyle};
//!
//! let filter = "Show\n    BaseType \"Chaos Orb\"\n    SetTextColor 255 0 0\nHide\n    Rarity = Normal\n";
//!
//! let result = get_item_style(filter, &FilterContext::new("Chaos Orb"));
//! assert!(!result.is_hidden);
//! assert_eq!(result.style.text_color.to_string(), "rgb(255, 0, 0)");
//!
//! let scroll = FilterContext::new("Scroll of Wisdom").with_rarity("Normal");
//! let result = get_item_style(filter, &scroll);
//! assert!(result.is_hidden);
//! assert_eq!(result.style, FilterStyle::default());
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use super::ast::{ConditionType, ConditionValue, FilterBlock, FilterCondition, Visibility};
use super::condition::parse_condition;
use super::context::FilterContext;
use super::lexer::{numbered_lines, strip_comment};
use super::style::{parse_style, FilterStyle, StyleDirective};

/// Item class spellings treated as synonyms for stackable currency.
const CURRENCY_ALIASES: [&str; 2] = ["currency", "stackable currency"];

/// What a single line inside a block turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A condition line.
    Condition(FilterCondition),
    /// A recognized style directive.
    Style(StyleDirective),
    /// Anything else (unknown directives, malformed style lines, blanks).
    Other,
}

/// Classifies a comment-free line.
///
/// The condition parser is tried first; lines starting with `Set` or
/// `Play` then go to the style parser. Everything else is `Other`.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(condition) = parse_condition(line) {
        return LineKind::Condition(condition);
    }

    if line.starts_with("Set") || line.starts_with("Play") {
        if let Some(directive) = parse_style(line) {
            return LineKind::Style(directive);
        }
    }

    LineKind::Other
}

/// Splits a filter into blocks, parsing each block's conditions and style.
///
/// Lines before the first `Show`/`Hide` keyword belong to no block and are
/// dropped.
pub fn parse_blocks(filter_text: &str) -> Vec<FilterBlock> {
    let mut blocks: Vec<FilterBlock> = Vec::new();

    for (number, raw) in numbered_lines(filter_text) {
        if let Some(visibility) = Visibility::from_keyword(raw) {
            blocks.push(FilterBlock::new(number, visibility));
            continue;
        }

        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        let Some(block) = blocks.last_mut() else {
            trace!(line = number, "skipping line outside of any block");
            continue;
        };

        match classify_line(line) {
            LineKind::Condition(condition) => block.conditions.push(condition),
            LineKind::Style(directive) => block.style.apply(directive),
            LineKind::Other => trace!(line = number, text = line, "ignoring unrecognized line"),
        }
    }

    blocks
}

/// Outcome of evaluating a filter against an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    /// True if the matching block is a `Hide` block.
    pub is_hidden: bool,
    /// Style of the matching block, or the default style.
    pub style: FilterStyle,
    /// Line of the matching block's keyword; `None` if no block matched.
    pub matched_line: Option<usize>,
}

impl ItemStyle {
    /// The result for an item no block matched: shown, default style.
    pub fn unmatched() -> Self {
        Self {
            is_hidden: false,
            style: FilterStyle::default(),
            matched_line: None,
        }
    }

    fn from_block(block: &FilterBlock) -> Self {
        Self {
            is_hidden: block.is_hide(),
            style: block.style.clone(),
            matched_line: Some(block.line),
        }
    }
}

/// Evaluates a filter script against an item.
///
/// Never fails: unparseable lines are ignored and conditions on missing
/// properties are false. An item without a base type is reported as shown
/// with the default style, without evaluating anything.
pub fn get_item_style(filter_text: &str, context: &FilterContext) -> ItemStyle {
    if !context.has_base_type() {
        return ItemStyle::unmatched();
    }
    FilterEvaluator::new(filter_text).evaluate(context)
}

/// A filter parsed once and evaluated against many items.
///
/// Useful when the same filter is applied to a batch of generated items;
/// for a single item, [`get_item_style`] is equivalent.
#[derive(Debug, Clone)]
pub struct FilterEvaluator {
    blocks: Vec<FilterBlock>,
}

impl FilterEvaluator {
    /// Parses the filter text.
    pub fn new(filter_text: &str) -> Self {
        Self {
            blocks: parse_blocks(filter_text),
        }
    }

    /// Returns the parsed blocks in file order.
    pub fn blocks(&self) -> &[FilterBlock] {
        &self.blocks
    }

    /// Returns the first block matching the item.
    pub fn matching_block(&self, context: &FilterContext) -> Option<&FilterBlock> {
        self.blocks.iter().find(|block| block.matches(context))
    }

    /// Resolves the visibility and style of an item.
    pub fn evaluate(&self, context: &FilterContext) -> ItemStyle {
        if !context.has_base_type() {
            return ItemStyle::unmatched();
        }

        match self.matching_block(context) {
            Some(block) => {
                debug!(
                    line = block.line,
                    visibility = %block.visibility,
                    base_type = %context.base_type,
                    "filter block matched item"
                );
                ItemStyle::from_block(block)
            }
            None => {
                debug!(base_type = %context.base_type, "no filter block matched item");
                ItemStyle::unmatched()
            }
        }
    }

    /// Returns the items the filter would show.
    pub fn visible_items<'b>(&self, items: &'b [FilterContext]) -> Vec<&'b FilterContext> {
        items
            .iter()
            .filter(|item| !self.evaluate(item).is_hidden)
            .collect()
    }
}

impl FilterBlock {
    /// Returns true if every condition holds. A catch-all block always matches.
    pub fn matches(&self, context: &FilterContext) -> bool {
        self.conditions.iter().all(|c| c.matches(context))
    }
}

impl FilterCondition {
    /// Evaluates the condition against an item.
    pub fn matches(&self, context: &FilterContext) -> bool {
        if self.condition_type.is_numeric() {
            self.matches_number(context)
        } else {
            self.matches_text(context)
        }
    }

    /// Case-insensitive equality against any alternative. The operator is
    /// not consulted for string properties.
    fn matches_text(&self, context: &FilterContext) -> bool {
        let Some(actual) = context.text(self.condition_type) else {
            return false;
        };
        let expected = self.value.strings();

        if self.condition_type == ConditionType::Class && context.is_stackable_currency() {
            return expected.iter().any(|value| {
                let value = value.trim();
                CURRENCY_ALIASES
                    .iter()
                    .any(|alias| value.eq_ignore_ascii_case(alias))
            });
        }

        let actual = actual.trim().to_lowercase();
        expected
            .iter()
            .any(|value| value.trim().to_lowercase() == actual)
    }

    fn matches_number(&self, context: &FilterContext) -> bool {
        let Some(actual) = context.number(self.condition_type) else {
            return false;
        };
        match self.value {
            ConditionValue::Number(expected) => self.operator.compare(actual, expected),
            _ => false,
        }
    }
}
