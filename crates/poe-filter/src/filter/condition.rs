//! Parser for condition lines.
//!
//! # Grammar
//!
//! ```text
//! condition   ::= string_cond | numeric_cond
//! string_cond ::= ("Class" | "BaseType" | "Rarity") [operator] value_expr
//! numeric_cond::= numeric_kw operator digits
//! numeric_kw  ::= "AreaLevel" | "ItemLevel" | "DropLevel" | "StackSize"
//!               | "Quality" | "Sockets" | "WaystoneTier"
//! operator    ::= "=" | "==" | ">" | "<" | ">=" | "<="
//! value_expr  ::= ('"' text '"')+ | word+
//! ```

use super::ast::{ConditionType, ConditionValue, FilterCondition, Operator};
use super::lexer::{parse_value_expression, split_keyword};

/// Parses a comment-free line into a condition.
///
/// Returns `None` when the line is not a condition. This is not an error:
/// callers go on to try the style parser.
///
/// # Example
///
/// ```
/// use poe_filter_rs::filter::{parse_condition, ConditionType, ConditionValue, Operator};
///
/// let condition = parse_condition("AreaLevel >= 68").unwrap();
/// assert_eq!(condition.condition_type, ConditionType::AreaLevel);
/// assert_eq!(condition.operator, Operator::GreaterOrEqual);
/// assert_eq!(condition.value, ConditionValue::Number(68));
///
/// // Numeric conditions require an operator.
/// assert!(parse_condition("AreaLevel 68").is_none());
/// ```
pub fn parse_condition(line: &str) -> Option<FilterCondition> {
    let (keyword, rest) = split_keyword(line)?;
    let condition_type: ConditionType = keyword.parse().ok()?;

    if condition_type.is_numeric() {
        parse_numeric_condition(condition_type, rest)
    } else {
        parse_string_condition(condition_type, rest)
    }
}

/// Parses `[operator] value_expr` for `Class`, `BaseType` and `Rarity`.
fn parse_string_condition(condition_type: ConditionType, rest: &str) -> Option<FilterCondition> {
    let (first, remainder) = split_keyword(rest)?;

    // An operator only counts when a value follows it.
    let (operator, value_text) = match first.parse::<Operator>() {
        Ok(operator) if !remainder.is_empty() => (operator, remainder),
        _ => (Operator::default(), rest),
    };

    let value = parse_value_expression(value_text)?;
    Some(FilterCondition::new(condition_type, operator, value))
}

/// Parses exactly `operator digits` for numeric keywords.
fn parse_numeric_condition(condition_type: ConditionType, rest: &str) -> Option<FilterCondition> {
    let mut tokens = rest.split_whitespace();
    let (Some(operator), Some(digits), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };

    let operator: Operator = operator.parse().ok()?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = match digits.parse::<i64>() {
        Ok(number) => ConditionValue::Number(number),
        Err(_) => ConditionValue::Malformed(digits.to_string()),
    };
    Some(FilterCondition::new(condition_type, operator, value))
}
