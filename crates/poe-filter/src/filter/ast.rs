//! Structured representation of filter lines and blocks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{FilterError, FilterResult};
use super::style::FilterStyle;

/// The item property a condition constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionType {
    // ==================== String Conditions ====================
    /// `Class` - the item class (e.g. "Stackable Currency").
    Class,

    /// `BaseType` - the item base type (e.g. "Chaos Orb").
    BaseType,

    /// `Rarity` - Normal, Magic, Rare or Unique.
    Rarity,

    // ==================== Numeric Conditions ====================
    /// `AreaLevel` - level of the area the item dropped in.
    AreaLevel,

    /// `ItemLevel` - the item's level.
    ItemLevel,

    /// `DropLevel` - the level at which the base type starts dropping.
    DropLevel,

    /// `StackSize` - size of a stack of currency.
    StackSize,

    /// `Quality` - item quality percentage.
    Quality,

    /// `Sockets` - number of sockets.
    Sockets,

    /// `WaystoneTier` - tier of a waystone.
    WaystoneTier,
}

impl ConditionType {
    /// Every condition keyword, in the order the syntax guide lists them.
    pub const ALL: [ConditionType; 10] = [
        ConditionType::Class,
        ConditionType::BaseType,
        ConditionType::AreaLevel,
        ConditionType::ItemLevel,
        ConditionType::DropLevel,
        ConditionType::Rarity,
        ConditionType::StackSize,
        ConditionType::Quality,
        ConditionType::Sockets,
        ConditionType::WaystoneTier,
    ];

    /// Returns the keyword as written in a filter script.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::Class => "Class",
            ConditionType::BaseType => "BaseType",
            ConditionType::Rarity => "Rarity",
            ConditionType::AreaLevel => "AreaLevel",
            ConditionType::ItemLevel => "ItemLevel",
            ConditionType::DropLevel => "DropLevel",
            ConditionType::StackSize => "StackSize",
            ConditionType::Quality => "Quality",
            ConditionType::Sockets => "Sockets",
            ConditionType::WaystoneTier => "WaystoneTier",
        }
    }

    /// Returns true for keywords compared as numbers.
    ///
    /// Numeric keywords require an explicit operator; string keywords
    /// default to `==`.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            ConditionType::Class | ConditionType::BaseType | ConditionType::Rarity
        )
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionType {
    type Err = FilterError;

    /// Keywords are case-sensitive, matching the game client.
    fn from_str(s: &str) -> FilterResult<Self> {
        ConditionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FilterError::unknown_keyword(s))
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Operator {
    /// `=`
    #[serde(rename = "=")]
    Assign,

    /// `==` (the default when a string condition omits the operator).
    #[default]
    #[serde(rename = "==")]
    Equal,

    /// `>`
    #[serde(rename = ">")]
    Greater,

    /// `<`
    #[serde(rename = "<")]
    Less,

    /// `>=`
    #[serde(rename = ">=")]
    GreaterOrEqual,

    /// `<=`
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl Operator {
    /// Returns the operator as written in a filter script.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Equal => "==",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
        }
    }

    /// Applies the operator as `actual <op> expected`.
    pub fn compare(&self, actual: i64, expected: i64) -> bool {
        match self {
            Operator::Assign | Operator::Equal => actual == expected,
            Operator::Greater => actual > expected,
            Operator::Less => actual < expected,
            Operator::GreaterOrEqual => actual >= expected,
            Operator::LessOrEqual => actual <= expected,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s {
            "=" => Ok(Operator::Assign),
            "==" => Ok(Operator::Equal),
            ">" => Ok(Operator::Greater),
            "<" => Ok(Operator::Less),
            ">=" => Ok(Operator::GreaterOrEqual),
            "<=" => Ok(Operator::LessOrEqual),
            _ => Err(FilterError::unknown_operator(s)),
        }
    }
}

/// The right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// A single string, e.g. `Rarity Unique`.
    Text(String),

    /// Alternatives, any of which may match, e.g. `BaseType "Chaos Orb" "Exalted Orb"`.
    List(Vec<String>),

    /// An integer threshold, e.g. `AreaLevel >= 68`.
    Number(i64),

    /// A numeric literal that could not be represented. Never matches.
    Malformed(String),
}

impl ConditionValue {
    /// Returns the string alternatives of a text or list value.
    pub fn strings(&self) -> &[String] {
        match self {
            ConditionValue::Text(value) => std::slice::from_ref(value),
            ConditionValue::List(values) => values,
            ConditionValue::Number(_) | ConditionValue::Malformed(_) => &[],
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Text(value) => write!(f, "\"{value}\""),
            ConditionValue::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "\"{value}\"")?;
                }
                Ok(())
            }
            ConditionValue::Number(value) => write!(f, "{value}"),
            ConditionValue::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// One constraint parsed from a condition line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCondition {
    /// The property being constrained.
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    /// The comparison operator.
    pub operator: Operator,
    /// The expected value.
    pub value: ConditionValue,
}

impl FilterCondition {
    /// Creates a new condition.
    pub fn new(condition_type: ConditionType, operator: Operator, value: ConditionValue) -> Self {
        Self {
            condition_type,
            operator,
            value,
        }
    }
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.condition_type, self.operator, self.value)
    }
}

/// Whether a matching block shows or hides the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    /// `Show`
    Show,
    /// `Hide`
    Hide,
}

impl Visibility {
    /// Parses a block keyword line. Only the exact words `Show` and `Hide` qualify.
    pub fn from_keyword(line: &str) -> Option<Self> {
        match line.trim() {
            "Show" => Some(Visibility::Show),
            "Hide" => Some(Visibility::Hide),
            _ => None,
        }
    }

    /// Returns the keyword as written in a filter script.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Show => "Show",
            Visibility::Hide => "Hide",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `Show`/`Hide` section with its conditions and accumulated style.
///
/// A block with no conditions is a catch-all and matches every item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBlock {
    /// The 1-based line number of the `Show`/`Hide` keyword.
    pub line: usize,
    /// Whether a matching item is shown or hidden.
    pub visibility: Visibility,
    /// Conditions, all of which must hold.
    pub conditions: Vec<FilterCondition>,
    /// Style applied to matching items.
    pub style: FilterStyle,
}

impl FilterBlock {
    /// Creates an empty block starting at `line`.
    pub fn new(line: usize, visibility: Visibility) -> Self {
        Self {
            line,
            visibility,
            conditions: Vec::new(),
            style: FilterStyle::default(),
        }
    }

    /// Returns true if the block has no conditions.
    pub fn is_catch_all(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns true if matching items are hidden.
    pub fn is_hide(&self) -> bool {
        self.visibility == Visibility::Hide
    }
}
