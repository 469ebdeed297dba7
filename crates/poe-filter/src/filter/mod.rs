//! Interpreter and validator for Path of Exile item filters.
//!
//! This module evaluates a filter script against a description of an item,
//! answering whether the game client would show or hide it and how it would
//! be drawn. A separate validator reports problems in a script without
//! evaluating any item.
//!
//! # Supported Syntax
//!
//! ## Blocks
//! - `Show` / `Hide` - starts a block; a block runs until the next one
//! - `# ...` - comment to end of line
//!
//! ## Conditions
//! - `Class`, `BaseType`, `Rarity` - `[operator] "value" ["value" ...]`
//! - `AreaLevel`, `ItemLevel`, `DropLevel`, `StackSize`, `Quality`,
//!   `Sockets`, `WaystoneTier` - `operator number`
//!
//! ## Operators
//! - `=`, `==`, `>`, `<`, `>=`, `<=`
//!
//! ## Style
//! - `SetTextColor`, `SetBorderColor`, `SetBackgroundColor` - `r g b [a]`
//! - `SetFontSize` - `n`
//! - `PlayEffect` - `ColorName [Temp]`
//!
//! # Example
//!
//! ```
//! use poe_filter_rs::filter::{get_item_style, validate_filter, FilterContext};
//!
//! let filter = "Show\n    Class Currency\n    SetFontSize 40\n";
//!
//! let item = FilterContext::new("Chaos Orb").with_item_class("Stackable Currency");
//! let result = get_item_style(filter, &item);
//! assert!(!result.is_hidden);
//! assert_eq!(result.style.font_size, 40);
//!
//! assert!(validate_filter(filter).is_valid);
//! ```

mod ast;
mod condition;
mod context;
mod error;
mod evaluator;
mod lexer;
mod style;
mod validator;

pub use ast::{
    ConditionType, ConditionValue, FilterBlock, FilterCondition, Operator, Visibility,
};
pub use condition::parse_condition;
pub use context::{FilterContext, STACKABLE_CURRENCY};
pub use error::{FilterError, FilterResult};
pub use evaluator::{classify_line, get_item_style, parse_blocks, FilterEvaluator, ItemStyle, LineKind};
pub use style::{parse_style, Color, EffectColor, FilterStyle, StyleDirective, DEFAULT_FONT_SIZE};
pub use validator::{
    validate_filter, Severity, ValidationError, ValidationReport, MAX_FONT_SIZE, MIN_FONT_SIZE,
};



#[cfg(test)]
mod validator_tests;
