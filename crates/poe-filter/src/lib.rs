//! Path of Exile item-filter engine.
//!
//! This crate interprets loot-filter scripts the way the game client does:
//! given a filter and a description of an item it resolves whether the item
//! is shown and with which colors, font size and beam. It also validates
//! scripts statically.
//!
//! All entry points are pure functions; they never perform I/O and never
//! fail on malformed filter text.

pub mod filter;

pub use filter::{get_item_style, validate_filter, FilterContext, ItemStyle, ValidationReport};
