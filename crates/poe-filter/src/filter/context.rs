//! Description of the item a filter is evaluated against.

use serde::{Deserialize, Serialize};

use super::ast::ConditionType;

/// Item class that also answers to `Class Currency`.
pub const STACKABLE_CURRENCY: &str = "Stackable Currency";

/// The item being tested.
///
/// Only `base_type` is required; a condition on any property left unset
/// evaluates to false.
///
/// # Example
///
/// ```
/// use poe_filter_rs::filter::FilterContext;
///
/// let item = FilterContext::new("Chaos Orb")
///     .with_item_class("Stackable Currency")
///     .with_stack_size(10);
/// assert_eq!(item.stack_size, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterContext {
    /// Base type name, matched by `BaseType`.
    #[serde(default)]
    pub base_type: String,
    /// Item class, matched by `Class`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_class: Option<String>,
    /// Rarity name, matched by `Rarity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    /// Level of the area the item dropped in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_level: Option<u32>,
    /// `ItemLevel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_level: Option<u32>,
    /// `DropLevel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_level: Option<u32>,
    /// `Quality`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    /// `Sockets`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets: Option<u32>,
    /// `StackSize`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_size: Option<u32>,
    /// `WaystoneTier`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waystone_tier: Option<u32>,
}

impl FilterContext {
    /// Creates a context for an item of the given base type.
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
            ..Self::default()
        }
    }

    pub fn with_item_class(mut self, item_class: impl Into<String>) -> Self {
        self.item_class = Some(item_class.into());
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_area_level(mut self, level: u32) -> Self {
        self.area_level = Some(level);
        self
    }

    pub fn with_item_level(mut self, level: u32) -> Self {
        self.item_level = Some(level);
        self
    }

    pub fn with_drop_level(mut self, level: u32) -> Self {
        self.drop_level = Some(level);
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_sockets(mut self, sockets: u32) -> Self {
        self.sockets = Some(sockets);
        self
    }

    pub fn with_stack_size(mut self, stack_size: u32) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn with_waystone_tier(mut self, tier: u32) -> Self {
        self.waystone_tier = Some(tier);
        self
    }

    /// Returns true if there is a base type to evaluate.
    pub fn has_base_type(&self) -> bool {
        !self.base_type.trim().is_empty()
    }

    /// Returns true if the item is a stackable currency.
    pub fn is_stackable_currency(&self) -> bool {
        self.item_class.as_deref() == Some(STACKABLE_CURRENCY)
    }

    /// Returns the string property a condition type refers to.
    pub fn text(&self, condition_type: ConditionType) -> Option<&str> {
        match condition_type {
            ConditionType::BaseType => Some(self.base_type.as_str()).filter(|_| self.has_base_type()),
            ConditionType::Class => self.item_class.as_deref(),
            ConditionType::Rarity => self.rarity.as_deref(),
            _ => None,
        }
    }

    /// Returns the numeric property a condition type refers to.
    pub fn number(&self, condition_type: ConditionType) -> Option<i64> {
        let value = match condition_type {
            ConditionType::AreaLevel => self.area_level,
            ConditionType::ItemLevel => self.item_level,
            ConditionType::DropLevel => self.drop_level,
            ConditionType::Quality => self.quality,
            ConditionType::Sockets => self.sockets,
            ConditionType::StackSize => self.stack_size,
            ConditionType::WaystoneTier => self.waystone_tier,
            ConditionType::Class | ConditionType::BaseType | ConditionType::Rarity => None,
        };
        value.map(i64::from)
    }
}
