//! Core types shared across the optimizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shop category of an item
///
/// Only `Legendary` and `Boots` carry constraint rules; every other label
/// is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Starter,
    Basic,
    Epic,
    Legendary,
    Boots,
    /// Any label outside the known shop categories
    Other(String),
    /// No category (blank label)
    #[default]
    Untyped,
}

impl ItemType {
    /// Get all known shop categories
    pub fn known() -> &'static [ItemType] {
        &[
            ItemType::Starter,
            ItemType::Basic,
            ItemType::Epic,
            ItemType::Legendary,
            ItemType::Boots,
        ]
    }

    /// At most one copy of a legendary item may be built
    pub fn is_legendary(&self) -> bool {
        matches!(self, ItemType::Legendary)
    }

    /// At most one boots item may be built in total
    pub fn is_boots(&self) -> bool {
        matches!(self, ItemType::Boots)
    }

    /// Category label as it appears in catalog data
    pub fn label(&self) -> &str {
        match self {
            ItemType::Starter => "Starter",
            ItemType::Basic => "Basic",
            ItemType::Epic => "Epic",
            ItemType::Legendary => "Legendary",
            ItemType::Boots => "Boots",
            ItemType::Other(label) => label,
            ItemType::Untyped => "",
        }
    }
}

impl From<&str> for ItemType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" => ItemType::Untyped,
            "Starter" => ItemType::Starter,
            "Basic" => ItemType::Basic,
            "Epic" => ItemType::Epic,
            "Legendary" => ItemType::Legendary,
            "Boots" => ItemType::Boots,
            other => ItemType::Other(other.to_string()),
        }
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        ItemType::from(s.as_str())
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.label().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier for a slot-limited equipment group
///
/// Items sharing a tag may not be built together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitGroup(pub String);

impl From<&str> for LimitGroup {
    fn from(s: &str) -> Self {
        LimitGroup(s.to_string())
    }
}

impl From<String> for LimitGroup {
    fn from(s: String) -> Self {
        LimitGroup(s)
    }
}

impl LimitGroup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
