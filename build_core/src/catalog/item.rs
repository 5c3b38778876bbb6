//! Item - A single catalog row

use crate::error::SolveError;
use crate::types::{ItemType, LimitGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of limit tags an item may carry
pub const MAX_LIMIT_TAGS: usize = 2;

/// A purchasable item
///
/// Serialized as one flat row: `name`, `cost`, `type`, `itemlimit`, then one
/// numeric field per stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Purchase cost (gold)
    #[serde(default)]
    pub cost: i64,
    /// Shop category
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    /// Up to two optional limit-group tags
    #[serde(rename = "itemlimit", default)]
    pub item_limit: Vec<Option<LimitGroup>>,
    /// Stat columns, keyed by lowercase stat key
    #[serde(flatten)]
    pub stats: BTreeMap<String, f64>,
}

impl Item {
    /// Create an untyped item with no stats
    pub fn new(name: impl Into<String>, cost: i64) -> Self {
        Item {
            name: name.into(),
            cost,
            item_type: ItemType::Untyped,
            item_limit: Vec::new(),
            stats: BTreeMap::new(),
        }
    }

    /// Set the shop category
    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    /// Add a limit-group tag
    pub fn with_limit(mut self, group: impl Into<LimitGroup>) -> Self {
        self.item_limit.push(Some(group.into()));
        self
    }

    /// Set a stat value
    pub fn with_stat(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.stats.insert(stat.into(), value);
        self
    }

    /// Value of a stat, 0 when the item does not carry it
    pub fn stat(&self, stat: &str) -> f64 {
        self.stats.get(stat).copied().unwrap_or(0.0)
    }

    /// Whether the item has a column for this stat
    pub fn has_stat(&self, stat: &str) -> bool {
        self.stats.contains_key(stat)
    }

    /// Limit-group tags that are actually set
    pub fn limit_groups(&self) -> impl Iterator<Item = &LimitGroup> {
        self.item_limit.iter().flatten()
    }

    /// Check the row against the solver's assumptions
    pub fn validate(&self, index: usize) -> Result<(), SolveError> {
        if self.cost < 0 {
            return Err(SolveError::malformed(
                index,
                format!("'{}' has negative cost {}", self.name, self.cost),
            ));
        }
        if self.item_limit.len() > MAX_LIMIT_TAGS {
            return Err(SolveError::malformed(
                index,
                format!(
                    "'{}' has {} limit tags (at most {} allowed)",
                    self.name,
                    self.item_limit.len(),
                    MAX_LIMIT_TAGS
                ),
            ));
        }
        if let Some((stat, value)) = self.stats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SolveError::malformed(
                index,
                format!("'{}' has non-finite {} value {}", self.name, stat, value),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stat_reads_zero() {
        let item = Item::new("Long Sword", 350).with_stat("ad", 10.0);
        assert!((item.stat("ad") - 10.0).abs() < f64::EPSILON);
        assert!((item.stat("ap") - 0.0).abs() < f64::EPSILON);
        assert!(item.has_stat("ad"));
        assert!(!item.has_stat("ap"));
    }

    #[test]
    fn test_limit_groups_skip_empty_tags() {
        let mut item = Item::new("Doran's Blade", 450);
        item.item_limit = vec![Some("Starter".into()), None];
        let groups: Vec<&str> = item.limit_groups().map(|g| g.as_str()).collect();
        assert_eq!(groups, vec!["Starter"]);
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let item = Item::new("Broken", -1);
        let err = item.validate(3).unwrap_err();
        assert!(matches!(err, SolveError::MalformedItem { index: 3, .. }));
    }

    #[test]
    fn test_validate_rejects_too_many_tags() {
        let item = Item::new("Tagged", 100)
            .with_limit("a")
            .with_limit("b")
            .with_limit("c");
        assert!(item.validate(0).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_stat() {
        let item = Item::new("Odd", 100).with_stat("ap", f64::NAN);
        assert!(item.validate(0).is_err());
    }

    #[test]
    fn test_parse_flat_row() {
        let json = r#"{
            "name": "Sheen",
            "cost": 700,
            "type": "Epic",
            "itemlimit": [null],
            "mana": 0,
            "ah": 10
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Sheen");
        assert_eq!(item.cost, 700);
        assert_eq!(item.item_type, ItemType::Epic);
        assert_eq!(item.limit_groups().count(), 0);
        assert!((item.stat("ah") - 10.0).abs() < f64::EPSILON);
        assert!(item.has_stat("mana"));
    }
}
