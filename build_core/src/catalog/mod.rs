//! ItemCatalog - The ordered item table the solvers index into

mod item;
mod view;

pub use item::{Item, MAX_LIMIT_TAGS};
pub use view::StatView;

use crate::error::SolveError;
use serde::{Deserialize, Serialize};

/// Ordered, index-addressable item table
///
/// Position is identity: index `i` refers to the same item for the whole
/// lifetime of a solve call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Create a catalog from items in index order
    pub fn new(items: Vec<Item>) -> Self {
        ItemCatalog { items }
    }

    /// Append an item, returning its index
    pub fn push(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Whether any item carries a column for this stat
    pub fn has_stat(&self, stat: &str) -> bool {
        self.items.iter().any(|item| item.has_stat(stat))
    }

    /// Check every row, reporting the first malformed one
    pub fn validate(&self) -> Result<(), SolveError> {
        self.items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| item.validate(index))
    }

    /// Project the catalog onto one stat
    ///
    /// The stat key is trimmed and lowercased. Items whose value for the
    /// stat is zero are dropped and the survivors re-indexed densely.
    pub fn for_stat(&self, stat: &str) -> Result<StatView<'_>, SolveError> {
        StatView::new(self, stat)
    }
}

impl FromIterator<Item> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        ItemCatalog {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_dense_indices() {
        let mut catalog = ItemCatalog::default();
        assert_eq!(catalog.push(Item::new("A", 1)), 0);
        assert_eq!(catalog.push(Item::new("B", 2)), 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|i| i.name.as_str()), Some("B"));
    }

    #[test]
    fn test_validate_reports_index() {
        let catalog: ItemCatalog = vec![Item::new("ok", 10), Item::new("bad", -10)]
            .into_iter()
            .collect();
        match catalog.validate() {
            Err(SolveError::MalformedItem { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected MalformedItem, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_array() {
        let json = r#"[
            {"name": "Boots", "cost": 300, "type": "Boots", "itemlimit": [null], "ms": 25},
            {"name": "Long Sword", "cost": 350, "type": "Basic", "itemlimit": [null], "ad": 10}
        ]"#;

        let catalog: ItemCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.has_stat("ms"));
        assert!(!catalog.has_stat("ap"));
    }
}
