//! StatView - A catalog projected onto one stat

use super::{Item, ItemCatalog};
use crate::constraint::{generate_forbidden_pairs, ForbiddenPairs};
use crate::error::SolveError;
use crate::solver::{Bounds, Problem};
use tracing::debug;

/// Items that contribute to one stat, re-indexed densely
///
/// Index `i` of the view is item `source_index(i)` of the catalog. The
/// forbidden-pair relation and every solver result are expressed in view
/// indices.
#[derive(Debug, Clone)]
pub struct StatView<'a> {
    stat: String,
    items: Vec<&'a Item>,
    source_indices: Vec<usize>,
    values: Vec<f64>,
}

impl<'a> StatView<'a> {
    pub(super) fn new(catalog: &'a ItemCatalog, stat: &str) -> Result<Self, SolveError> {
        let stat = stat.trim().to_ascii_lowercase();
        if stat.is_empty() {
            return Err(SolveError::invalid_stat(&stat, "no stat given"));
        }
        if !catalog.has_stat(&stat) {
            return Err(SolveError::invalid_stat(&stat, "no item in the catalog carries this stat"));
        }
        catalog.validate()?;

        let mut items = Vec::new();
        let mut source_indices = Vec::new();
        let mut values = Vec::new();
        for (index, item) in catalog.iter().enumerate() {
            let value = item.stat(&stat);
            if value != 0.0 {
                items.push(item);
                source_indices.push(index);
                values.push(value);
            }
        }

        if items.is_empty() {
            return Err(SolveError::invalid_stat(&stat, "every item has a zero value for this stat"));
        }

        debug!(stat = stat.as_str(), loaded = catalog.len(), kept = items.len(), "projected catalog");

        Ok(StatView {
            stat,
            items,
            source_indices,
            values,
        })
    }

    /// Normalized stat key
    pub fn stat(&self) -> &str {
        &self.stat
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&'a Item> {
        self.items.get(index).copied()
    }

    /// Catalog index of a view index
    pub fn source_index(&self, index: usize) -> Option<usize> {
        self.source_indices.get(index).copied()
    }

    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.items.iter().copied()
    }

    pub fn weights(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.cost).collect()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Exclusion relation over view indices
    pub fn forbidden_pairs(&self) -> ForbiddenPairs {
        generate_forbidden_pairs(self.items())
    }

    /// Solver input for the given budget and item cap
    pub fn problem(&self, bounds: Bounds) -> Result<Problem, SolveError> {
        Problem::with_bounds(&self.weights(), &self.values, bounds)
    }
}
