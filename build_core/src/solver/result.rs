//! SolveResult - Outcome of a solver invocation

use super::Problem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best value found and the item indices that reach it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Sum of the chosen items' values
    pub total_value: f64,
    /// Chosen indices in reconstruction order; repeats allowed for
    /// repeatable solvers
    pub chosen_indices: Vec<usize>,
}

impl SolveResult {
    pub fn new(total_value: f64, chosen_indices: Vec<usize>) -> Self {
        SolveResult {
            total_value,
            chosen_indices,
        }
    }

    /// Nothing chosen, value 0
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chosen_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen_indices.is_empty()
    }

    /// Total weight of the chosen items
    pub fn total_weight(&self, problem: &Problem) -> usize {
        self.chosen_indices.iter().map(|&i| problem.weight(i)).sum()
    }

    /// Copies chosen per item index
    pub fn counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for &index in &self.chosen_indices {
            *counts.entry(index).or_insert(0) += 1;
        }
        counts
    }
}
