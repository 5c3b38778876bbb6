//! Problem - Validated solver input

use crate::error::SolveError;
use serde::{Deserialize, Serialize};

/// Budget and cardinality bounds of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Total cost budget
    pub capacity: usize,
    /// Maximum number of items (copies included)
    pub max_items: usize,
}

impl Bounds {
    /// Validate raw bounds; negative values are rejected, never clamped
    pub fn new(capacity: i64, max_items: i64) -> Result<Self, SolveError> {
        let invalid = || SolveError::InvalidBounds {
            capacity,
            max_items,
        };
        Ok(Bounds {
            capacity: usize::try_from(capacity).map_err(|_| invalid())?,
            max_items: usize::try_from(max_items).map_err(|_| invalid())?,
        })
    }
}

/// Weight/value columns plus bounds, checked against the solvers' assumptions
///
/// Weights are non-negative integers, values are finite and both columns
/// have the same length. Index `i` in either column is item `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    weights: Vec<usize>,
    values: Vec<f64>,
    bounds: Bounds,
}

impl Problem {
    /// Build a problem from raw columns and bounds
    pub fn new(
        weights: &[i64],
        values: &[f64],
        capacity: i64,
        max_items: i64,
    ) -> Result<Self, SolveError> {
        let bounds = Bounds::new(capacity, max_items)?;
        Self::with_bounds(weights, values, bounds)
    }

    /// Build a problem from raw columns and already validated bounds
    pub fn with_bounds(weights: &[i64], values: &[f64], bounds: Bounds) -> Result<Self, SolveError> {
        if weights.len() != values.len() {
            return Err(SolveError::malformed(
                weights.len().min(values.len()),
                format!(
                    "{} weights but {} values",
                    weights.len(),
                    values.len()
                ),
            ));
        }

        let weights = weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| {
                usize::try_from(weight)
                    .map_err(|_| SolveError::malformed(index, format!("negative cost {}", weight)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SolveError::malformed(
                index,
                format!("non-finite value {}", values[index]),
            ));
        }

        Ok(Problem {
            weights,
            values: values.to_vec(),
            bounds,
        })
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weight(&self, index: usize) -> usize {
        self.weights[index]
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn capacity(&self) -> usize {
        self.bounds.capacity
    }

    pub fn max_items(&self) -> usize {
        self.bounds.max_items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Same columns, different bounds
    pub fn rebounded(&self, bounds: Bounds) -> Self {
        Problem {
            weights: self.weights.clone(),
            values: self.values.clone(),
            bounds,
        }
    }
}
