//! Unbounded knapsack with pairwise exclusions

use super::unbounded::solve_repeatable;
use super::{Problem, SolveResult, Solver, TableLimits};
use crate::constraint::ForbiddenPairs;
use crate::error::SolveError;
use tracing::trace;

/// Repeatable items, except where the forbidden-pair relation says otherwise
///
/// A candidate is rejected at a cell when the chain it would extend already
/// holds an item it is forbidden with. Self-pairs therefore cap an item to
/// one copy along any recorded chain.
///
/// Only the single recorded chain of each predecessor cell is checked. A
/// cell that lost a tie or was beaten by a chain containing a conflicting
/// item is never reconsidered, so the result is always feasible but may be
/// below the true constrained optimum on adversarial catalogs.
#[derive(Debug, Clone)]
pub struct ConditionalUnboundedSolver<'a> {
    pairs: &'a ForbiddenPairs,
    limits: TableLimits,
}

impl<'a> ConditionalUnboundedSolver<'a> {
    pub fn new(pairs: &'a ForbiddenPairs) -> Self {
        ConditionalUnboundedSolver {
            pairs,
            limits: TableLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: TableLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn pairs(&self) -> &ForbiddenPairs {
        self.pairs
    }
}

impl Solver for ConditionalUnboundedSolver<'_> {
    fn name(&self) -> &'static str {
        "conditional_unbounded"
    }

    fn solve(&self, problem: &Problem) -> Result<SolveResult, SolveError> {
        solve_repeatable(self.name(), problem, &self.limits, |candidate, chain| {
            let rejected = self.pairs.conflicts_with(candidate, chain.iter());
            if rejected {
                trace!(candidate, chain_len = chain.len(), "rejected forbidden candidate");
            }
            !rejected
        })
    }
}
