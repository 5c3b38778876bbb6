//! Unbounded knapsack with a cardinality bound

use super::chain::ChoiceChain;
use super::{Problem, SolveResult, Solver, TableLimits};
use crate::error::SolveError;
use tracing::{debug, info};

/// Every item may be chosen any number of times
#[derive(Debug, Clone, Default)]
pub struct UnboundedSolver {
    limits: TableLimits,
}

impl UnboundedSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: TableLimits) -> Self {
        UnboundedSolver { limits }
    }
}

impl Solver for UnboundedSolver {
    fn name(&self) -> &'static str {
        "unbounded"
    }

    fn solve(&self, problem: &Problem) -> Result<SolveResult, SolveError> {
        solve_repeatable(self.name(), problem, &self.limits, |_, _| true)
    }
}

/// Shared table for the repeatable solvers
///
/// `dp[w][k]` is the best value with weight at most `w` using at most `k`
/// items, and `choice[w][k]` the chain that reaches it. Candidate `i` at
/// cell `(w, k)` extends `choice[w - weight(i)][k - 1]` and is only
/// considered when `admit(i, that_chain)` holds. Updates need a strictly
/// better value, so ties keep the lower item index and the smaller `k`.
pub(super) fn solve_repeatable<F>(
    solver: &'static str,
    problem: &Problem,
    limits: &TableLimits,
    mut admit: F,
) -> Result<SolveResult, SolveError>
where
    F: FnMut(usize, &ChoiceChain) -> bool,
{
    let capacity = problem.capacity();
    let max_items = problem.max_items();

    if problem.is_empty() || max_items == 0 {
        return Ok(SolveResult::empty());
    }
    let cells = limits.check(&[capacity + 1, max_items + 1])?;
    info!(solver, items = problem.len(), capacity, max_items, cells, "solving");

    let mut dp = vec![vec![0.0_f64; max_items + 1]; capacity + 1];
    let mut choice = vec![vec![ChoiceChain::empty(); max_items + 1]; capacity + 1];
    let step = (capacity / 10).max(1);

    for w in 0..=capacity {
        if w % step == 0 {
            debug!(solver, weight = w, of = capacity, "progress");
        }
        for k in 1..=max_items {
            for (i, (&weight, &value)) in problem.weights().iter().zip(problem.values()).enumerate() {
                if weight > w {
                    continue;
                }
                let prev = &choice[w - weight][k - 1];
                if !admit(i, prev) {
                    continue;
                }
                let candidate = dp[w - weight][k - 1] + value;
                if candidate > dp[w][k] {
                    let extended = prev.push(i);
                    dp[w][k] = candidate;
                    choice[w][k] = extended;
                }
            }
        }
    }

    let mut best_k = 0;
    for k in 1..=max_items {
        if dp[capacity][k] > dp[capacity][best_k] {
            best_k = k;
        }
    }
    let best = SolveResult::new(dp[capacity][best_k], choice[capacity][best_k].to_vec());

    info!(solver, total_value = best.total_value, chosen = best.len(), "solved");
    Ok(best)
}
