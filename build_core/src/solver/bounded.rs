//! 0/1 knapsack with a cardinality bound

use super::{Problem, SolveResult, Solver, TableLimits};
use crate::error::SolveError;
use tracing::{debug, info};

/// Each item may be chosen at most once
///
/// `dp[i][w][k]` is the best value using a subset of the first `i` items
/// with total weight at most `w` and at most `k` items. The chosen subset is
/// recovered by walking the table back from `dp[n][capacity][max_items]`.
#[derive(Debug, Clone, Default)]
pub struct BoundedSolver {
    limits: TableLimits,
}

impl BoundedSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: TableLimits) -> Self {
        BoundedSolver { limits }
    }
}

impl Solver for BoundedSolver {
    fn name(&self) -> &'static str {
        "bounded"
    }

    fn solve(&self, problem: &Problem) -> Result<SolveResult, SolveError> {
        let n = problem.len();
        let capacity = problem.capacity();
        let max_items = problem.max_items();

        if n == 0 || max_items == 0 {
            return Ok(SolveResult::empty());
        }
        let cells = self.limits.check(&[n + 1, capacity + 1, max_items + 1])?;
        info!(solver = self.name(), items = n, capacity, max_items, cells, "solving");

        let mut dp = vec![vec![vec![0.0_f64; max_items + 1]; capacity + 1]; n + 1];
        let step = (n / 10).max(1);

        for i in 1..=n {
            if i % step == 0 {
                debug!(solver = self.name(), item = i, of = n, "progress");
            }
            let weight = problem.weight(i - 1);
            let value = problem.value(i - 1);

            for w in 0..=capacity {
                for k in 1..=max_items {
                    let skip = dp[i - 1][w][k];
                    dp[i][w][k] = if weight <= w {
                        let take = dp[i - 1][w - weight][k - 1] + value;
                        // Ties keep the subset without item i-1
                        if take > skip {
                            take
                        } else {
                            skip
                        }
                    } else {
                        skip
                    };
                }
            }
        }

        let total_value = dp[n][capacity][max_items];
        let mut chosen = Vec::new();
        let (mut w, mut k) = (capacity, max_items);
        for i in (1..=n).rev() {
            if k > 0 && dp[i][w][k] != dp[i - 1][w][k] {
                chosen.push(i - 1);
                w -= problem.weight(i - 1);
                k -= 1;
            }
        }
        chosen.reverse();

        info!(solver = self.name(), total_value, chosen = chosen.len(), "solved");
        Ok(SolveResult::new(total_value, chosen))
    }
}
