//! Knapsack solvers
//!
//! Three alternative strategies over the same weight/value columns:
//! - [`BoundedSolver`]: each item at most once
//! - [`UnboundedSolver`]: items repeat freely
//! - [`ConditionalUnboundedSolver`]: items repeat unless a forbidden pair
//!   (self-pairs included) says otherwise

mod bounded;
mod chain;
mod conditional;
mod limits;
mod problem;
mod result;
mod unbounded;

pub use bounded::BoundedSolver;
pub use chain::ChoiceChain;
pub use conditional::ConditionalUnboundedSolver;
pub use limits::TableLimits;
pub use problem::{Bounds, Problem};
pub use result::SolveResult;
pub use unbounded::UnboundedSolver;

use crate::constraint::ForbiddenPairs;
use crate::error::SolveError;
use serde::{Deserialize, Serialize};

/// A strategy that maximizes total value within a problem's bounds
pub trait Solver {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Solve the problem; fails before allocating if the table is too large
    fn solve(&self, problem: &Problem) -> Result<SolveResult, SolveError>;
}

/// Which solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    Bounded,
    Unbounded,
    #[default]
    ConditionalUnbounded,
}

impl SolverKind {
    /// Get all solver kinds
    pub fn all() -> &'static [SolverKind] {
        &[
            SolverKind::Bounded,
            SolverKind::Unbounded,
            SolverKind::ConditionalUnbounded,
        ]
    }

    /// Whether the solver reads the forbidden-pair relation
    pub fn uses_exclusions(&self) -> bool {
        matches!(self, SolverKind::ConditionalUnbounded)
    }

    /// Instantiate the solver
    pub fn build<'a>(&self, pairs: &'a ForbiddenPairs, limits: TableLimits) -> Box<dyn Solver + 'a> {
        match self {
            SolverKind::Bounded => Box::new(BoundedSolver::with_limits(limits)),
            SolverKind::Unbounded => Box::new(UnboundedSolver::with_limits(limits)),
            SolverKind::ConditionalUnbounded => {
                Box::new(ConditionalUnboundedSolver::new(pairs).with_limits(limits))
            }
        }
    }
}
