//! build_core - Stat-maximizing item build optimizer
//!
//! This library provides:
//! - ItemCatalog: The ordered item table solvers index into
//! - ForbiddenPairs: Exclusions derived from limit groups, legendary and boots items
//! - Solvers: 0/1, unbounded and exclusion-aware unbounded knapsack with an item cap
//! - Optimizer: Catalog + stat + budget in, resolved Build out

pub mod catalog;
pub mod config;
pub mod constraint;
pub mod error;
pub mod optimize;
pub mod prelude;
pub mod solver;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Item, ItemCatalog, StatView};
pub use config::{default_stats, ConfigError, OptimizerConfig, StatTable};
pub use constraint::{generate_forbidden_pairs, ForbiddenPairs};
pub use error::SolveError;
pub use optimize::{optimize, Build, BuildEntry, OptimizeError, Optimizer};
pub use solver::{
    BoundedSolver, Bounds, ConditionalUnboundedSolver, Problem, SolveResult, Solver, SolverKind,
    TableLimits, UnboundedSolver,
};
pub use types::{ItemType, LimitGroup};
