//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Catalog
pub use crate::catalog::{Item, ItemCatalog, StatView};
pub use crate::types::{ItemType, LimitGroup};

// Constraints
pub use crate::constraint::{generate_forbidden_pairs, ForbiddenPairs};

// Solvers
pub use crate::solver::{
    BoundedSolver, Bounds, ConditionalUnboundedSolver, Problem, SolveResult, Solver, SolverKind,
    UnboundedSolver,
};

// Optimizer
pub use crate::config::OptimizerConfig;
pub use crate::error::SolveError;
pub use crate::optimize::{optimize, Build, Optimizer};
