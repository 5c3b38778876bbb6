//! End-to-end build optimization

use crate::catalog::{Item, ItemCatalog, StatView};
use crate::config::{default_stats, ConfigError, OptimizerConfig, StatTable};
use crate::constraint::ForbiddenPairs;
use crate::error::SolveError;
use crate::solver::{Bounds, SolveResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Failure of `optimize`
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One chosen item, resolved against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildEntry {
    /// Index in the original catalog
    pub index: usize,
    pub name: String,
    pub cost: i64,
    /// The item's value for the optimized stat
    pub value: f64,
}

/// Resolved outcome of an optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Normalized stat key
    pub stat: String,
    /// Display name of the stat
    pub stat_label: String,
    pub budget: i64,
    pub total_value: f64,
    pub total_cost: i64,
    /// Chosen items in solver order; repeats appear once per copy
    pub items: Vec<BuildEntry>,
}

impl Build {
    /// Resolve a solver result computed over `view`
    pub fn resolve(view: &StatView<'_>, result: &SolveResult, budget: i64, stats: &StatTable) -> Self {
        let items: Vec<BuildEntry> = result
            .chosen_indices
            .iter()
            .filter_map(|&i| {
                let item = view.item(i)?;
                Some(BuildEntry {
                    index: view.source_index(i)?,
                    name: item.name.clone(),
                    cost: item.cost,
                    value: view.values()[i],
                })
            })
            .collect();

        Build {
            stat: view.stat().to_string(),
            stat_label: stats.label(view.stat()),
            budget,
            total_value: result.total_value,
            total_cost: items.iter().map(|e| e.cost).sum(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining_budget(&self) -> i64 {
        self.budget - self.total_cost
    }

    /// Percent of the budget spent
    pub fn budget_utilization(&self) -> f64 {
        if self.budget > 0 {
            self.total_cost as f64 / self.budget as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Item names in build order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Runs the configured solver over a catalog
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
    stats: StatTable,
}

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer::new(OptimizerConfig::default())
    }
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Optimizer {
            config,
            stats: default_stats(),
        }
    }

    /// Replace the stat table used for labels
    pub fn with_stats(mut self, stats: StatTable) -> Self {
        self.stats = stats;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    /// Maximize `stat` over `catalog` within `budget`
    ///
    /// Items with a zero value for the stat are dropped, forbidden pairs are
    /// derived from the remaining items, and the configured solver runs with
    /// `max_items` as the cardinality bound.
    pub fn optimize(&self, catalog: &ItemCatalog, stat: &str, budget: i64) -> Result<Build, OptimizeError> {
        self.config.validate()?;
        let max_items = i64::try_from(self.config.max_items).map_err(|_| {
            ConfigError::ValidationError(format!("max_items {} is out of range", self.config.max_items))
        })?;
        let bounds = Bounds::new(budget, max_items)?;

        let view = catalog.for_stat(stat)?;
        let pairs = if self.config.solver.uses_exclusions() {
            view.forbidden_pairs()
        } else {
            ForbiddenPairs::new()
        };
        let problem = view.problem(bounds)?;

        info!(
            stat = view.stat(),
            items = view.len(),
            budget,
            max_items,
            solver = ?self.config.solver,
            "optimizing build"
        );

        let solver = self.config.solver.build(&pairs, self.config.limits);
        let result = solver.solve(&problem)?;
        let build = Build::resolve(&view, &result, budget, &self.stats);

        info!(
            stat = build.stat.as_str(),
            total_value = build.total_value,
            total_cost = build.total_cost,
            items = build.items.len(),
            "build complete"
        );

        Ok(build)
    }
}

/// Maximize `stat` over `catalog` within `budget` using `config`
pub fn optimize(
    catalog: &ItemCatalog,
    stat: &str,
    budget: i64,
    config: &OptimizerConfig,
) -> Result<Build, OptimizeError> {
    Optimizer::new(config.clone()).optimize(catalog, stat, budget)
}

/// Items of a build, in build order
pub fn build_items<'a>(catalog: &'a ItemCatalog, build: &Build) -> Vec<&'a Item> {
    build.items.iter().filter_map(|e| catalog.get(e.index)).collect()
}
