//! Optimizer settings

use super::ConfigError;
use crate::solver::{SolverKind, TableLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable optimizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Maximum number of items in a build
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Solver used by `optimize`
    #[serde(default)]
    pub solver: SolverKind,
    /// DP table ceiling
    #[serde(default)]
    pub limits: TableLimits,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            max_items: default_max_items(),
            solver: SolverKind::default(),
            limits: TableLimits::default(),
        }
    }
}

fn default_max_items() -> usize {
    6
}

impl OptimizerConfig {
    /// Load and validate settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: OptimizerConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate settings from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: OptimizerConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings shipped with the crate
    pub fn shipped() -> Self {
        let toml = include_str!("../../config/optimizer.toml");
        Self::parse(toml).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if i64::try_from(self.max_items).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "max_items {} is out of range",
                self.max_items
            )));
        }
        if self.limits.max_table_cells == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_table_cells must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.max_items, 6);
        assert_eq!(config.solver, SolverKind::ConditionalUnbounded);
        assert_eq!(config.limits, TableLimits::default());
    }

    #[test]
    fn test_shipped_matches_default() {
        let shipped = OptimizerConfig::shipped();
        assert_eq!(shipped, OptimizerConfig::default());
        assert_eq!(shipped.max_items, 6);
        assert_eq!(shipped.limits.max_table_cells, 50_000_000);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
max_items = 4
solver = "bounded"

[limits]
max_table_cells = 1000
"#;

        let config = OptimizerConfig::parse(toml).unwrap();
        assert_eq!(config.max_items, 4);
        assert_eq!(config.solver, SolverKind::Bounded);
        assert_eq!(config.limits.max_table_cells, 1000);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = OptimizerConfig::parse("solver = \"unbounded\"").unwrap();
        assert_eq!(config.max_items, 6);
        assert_eq!(config.limits, TableLimits::default());
    }

    #[test]
    fn test_zero_cell_limit_rejected() {
        let result = OptimizerConfig::parse("[limits]\nmax_table_cells = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_solver_rejected() {
        assert!(OptimizerConfig::parse("solver = \"greedy\"").is_err());
    }
}
