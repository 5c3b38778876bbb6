//! Stat table loading

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A selectable stat column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    /// Lowercase catalog column key
    pub key: String,
    /// Display name
    pub name: String,
}

/// Known stats in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    pub stats: Vec<StatDefinition>,
}

impl StatTable {
    /// Look up a stat by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&StatDefinition> {
        let key = key.trim();
        self.stats.iter().find(|s| s.key.eq_ignore_ascii_case(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Display name, falling back to the upper-cased key
    pub fn label(&self, key: &str) -> String {
        self.get(key)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| key.trim().to_ascii_uppercase())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatDefinition> {
        self.stats.iter()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (pos, stat) in self.stats.iter().enumerate() {
            if stat.key.is_empty() || stat.key != stat.key.to_ascii_lowercase() {
                return Err(ConfigError::ValidationError(format!(
                    "stat key '{}' must be non-empty lowercase",
                    stat.key
                )));
            }
            if self.stats[..pos].iter().any(|s| s.key == stat.key) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate stat key '{}'",
                    stat.key
                )));
            }
        }
        Ok(())
    }
}

/// Load a stat table from a TOML file
pub fn load_stat_table(path: &Path) -> Result<StatTable, ConfigError> {
    let table: StatTable = super::load_toml(path)?;
    table.validate()?;
    Ok(table)
}

/// Load a stat table from a TOML string
pub fn parse_stat_table(content: &str) -> Result<StatTable, ConfigError> {
    let table: StatTable = super::parse_toml(content)?;
    table.validate()?;
    Ok(table)
}

/// Get the built-in stat table
pub fn default_stats() -> StatTable {
    let toml = include_str!("../../config/stats.toml");
    parse_stat_table(toml).unwrap_or_default()
}
