//! Table size ceiling

use crate::error::SolveError;
use serde::{Deserialize, Serialize};

/// Deployment ceiling on the number of DP cells a single solve may allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLimits {
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: u64,
}

impl Default for TableLimits {
    fn default() -> Self {
        TableLimits {
            max_table_cells: default_max_table_cells(),
        }
    }
}

fn default_max_table_cells() -> u64 {
    50_000_000
}

impl TableLimits {
    /// No ceiling beyond `u64` overflow
    pub fn unlimited() -> Self {
        TableLimits {
            max_table_cells: u64::MAX,
        }
    }

    /// Check a table with the given dimensions, returning its cell count
    pub fn check(&self, dims: &[usize]) -> Result<u64, SolveError> {
        let cells = dims
            .iter()
            .try_fold(1_u64, |acc, &dim| acc.checked_mul(dim as u64));

        match cells {
            Some(cells) if cells <= self.max_table_cells => Ok(cells),
            Some(cells) => Err(SolveError::ResourceExhausted {
                cells,
                limit: self.max_table_cells,
            }),
            None => Err(SolveError::ResourceExhausted {
                cells: u64::MAX,
                limit: self.max_table_cells,
            }),
        }
    }
}
