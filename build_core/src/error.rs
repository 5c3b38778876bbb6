//! Solve errors

use thiserror::Error;

/// Failure of a single solve call
///
/// Every variant is raised before any DP table is allocated, so a failed
/// solve leaves nothing behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid stat '{stat}': {reason}")]
    InvalidStat { stat: String, reason: String },
    #[error("Invalid bounds: capacity={capacity}, max_items={max_items} (both must be non-negative)")]
    InvalidBounds { capacity: i64, max_items: i64 },
    #[error("Malformed item at index {index}: {reason}")]
    MalformedItem { index: usize, reason: String },
    #[error("DP table of {cells} cells exceeds the configured limit of {limit}")]
    ResourceExhausted { cells: u64, limit: u64 },
}

impl SolveError {
    pub(crate) fn invalid_stat(stat: &str, reason: impl Into<String>) -> Self {
        SolveError::InvalidStat {
            stat: stat.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        SolveError::MalformedItem {
            index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SolveError::InvalidBounds {
            capacity: -5,
            max_items: 6,
        };
        assert!(err.to_string().contains("capacity=-5"));

        let err = SolveError::invalid_stat("xyz", "no item carries this stat");
        assert_eq!(err.to_string(), "Invalid stat 'xyz': no item carries this stat");

        let err = SolveError::ResourceExhausted { cells: 10, limit: 5 };
        assert!(err.to_string().contains("10 cells"));
    }
}
