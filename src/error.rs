//! Error types for histogram construction
//!
//! All failures surface at construction time, before any sample is
//! processed. Aggregation itself never fails: out-of-range and non-finite
//! samples are dropped and tallied, and empty input yields zero counts.

use thiserror::Error;

/// Error type for histogram layout and assembly
#[derive(Error, Debug)]
pub enum Error {
    /// Layout validation failed: non-monotonic or too-short edge list,
    /// zero bin count, or an empty/inverted range
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Tried to combine per-bin data built over different layouts
    #[error("bin count mismatch: expected {expected}, got {actual}")]
    BinCountMismatch { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common validation failures

impl Error {
    /// Create an error for an empty or inverted range
    pub fn empty_range(start: f64, end: f64) -> Self {
        Self::InvalidLayout(format!(
            "range end {end} must be greater than range start {start}"
        ))
    }

    /// Create an error for a zero bin count
    pub fn zero_bins() -> Self {
        Self::InvalidLayout("bin count must be at least 1".to_string())
    }

    /// Create an error for a NaN or infinite boundary
    pub fn non_finite_bound(value: f64) -> Self {
        Self::InvalidLayout(format!("boundary {value} is not finite"))
    }

    /// Create an error for an edge list shorter than one bin
    pub fn too_few_edges(len: usize) -> Self {
        Self::InvalidLayout(format!("need at least 2 edges, got {len}"))
    }

    /// Create an error for edges that do not strictly increase
    pub fn not_increasing(index: usize, left: f64, right: f64) -> Self {
        Self::InvalidLayout(format!(
            "edges must be strictly increasing: edge[{index}] = {left}, edge[{}] = {right}",
            index + 1
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::not_increasing(1, 0.5, 0.3);
        assert!(err.to_string().contains("strictly increasing"));

        let err = Error::BinCountMismatch {
            expected: 4,
            actual: 5,
        };
        assert_eq!(err.to_string(), "bin count mismatch: expected 4, got 5");
    }
}
