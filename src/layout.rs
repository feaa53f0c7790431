//! Bin boundary layouts
//!
//! A [`BinEdges`] value is the validated, immutable set of boundaries that
//! every later stage works against. Edges are strictly increasing; bins are
//! half-open `[edge[i], edge[i+1])` with the final upper edge belonging to
//! the last bin, so the overall range is closed.

use crate::error::{Error, Result};

/// Ordered, strictly increasing bin boundaries (length >= 2).
///
/// Immutable once constructed. `k + 1` edges describe `k` bins.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Evenly spaced edges over `[start, end]` for `bins` bins.
    ///
    /// Each interior edge is interpolated directly from the bounds rather
    /// than accumulated by repeated addition, and the first and last edges
    /// are the exact `start` and `end` values, so endpoints never drift.
    pub fn uniform(start: f64, end: f64, bins: usize) -> Result<Self> {
        if !start.is_finite() {
            return Err(Error::non_finite_bound(start));
        }
        if !end.is_finite() {
            return Err(Error::non_finite_bound(end));
        }
        if end <= start {
            return Err(Error::empty_range(start, end));
        }
        if bins == 0 {
            return Err(Error::zero_bins());
        }

        let span = end - start;
        let mut edges = Vec::with_capacity(bins + 1);
        edges.push(start);
        for i in 1..bins {
            edges.push(start + span * i as f64 / bins as f64);
        }
        edges.push(end);
        Ok(Self { edges })
    }

    /// Caller-supplied edges, validated to be finite and strictly increasing.
    pub fn from_edges(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::too_few_edges(edges.len()));
        }
        if let Some(&bad) = edges.iter().find(|e| !e.is_finite()) {
            return Err(Error::non_finite_bound(bad));
        }
        for (i, pair) in edges.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(Error::not_increasing(i, pair[0], pair[1]));
            }
        }
        Ok(Self { edges })
    }

    /// Number of bins described by these edges
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// The lowest boundary
    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    /// The highest boundary
    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// All edges, including the final upper edge
    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Width of bin `bin`
    pub fn width(&self, bin: usize) -> f64 {
        self.edges[bin + 1] - self.edges[bin]
    }

    /// Find the bin receiving `sample`, if any.
    ///
    /// Binary search over the edges: O(log k) per sample. Returns `None`
    /// for non-finite samples and for samples outside `[lower, upper]`;
    /// a sample exactly equal to the final upper edge lands in the last bin.
    pub fn bin_index(&self, sample: f64) -> Option<usize> {
        if !sample.is_finite() || sample < self.lower() || sample > self.upper() {
            return None;
        }
        if sample == self.upper() {
            return Some(self.bin_count() - 1);
        }
        let idx = self.edges.partition_point(|e| *e <= sample);
        Some(idx - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_edges_exact_endpoints() {
        let edges = BinEdges::uniform(0.0, 5.0, 15).unwrap();
        assert_eq!(edges.as_slice().len(), 16);
        assert_eq!(edges.bin_count(), 15);
        assert_eq!(edges.as_slice()[0], 0.0);
        assert_eq!(edges.as_slice()[15], 5.0);
    }

    #[test]
    fn test_uniform_interior_spacing() {
        let edges = BinEdges::uniform(0.0, 1.0, 4).unwrap();
        assert_eq!(edges.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(edges.width(0), 0.25);
    }

    #[test]
    fn test_uniform_rejects_bad_inputs() {
        assert!(BinEdges::uniform(5.0, 0.0, 10).is_err());
        assert!(BinEdges::uniform(1.0, 1.0, 10).is_err());
        assert!(BinEdges::uniform(0.0, 5.0, 0).is_err());
        assert!(BinEdges::uniform(f64::NAN, 5.0, 10).is_err());
        assert!(BinEdges::uniform(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_explicit_edges_rejects_non_monotonic() {
        let err = BinEdges::from_edges(vec![0.0, 0.5, 0.3, 1.0]);
        assert!(matches!(err, Err(Error::InvalidLayout(_))));

        // Equal adjacent edges are a degenerate zero-width bin
        assert!(BinEdges::from_edges(vec![0.0, 1.0, 1.0, 2.0]).is_err());
        assert!(BinEdges::from_edges(vec![0.0]).is_err());
        assert!(BinEdges::from_edges(vec![]).is_err());
        assert!(BinEdges::from_edges(vec![0.0, f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_explicit_edges_single_bin_is_valid() {
        let edges = BinEdges::from_edges(vec![0.0, 5.0]).unwrap();
        assert_eq!(edges.bin_count(), 1);
        assert_eq!(edges.lower(), 0.0);
        assert_eq!(edges.upper(), 5.0);
    }

    #[test]
    fn test_bin_index_half_open() {
        let edges = BinEdges::from_edges(vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(edges.bin_index(0.0), Some(0));
        assert_eq!(edges.bin_index(0.5), Some(0));
        assert_eq!(edges.bin_index(1.0), Some(1)); // left-closed
        assert_eq!(edges.bin_index(1.999), Some(1));
    }

    #[test]
    fn test_bin_index_final_edge_included() {
        let edges = BinEdges::from_edges(vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(edges.bin_index(2.0), Some(1));
    }

    #[test]
    fn test_bin_index_drops_out_of_range_and_non_finite() {
        let edges = BinEdges::from_edges(vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(edges.bin_index(-0.1), None);
        assert_eq!(edges.bin_index(2.1), None);
        assert_eq!(edges.bin_index(f64::NAN), None);
        assert_eq!(edges.bin_index(f64::INFINITY), None);
        assert_eq!(edges.bin_index(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_bin_index_uneven_widths() {
        let edges =
            BinEdges::from_edges(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.75, 1.0, 2.0, 3.0, 4.0, 5.0])
                .unwrap();
        assert_eq!(edges.bin_index(0.05), Some(0));
        assert_eq!(edges.bin_index(0.6), Some(5));
        assert_eq!(edges.bin_index(1.5), Some(7));
        assert_eq!(edges.bin_index(4.99), Some(10));
    }
}
