//! Builders turning a sample stream into bin records

use crate::aggregate::{aggregate, Aggregation};
use crate::error::{Error, Result};
use crate::layout::BinEdges;
use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramItem};

/// Uniform-width histogram builder over a closed range.
///
/// Samples outside `[start, end]` are dropped, never clamped; the drop
/// tally is carried on the resulting [`Histogram`].
pub struct UniformBuilder {
    start: f64,
    end: f64,
    bins: usize,
    normalize_to_area: bool,
}

impl UniformBuilder {
    /// Create a builder for `bins` equal-width bins over `[start, end]`
    pub fn new(start: f64, end: f64, bins: usize) -> Self {
        Self {
            start,
            end,
            bins,
            normalize_to_area: false,
        }
    }

    /// Emit densities instead of raw counts, so the total area under the
    /// histogram is 1 for non-empty input
    pub fn normalize_to_area(mut self, normalize: bool) -> Self {
        self.normalize_to_area = normalize;
        self
    }
}

impl HistogramBuilder for UniformBuilder {
    fn build<I>(&self, samples: I) -> Result<Histogram>
    where
        I: IntoIterator<Item = f64>,
    {
        let edges = BinEdges::uniform(self.start, self.end, self.bins)?;
        let agg = aggregate(&edges, samples);
        assemble(&edges, &agg, self.normalize_to_area)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bins)
    }
}

/// Histogram builder over an explicit, possibly uneven edge list
pub struct EdgesBuilder {
    edges: Vec<f64>,
    normalize_to_area: bool,
}

impl EdgesBuilder {
    /// Create a builder from caller-supplied edges (validated at build time)
    pub fn new(edges: Vec<f64>) -> Self {
        Self {
            edges,
            normalize_to_area: false,
        }
    }

    /// Emit densities instead of raw counts
    pub fn normalize_to_area(mut self, normalize: bool) -> Self {
        self.normalize_to_area = normalize;
        self
    }
}

impl HistogramBuilder for EdgesBuilder {
    fn build<I>(&self, samples: I) -> Result<Histogram>
    where
        I: IntoIterator<Item = f64>,
    {
        let edges = BinEdges::from_edges(self.edges.clone())?;
        let agg = aggregate(&edges, samples);
        assemble(&edges, &agg, self.normalize_to_area)
    }

    fn target_bins(&self) -> Option<usize> {
        self.edges.len().checked_sub(1)
    }
}

/// Combine a layout and its aggregated counts into the ordered record list.
///
/// Raw mode stores `area == count`. Density mode stores
/// `area = count / (assigned * width)`; the division short-circuits to 0
/// when nothing was assigned, so empty input never produces NaN or
/// infinity in the output.
pub fn assemble(edges: &BinEdges, agg: &Aggregation, normalize_to_area: bool) -> Result<Histogram> {
    if agg.bin_count() != edges.bin_count() {
        return Err(Error::BinCountMismatch {
            expected: edges.bin_count(),
            actual: agg.bin_count(),
        });
    }

    let total = agg.assigned();
    let bounds = edges.as_slice();
    let items = agg
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = bounds[i];
            let end = bounds[i + 1];
            let area = if normalize_to_area {
                let width = end - start;
                if total > 0 && width > 0.0 {
                    count as f64 / (total as f64 * width)
                } else {
                    0.0
                }
            } else {
                count as f64
            };
            HistogramItem::with_area(start, end, count, area)
        })
        .collect();

    Ok(Histogram::new(items, total, agg.dropped()))
}
