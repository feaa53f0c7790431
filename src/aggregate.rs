//! Streaming sample aggregation
//!
//! Consumes a sample sequence exactly once, assigning each value to its bin
//! via binary search over the layout's edges. The sequence is pull-based
//! and never buffered, so sources of 10^6 values or more stream through in
//! constant memory.

use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::BinEdges;

/// Per-bin counts accumulated from a sample stream.
///
/// `assigned` counts only samples that landed in a bin; it is the
/// denominator for density normalization. Out-of-range and non-finite
/// samples are never assigned and show up only in `dropped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    counts: Vec<usize>,
    assigned: usize,
    dropped: usize,
}

impl Aggregation {
    /// An all-zero tally for `bin_count` bins
    pub fn new(bin_count: usize) -> Self {
        Self {
            counts: vec![0; bin_count],
            assigned: 0,
            dropped: 0,
        }
    }

    /// Per-bin counts
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins tallied
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Samples assigned to some bin
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    /// Samples skipped for being out of range or non-finite
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Tally one sample against `edges`
    pub fn observe(&mut self, edges: &BinEdges, sample: f64) {
        match edges.bin_index(sample) {
            Some(i) => {
                self.counts[i] += 1;
                self.assigned += 1;
            }
            None => self.dropped += 1,
        }
    }

    /// Element-wise sum of two tallies over the same layout.
    ///
    /// Addition is commutative and associative, so partitions of a sample
    /// sequence can be aggregated independently and merged in any order.
    pub fn merge(&mut self, other: &Aggregation) -> Result<()> {
        if self.counts.len() != other.counts.len() {
            return Err(Error::BinCountMismatch {
                expected: self.counts.len(),
                actual: other.counts.len(),
            });
        }
        self.absorb(other);
        Ok(())
    }

    fn absorb(&mut self, other: &Aggregation) {
        for (count, extra) in self.counts.iter_mut().zip(&other.counts) {
            *count += extra;
        }
        self.assigned += other.assigned;
        self.dropped += other.dropped;
    }
}

/// Stream `samples` once, producing per-bin counts.
///
/// O(n log k) for n samples and k bins. Empty input is not an error and
/// yields an all-zero tally.
pub fn aggregate<I>(edges: &BinEdges, samples: I) -> Aggregation
where
    I: IntoIterator<Item = f64>,
{
    let mut agg = Aggregation::new(edges.bin_count());
    for sample in samples {
        agg.observe(edges, sample);
    }
    debug!(
        "Aggregated {} samples into {} bins ({} dropped)",
        agg.assigned,
        agg.counts.len(),
        agg.dropped
    );
    agg
}

/// Partition `samples`, aggregate each partition independently, and sum the
/// tallies once at the end.
///
/// Requires a finite, in-memory slice; the result is identical to a single
/// sequential pass.
#[cfg(feature = "parallel")]
pub fn aggregate_parallel(edges: &BinEdges, samples: &[f64]) -> Aggregation {
    use rayon::prelude::*;

    // Below this size the fan-out costs more than the scan
    const MIN_CHUNK: usize = 16 * 1024;

    if samples.len() < MIN_CHUNK {
        return aggregate(edges, samples.iter().copied());
    }

    let chunk = (samples.len() / rayon::current_num_threads()).max(MIN_CHUNK);
    samples
        .par_chunks(chunk)
        .map(|part| aggregate(edges, part.iter().copied()))
        .reduce(
            || Aggregation::new(edges.bin_count()),
            |mut acc, part| {
                acc.absorb(&part);
                acc
            },
        )
}
