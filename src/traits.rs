//! Core trait for building histograms

use crate::error::Result;
use crate::types::Histogram;

/// Trait for building histograms from a sample stream
pub trait HistogramBuilder {
    /// Build a histogram by streaming `samples` exactly once.
    ///
    /// Layout validation runs before the first sample is pulled, so a bad
    /// layout never consumes any of a read-once sequence.
    fn build<I>(&self, samples: I) -> Result<Histogram>
    where
        I: IntoIterator<Item = f64>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
