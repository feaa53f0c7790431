//! Core types for the histogram result model

use std::fmt;

use crate::error::{Error, Result};

/// A single bin record, the public result item.
///
/// `range_start`/`range_end` are the bounds of this bin. They are not
/// required to be contiguous with neighboring records: disconnected layouts
/// are legal and leave visual gaps. `area` is either the raw count or the
/// density `count / (total * width)`, depending on the normalization the
/// histogram was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramItem {
    /// Lower bound of the bin (inclusive)
    pub range_start: f64,
    /// Upper bound of the bin (exclusive, except for the final bin of a
    /// connected layout)
    pub range_end: f64,
    /// Number of samples assigned to this bin
    pub count: usize,
    /// Raw count or density, per the normalization choice
    pub area: f64,
}

impl HistogramItem {
    /// Create a raw-count bin record (`area == count`).
    ///
    /// Bounds must be finite with `range_end > range_start`; nothing is
    /// checked against other records, so callers can hand-build
    /// disconnected bins.
    pub fn new(range_start: f64, range_end: f64, count: usize) -> Result<Self> {
        if !range_start.is_finite() {
            return Err(Error::non_finite_bound(range_start));
        }
        if !range_end.is_finite() {
            return Err(Error::non_finite_bound(range_end));
        }
        if range_end <= range_start {
            return Err(Error::empty_range(range_start, range_end));
        }
        Ok(Self {
            range_start,
            range_end,
            count,
            area: count as f64,
        })
    }

    pub(crate) fn with_area(range_start: f64, range_end: f64, count: usize, area: f64) -> Self {
        Self {
            range_start,
            range_end,
            count,
            area,
        }
    }

    /// Midpoint of the bin; used for decoration, never for binning
    pub fn center(&self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }

    /// Width of the bin
    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }

    /// Check if a value falls within this bin (right edge exclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.range_start && value < self.range_end
    }
}

impl fmt::Display for HistogramItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, area={:.3}",
            self.range_start, self.range_end, self.count, self.area
        )
    }
}

/// An ordered sequence of bin records plus aggregation diagnostics.
///
/// Created once by a builder (or directly from caller-built items) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    items: Vec<HistogramItem>,
    total_count: usize,
    dropped: usize,
}

impl Histogram {
    pub(crate) fn new(items: Vec<HistogramItem>, total_count: usize, dropped: usize) -> Self {
        Self {
            items,
            total_count,
            dropped,
        }
    }

    /// Wrap caller-built records unmodified.
    ///
    /// This is the disconnected-bins path: no aggregation runs, no
    /// monotonicity is checked across records, and no gap is filled.
    /// `total_count` is the sum of the supplied counts.
    pub fn from_items(items: Vec<HistogramItem>) -> Self {
        let total_count = items.iter().map(|item| item.count).sum();
        Self {
            items,
            total_count,
            dropped: 0,
        }
    }

    /// The bin records, in construction order
    pub fn items(&self) -> &[HistogramItem] {
        &self.items
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Samples assigned across all bins
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Samples skipped during aggregation for being out of range or
    /// non-finite
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Per-bin counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.count).collect()
    }

    /// Bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.center()).collect()
    }

    /// The largest count in any bin
    pub fn max_count(&self) -> usize {
        self.items.iter().map(|item| item.count).max().unwrap_or(0)
    }

    /// The largest area in any bin
    pub fn max_area(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.area)
            .fold(0.0, |acc, a| if a > acc { a } else { acc })
    }

    /// Find the record containing `value`.
    ///
    /// The final record's upper edge is treated as inclusive, matching the
    /// assignment rule used during aggregation. Values in a gap between
    /// disconnected records return `None`.
    pub fn find_item(&self, value: f64) -> Option<usize> {
        if let Some(last) = self.items.last() {
            if value == last.range_end {
                return Some(self.items.len() - 1);
            }
        }
        self.items.iter().position(|item| item.contains(value))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, dropped={})",
            self.len(),
            self.total_count,
            self.dropped
        )
    }
}
