//! Histogram binning and aggregation engine
//!
//! This crate turns an arbitrary, possibly very large, stream of `f64`
//! samples into an ordered set of bins with counts and areas, ready for a
//! downstream renderer. It supports uniform layouts, explicit (uneven)
//! edge lists, and fully disconnected caller-built bins, plus pure per-bin
//! color/label decoration.
//!
//! # Key Features
//!
//! - **Single-pass aggregation**: samples stream through once, never
//!   buffered, with O(log k) binary-search bin assignment
//! - **Drop, don't clamp**: out-of-range and non-finite samples are skipped
//!   and tallied, never silently absorbed into an edge bin
//! - **Density mode**: optional area normalization so the total histogram
//!   area is 1, for overlaying against a theoretical distribution
//! - **Disconnected bins**: hand-built records with gaps between bars
//! - **Partition-merge**: counts combine additively, so partitions can be
//!   aggregated independently and summed (in parallel with the `parallel`
//!   feature)
//!
//! # Examples
//!
//! ## Uniform bins
//!
//! ```rust
//! use histogram_engine::collect;
//!
//! let samples = vec![0.2, 0.8, 1.1, 2.5, 3.3, 4.9, 5.0];
//! let hist = collect(samples, 0.0, 5.0, 5, false).unwrap();
//!
//! assert_eq!(hist.len(), 5);
//! assert_eq!(hist.total_count(), 7); // 5.0 lands in the last bin
//! for bin in hist.items() {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Custom edges with density normalization
//!
//! ```rust
//! use histogram_engine::collect_edges;
//!
//! let samples = vec![0.05, 0.12, 0.4, 0.9, 2.5, 4.0];
//! let edges = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.75, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let hist = collect_edges(samples, &edges, true).unwrap();
//!
//! let total_area: f64 = hist.items().iter().map(|b| b.area * b.width()).sum();
//! assert!((total_area - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Disconnected bins
//!
//! ```rust
//! use histogram_engine::{Histogram, HistogramItem};
//!
//! let hist = Histogram::from_items(vec![
//!     HistogramItem::new(0.0, 0.5, 10).unwrap(),
//!     HistogramItem::new(0.75, 1.0, 10).unwrap(),
//! ]);
//!
//! assert_eq!(hist.len(), 2);
//! assert_eq!(hist.find_item(0.6), None); // the gap stays a gap
//! ```
//!
//! ## Per-bin decoration
//!
//! ```rust
//! use histogram_engine::{collect, Color, ItemDecorator};
//!
//! let hist = collect(vec![-2.5, -0.3, 0.1, 2.2], -4.0, 4.0, 8, false).unwrap();
//! let decorator = ItemDecorator::new(Color::STEEL_BLUE)
//!     .with_color_mapping(|item| {
//!         if item.center().abs() > 1.96 {
//!             Color::DARK_RED
//!         } else {
//!             Color::STEEL_BLUE
//!         }
//!     });
//!
//! for bin in hist.items() {
//!     let _color = decorator.color(bin);
//! }
//! ```

pub mod aggregate;
pub mod builders;
pub mod decorate;
pub mod error;
pub mod layout;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use aggregate::{aggregate, Aggregation};
pub use builders::{assemble, EdgesBuilder, UniformBuilder};
pub use decorate::{Color, ColorMapping, ItemDecorator, LabelFormatter, LabelPlacement};
pub use error::{Error, Result};
pub use layout::BinEdges;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramItem};

#[cfg(feature = "parallel")]
pub use aggregate::aggregate_parallel;

// Convenience functions
/// Collect samples into `bins` equal-width bins over `[start, end]`
pub fn collect<I>(
    samples: I,
    start: f64,
    end: f64,
    bins: usize,
    normalize_to_area: bool,
) -> Result<Histogram>
where
    I: IntoIterator<Item = f64>,
{
    UniformBuilder::new(start, end, bins)
        .normalize_to_area(normalize_to_area)
        .build(samples)
}

/// Collect samples into bins bounded by an explicit edge list
pub fn collect_edges<I>(samples: I, edges: &[f64], normalize_to_area: bool) -> Result<Histogram>
where
    I: IntoIterator<Item = f64>,
{
    EdgesBuilder::new(edges.to_vec())
        .normalize_to_area(normalize_to_area)
        .build(samples)
}
