//! Test utilities and rule fixtures for Tessera development.
//!
//! The fixtures in [`fixtures`] exercise the engine contract without any
//! domain semantics: they make synchronous reads, call counts and failure
//! handling directly observable.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CallCounters, CountingRule, FailingRule, NeighborCountRule, RankRule, SeededRule};

use tessera_core::Coord;
use tessera_space::GridSpace;

/// Every coordinate of a `rows x cols` grid in row-major order.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn all_coords(rows: u32, cols: u32) -> Vec<Coord> {
    GridSpace::new(rows, cols)
        .expect("test grid dimensions must be positive")
        .coords()
        .collect()
}
