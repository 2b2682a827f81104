//! Grid topology for Tessera automata.
//!
//! This crate defines [`GridSpace`], the bounded rectangular lattice every
//! automaton runs on. It owns dimension validation, bounds checks, the
//! row-major rank mapping used by cell storage, and Moore (8-connected)
//! neighbour resolution with boundary clipping: cells past the edge are
//! omitted, never wrapped or substituted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
mod grid2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::GridSpace;
