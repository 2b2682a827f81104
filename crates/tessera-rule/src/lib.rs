//! Rule trait and neighbourhood views for Tessera automata.
//!
//! A [`Rule`] supplies the two per-cell capabilities the engine needs:
//! an initializer called once per cell at construction, and a transition
//! function called once per cell per step. The transition sees the cell's
//! own state and a [`NeighborMap`] of its Moore neighbours, both read from
//! the frozen pre-step grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neighbors;
pub mod rule;

pub use neighbors::NeighborMap;
pub use rule::Rule;
