//! Reference rules for the Tessera cellular-automaton engine.
//!
//! - [`GameOfLife`]: boolean cells, survive on 2 or 3 live neighbours,
//!   born on exactly 3.
//! - [`LunchTable`]: [`Diner`] cells trading money, happiness and hunger
//!   with their neighbours.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod life;
pub mod lunch_table;

pub use life::{live_cells, GameOfLife};
pub use lunch_table::{clip, Diner, LunchTable};
