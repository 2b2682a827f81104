//! Core types and traits for the Tessera cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessera workspace:
//! cell coordinates, the generation counter, error types, and the
//! traits through which grids are read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{RuleError, StepError};
pub use id::{Coord, Generation};
pub use traits::{CellState, GridRead};
