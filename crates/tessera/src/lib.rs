//! Tessera: a synchronous two-dimensional cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // A blinker flips between horizontal and vertical every generation.
//! let seeds = [Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)];
//! let mut life = Automaton::with_dims(5, 5, GameOfLife::new(seeds)).unwrap();
//!
//! life.step().unwrap();
//! assert_eq!(
//!     live_cells(&life.current_state()),
//!     vec![Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2)],
//! );
//! assert_eq!(life.generation(), Generation(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | `Coord`, `Generation`, error types, `GridRead` |
//! | [`space`] | `tessera-space` | `GridSpace` topology and Moore neighbourhoods |
//! | [`arena`] | `tessera-arena` | Double-buffered storage, `Snapshot`, `OwnedSnapshot` |
//! | [`rule`] | `tessera-rule` | `Rule` trait and `NeighborMap` |
//! | [`rules`] | `tessera-rules` | Game of Life and the lunch table |
//! | [`engine`] | `tessera-engine` | `Automaton`, configuration and step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`tessera-core`).
pub use tessera_core as types;

/// Grid topology (`tessera-space`).
///
/// [`space::GridSpace`] owns the dimensions and computes clipped Moore
/// neighbourhoods.
pub use tessera_space as space;

/// Double-buffered cell storage (`tessera-arena`).
///
/// Most users only need [`arena::Snapshot`] and [`arena::OwnedSnapshot`]
/// from this module; they are also available in the [`prelude`].
pub use tessera_arena as arena;

/// The rule extension point (`tessera-rule`).
pub use tessera_rule as rule;

/// Reference rules (`tessera-rules`).
pub use tessera_rules as rules;

/// The stepping engine (`tessera-engine`).
pub use tessera_engine as engine;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Arena snapshots
    pub use tessera_arena::{OwnedSnapshot, Snapshot};

    // Core types and traits
    pub use tessera_core::{CellState, Coord, Generation, GridRead};

    // Errors
    pub use tessera_core::{RuleError, StepError};
    pub use tessera_engine::ConfigError;

    // Space
    pub use tessera_space::GridSpace;

    // Rules
    pub use tessera_rule::{NeighborMap, Rule};
    pub use tessera_rules::{live_cells, Diner, GameOfLife, LunchTable};

    // Engine
    pub use tessera_engine::{Automaton, AutomatonConfig, StepMetrics};
}
