//! Synchronous stepping engine for Tessera automata.
//!
//! [`Automaton`] owns a [`GridSpace`](tessera_space::GridSpace), a
//! [`Rule`](tessera_rule::Rule) and a double-buffered grid. Each
//! [`step()`](Automaton::step) computes every cell's next state from the
//! frozen current grid, then publishes the new grid as a whole.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod metrics;

pub use automaton::Automaton;
pub use config::{AutomatonConfig, ConfigError};
pub use metrics::StepMetrics;
