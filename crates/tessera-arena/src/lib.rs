//! Double-buffered cell storage for Tessera automata.
//!
//! # Architecture
//!
//! ```text
//! PingPongGrid<S> (orchestrator)
//! ├── published: Vec<S>  ←── current grid, read-only during a step
//! └── staging:   Vec<S>  ←── next grid, append-only during a step
//! ```
//!
//! A step borrows the published buffer as a [`Snapshot`] and the staging
//! buffer as a [`StagingWriter`]. [`PingPongGrid::publish`] swaps the two
//! once every cell has been written; the old grid is cleared and its
//! allocation reused for the next step.
//!
//! Both buffers are flat and row-major: cell `(r, c)` lives at
//! `r * cols + c`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pingpong;
pub mod read;
pub mod write;

pub use error::ArenaError;
pub use pingpong::{PingPongGrid, StepGuard};
pub use read::{OwnedSnapshot, Snapshot};
pub use write::StagingWriter;
