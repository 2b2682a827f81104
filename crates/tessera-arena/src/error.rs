//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The initial cell vector does not match `rows * cols`.
    CellCountMismatch {
        /// Number of cells the dimensions require.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A write was attempted after every staging slot was filled.
    StagingOverflow {
        /// Number of cells in the grid.
        capacity: usize,
    },
    /// `publish()` was called before every staging slot was written.
    IncompleteStaging {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of cells written so far.
        written: usize,
    },
    /// `publish()` was called without a preceding `begin_step()`.
    NoStepInProgress,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "grid needs {expected} cells, got {actual}")
            }
            Self::StagingOverflow { capacity } => {
                write!(f, "staging buffer full: all {capacity} cells already written")
            }
            Self::IncompleteStaging { expected, written } => {
                write!(f, "staging incomplete: {written} of {expected} cells written")
            }
            Self::NoStepInProgress => {
                write!(f, "publish() called without a preceding begin_step()")
            }
        }
    }
}

impl Error for ArenaError {}
