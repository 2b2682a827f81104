//! Error types for space operations.

use std::fmt;
use tessera_core::Coord;

/// Errors arising from space construction or bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptySpace {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// `rows * cols` does not fit in `usize`.
    DimensionTooLarge {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace { rows, cols } => {
                write!(f, "grid must have at least one row and column, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells is too large to address")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
