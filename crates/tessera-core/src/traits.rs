//! Core abstraction traits for cell state and grid reading.

use crate::id::{Coord, Generation};
use std::fmt::Debug;

/// Marker for values that can live in a grid cell.
///
/// The engine never inspects cell values; it only stores them, clones
/// them into snapshots, and hands references to the rule. Blanket
/// implemented for every qualifying type.
pub trait CellState: Clone + Debug + Send + 'static {}

impl<T: Clone + Debug + Send + 'static> CellState for T {}

/// Read-only access to a fully populated grid.
///
/// Implemented by the arena's snapshot types. Neighbour gathering and
/// rendering read through this trait rather than the arena directly.
pub trait GridRead<S> {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// The state at `coord`, or `None` if it lies outside the grid.
    fn get(&self, coord: Coord) -> Option<&S>;

    /// Generation at which this grid was published.
    fn generation(&self) -> Generation;

    /// Total cell count (`rows * cols`).
    fn cell_count(&self) -> usize {
        self.rows() as usize * self.cols() as usize
    }
}
