//! The [`Rule`] trait.
//!
//! Rules are stateless with respect to the simulation: every piece of
//! simulation state lives in the grid. Configuration captured at rule
//! construction (seed sets, limits) is read-only from then on.

use crate::neighbors::NeighborMap;
use tessera_core::{CellState, Coord, RuleError};
use tessera_space::GridSpace;

/// Per-cell initialization and transition logic for an automaton.
///
/// # Contract
///
/// - `init_cell()` MUST be a pure function of the coordinate and rule
///   configuration. The engine calls it exactly once per cell, in
///   row-major order, but rules must not depend on that order.
/// - `update_cell()` MUST be deterministic and order-independent. It sees
///   only pre-step states and takes `&self`, so it cannot observe or
///   produce another cell's next state.
/// - `validate()` is called once at engine construction, before any cell
///   is initialized.
///
/// # Examples
///
/// A rule where every cell counts its live neighbours:
///
/// ```
/// use tessera_core::{Coord, RuleError};
/// use tessera_rule::{NeighborMap, Rule};
///
/// struct Degree;
///
/// impl Rule for Degree {
///     type State = usize;
///
///     fn name(&self) -> &str { "degree" }
///
///     fn init_cell(&self, _coord: Coord) -> usize { 0 }
///
///     fn update_cell(
///         &self,
///         _coord: Coord,
///         _current: &usize,
///         neighbors: &NeighborMap<'_, usize>,
///     ) -> Result<usize, RuleError> {
///         Ok(neighbors.len())
///     }
/// }
///
/// assert_eq!(Degree.name(), "degree");
/// assert_eq!(Degree.init_cell(Coord::new(3, 4)), 0);
/// ```
pub trait Rule: Send + 'static {
    /// The value stored in each cell.
    type State: CellState;

    /// Human-readable name for error reporting and log events.
    fn name(&self) -> &str;

    /// Check rule configuration against the grid it will run on.
    ///
    /// Default: accepts any grid.
    fn validate(&self, space: &GridSpace) -> Result<(), RuleError> {
        let _ = space;
        Ok(())
    }

    /// Initial state of the cell at `coord`.
    fn init_cell(&self, coord: Coord) -> Self::State;

    /// Next state of the cell at `coord`.
    ///
    /// `current` is the cell's own pre-step state and `neighbors` the
    /// pre-step states of its Moore neighbours. An error aborts the whole
    /// step; nothing is committed.
    fn update_cell(
        &self,
        coord: Coord,
        current: &Self::State,
        neighbors: &NeighborMap<'_, Self::State>,
    ) -> Result<Self::State, RuleError>;
}
