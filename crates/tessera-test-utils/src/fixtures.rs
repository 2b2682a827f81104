//! Reusable rule fixtures.
//!
//! - [`RankRule`]: state is the cell's row-major rank; update sums the
//!   neighbours (exposes any read of an already-updated cell).
//! - [`NeighborCountRule`]: update returns the neighbourhood size.
//! - [`FailingRule`]: fails deterministically after N updates.
//! - [`CountingRule`]: counts init and update calls.
//! - [`SeededRule`]: boolean rule with a seed set validated against the grid.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use indexmap::IndexSet;
use tessera_core::{Coord, RuleError};
use tessera_rule::{NeighborMap, Rule};
use tessera_space::GridSpace;

/// Initializes each cell to its row-major rank and replaces it with the
/// sum of its neighbours' states each step.
///
/// Because the sum depends on every neighbour, a single read of a value
/// written earlier in the same step changes the result.
#[derive(Debug, Clone, Copy)]
pub struct RankRule {
    cols: u32,
}

impl RankRule {
    /// Rank rule for a grid with `cols` columns.
    pub fn new(cols: u32) -> Self {
        Self { cols }
    }
}

impl Rule for RankRule {
    type State = usize;

    fn name(&self) -> &str {
        "rank"
    }

    fn validate(&self, space: &GridSpace) -> Result<(), RuleError> {
        if space.cols() != self.cols {
            return Err(RuleError::ExecutionFailed {
                reason: format!("built for {} columns, grid has {}", self.cols, space.cols()),
            });
        }
        Ok(())
    }

    fn init_cell(&self, coord: Coord) -> usize {
        coord.row as usize * self.cols as usize + coord.col as usize
    }

    fn update_cell(
        &self,
        _coord: Coord,
        _current: &usize,
        neighbors: &NeighborMap<'_, usize>,
    ) -> Result<usize, RuleError> {
        Ok(neighbors.values().copied().fold(0usize, usize::wrapping_add))
    }
}

/// Replaces every cell with the size of its neighbourhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborCountRule;

impl Rule for NeighborCountRule {
    type State = usize;

    fn name(&self) -> &str {
        "neighbor_count"
    }

    fn init_cell(&self, _coord: Coord) -> usize {
        0
    }

    fn update_cell(
        &self,
        _coord: Coord,
        _current: &usize,
        neighbors: &NeighborMap<'_, usize>,
    ) -> Result<usize, RuleError> {
        Ok(neighbors.len())
    }
}

/// Succeeds for the first `succeed_count` updates, then fails every call.
///
/// The counter spans steps, so a small count makes a later step fail
/// partway through its traversal.
#[derive(Debug)]
pub struct FailingRule {
    succeed_count: usize,
    calls: AtomicUsize,
}

impl FailingRule {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Rule for FailingRule {
    type State = u32;

    fn name(&self) -> &str {
        "failing"
    }

    fn init_cell(&self, _coord: Coord) -> u32 {
        0
    }

    fn update_cell(
        &self,
        coord: Coord,
        current: &u32,
        _neighbors: &NeighborMap<'_, u32>,
    ) -> Result<u32, RuleError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(RuleError::ExecutionFailed {
                reason: format!("deliberate failure at {coord} after {n} updates"),
            });
        }
        Ok(current + 1)
    }
}

/// Shared call counters for [`CountingRule`].
#[derive(Debug, Default)]
pub struct CallCounters {
    inits: AtomicUsize,
    updates: AtomicUsize,
}

impl CallCounters {
    pub fn inits(&self) -> usize {
        self.inits.load(Ordering::Relaxed)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }
}

/// Keeps every cell's state unchanged while counting calls.
///
/// Grab [`counters()`](CountingRule::counters) before handing the rule to
/// an automaton to inspect the counts afterwards.
#[derive(Debug, Default)]
pub struct CountingRule {
    counters: Arc<CallCounters>,
}

impl CountingRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> Arc<CallCounters> {
        Arc::clone(&self.counters)
    }
}

impl Rule for CountingRule {
    type State = Coord;

    fn name(&self) -> &str {
        "counting"
    }

    fn init_cell(&self, coord: Coord) -> Coord {
        self.counters.inits.fetch_add(1, Ordering::Relaxed);
        coord
    }

    fn update_cell(
        &self,
        _coord: Coord,
        current: &Coord,
        _neighbors: &NeighborMap<'_, Coord>,
    ) -> Result<Coord, RuleError> {
        self.counters.updates.fetch_add(1, Ordering::Relaxed);
        Ok(*current)
    }
}

/// Boolean cells alive exactly at the seed coordinates, never changing.
///
/// `validate()` rejects seeds outside the grid, so this fixture exercises
/// the engine's construction-time seed check.
#[derive(Debug, Clone, Default)]
pub struct SeededRule {
    seeds: IndexSet<Coord>,
}

impl SeededRule {
    pub fn new(seeds: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
        }
    }
}

impl Rule for SeededRule {
    type State = bool;

    fn name(&self) -> &str {
        "seeded"
    }

    fn validate(&self, space: &GridSpace) -> Result<(), RuleError> {
        for &coord in &self.seeds {
            if !space.contains(coord) {
                return Err(RuleError::InvalidInitialCondition {
                    coord,
                    bounds: space.bounds(),
                });
            }
        }
        Ok(())
    }

    fn init_cell(&self, coord: Coord) -> bool {
        self.seeds.contains(&coord)
    }

    fn update_cell(
        &self,
        _coord: Coord,
        current: &bool,
        _neighbors: &NeighborMap<'_, bool>,
    ) -> Result<bool, RuleError> {
        Ok(*current)
    }
}
