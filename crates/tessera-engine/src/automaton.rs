//! The synchronous automaton.
//!
//! [`Automaton`] is the primary user-facing API. Construction initializes
//! every cell through the rule; each [`step()`](Automaton::step) evaluates
//! the rule for every cell against the frozen current grid, writes the
//! results into the staging buffer, and publishes it.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self` and
//! [`current_state()`](Automaton::current_state) returns a [`Snapshot`]
//! borrowing from `self`, so the borrow checker rules out stepping while
//! a caller still holds a view of the grid. Callers that need to keep a
//! generation around take an [`OwnedSnapshot`].

use std::fmt;
use std::time::Instant;

use tessera_arena::{OwnedSnapshot, PingPongGrid, Snapshot, StagingWriter, StepGuard};
use tessera_core::{Coord, Generation, StepError};
use tessera_rule::{NeighborMap, Rule};
use tessera_space::GridSpace;
use tracing::{debug, trace, warn};

use crate::config::{AutomatonConfig, ConfigError};
use crate::metrics::StepMetrics;

/// A two-dimensional cellular automaton driven by rule `R`.
///
/// # Example
///
/// ```
/// use tessera_core::{Coord, RuleError};
/// use tessera_engine::Automaton;
/// use tessera_rule::{NeighborMap, Rule};
///
/// // Each cell becomes the number of its neighbours.
/// struct Degree;
/// impl Rule for Degree {
///     type State = usize;
///     fn name(&self) -> &str { "degree" }
///     fn init_cell(&self, _: Coord) -> usize { 0 }
///     fn update_cell(&self, _: Coord, _: &usize, n: &NeighborMap<'_, usize>)
///         -> Result<usize, RuleError> { Ok(n.len()) }
/// }
///
/// let mut automaton = Automaton::with_dims(3, 3, Degree).unwrap();
/// automaton.step().unwrap();
/// let grid = automaton.current_state();
/// assert_eq!(grid.get(Coord::new(0, 0)), Some(&3));
/// assert_eq!(grid.get(Coord::new(0, 1)), Some(&5));
/// assert_eq!(grid.get(Coord::new(1, 1)), Some(&8));
/// ```
pub struct Automaton<R: Rule> {
    space: GridSpace,
    rule: R,
    grid: PingPongGrid<R::State>,
    last_metrics: StepMetrics,
}

impl<R: Rule> fmt::Debug for Automaton<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("rule", &self.rule.name())
            .field("rows", &self.space.rows())
            .field("cols", &self.space.cols())
            .field("generation", &self.grid.generation())
            .finish_non_exhaustive()
    }
}

impl<R: Rule> Automaton<R> {
    /// Create a new automaton from an [`AutomatonConfig`].
    ///
    /// Validates the dimensions and the rule's configuration, then calls
    /// `rule.init_cell()` exactly once per cell in row-major order.
    pub fn new(config: AutomatonConfig<R>) -> Result<Self, ConfigError> {
        let space = config.validate()?;
        let rule = config.rule;
        let cells: Vec<R::State> = space.coords().map(|coord| rule.init_cell(coord)).collect();
        let grid = PingPongGrid::new(space.rows(), space.cols(), cells)?;
        debug!(
            rows = space.rows(),
            cols = space.cols(),
            rule = rule.name(),
            "automaton constructed"
        );
        Ok(Self {
            space,
            rule,
            grid,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Shorthand for `Automaton::new(AutomatonConfig::new(rows, cols, rule))`.
    pub fn with_dims(rows: u32, cols: u32, rule: R) -> Result<Self, ConfigError> {
        Self::new(AutomatonConfig::new(rows, cols, rule))
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.space.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.space.cols()
    }

    /// The grid topology.
    pub fn space(&self) -> &GridSpace {
        &self.space
    }

    /// The rule driving this automaton.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of committed steps.
    pub fn generation(&self) -> Generation {
        self.grid.generation()
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Read-only view of the current grid.
    pub fn current_state(&self) -> Snapshot<'_, R::State> {
        self.grid.snapshot()
    }

    /// Owned copy of the current grid that survives later steps.
    pub fn owned_snapshot(&self) -> OwnedSnapshot<R::State> {
        self.grid.owned_snapshot()
    }

    /// Current state of one cell, or `None` if `coord` is out of bounds.
    pub fn state_at(&self, coord: Coord) -> Option<&R::State> {
        self.grid.snapshot().get(coord)
    }

    /// Moore neighbours of `coord` in the current grid.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn neighbors_of(&self, coord: Coord) -> NeighborMap<'_, R::State> {
        let snapshot = self.grid.snapshot();
        NeighborMap::gather_with(&self.space, coord, move |nb| snapshot.get(nb))
    }

    /// Advance the automaton by one generation.
    ///
    /// Every cell's next state is computed from the pre-step grid; the new
    /// grid replaces the old one only after all cells succeed. On error the
    /// current grid and generation are unchanged.
    pub fn step(&mut self) -> Result<StepMetrics, StepError> {
        let start = Instant::now();

        let computed = {
            let StepGuard {
                previous,
                mut writer,
            } = self.grid.begin_step();
            compute_next(&self.space, &self.rule, previous, &mut writer)
        };
        if let Err(e) = computed {
            self.grid.abandon_step();
            warn!(
                rule = self.rule.name(),
                generation = self.grid.generation().0,
                error = %e,
                "step aborted"
            );
            return Err(e);
        }
        let update_us = start.elapsed().as_micros() as u64;

        let publish_start = Instant::now();
        let generation = match self.grid.publish() {
            Ok(generation) => generation,
            Err(e) => {
                self.grid.abandon_step();
                return Err(StepError::StagingFailed {
                    reason: e.to_string(),
                });
            }
        };
        let publish_us = publish_start.elapsed().as_micros() as u64;

        let metrics = StepMetrics {
            generation,
            cells_updated: self.space.cell_count(),
            update_us,
            publish_us,
            total_us: start.elapsed().as_micros() as u64,
        };
        trace!(
            generation = generation.0,
            cells = metrics.cells_updated,
            total_us = metrics.total_us,
            "step committed"
        );
        self.last_metrics = metrics.clone();
        Ok(metrics)
    }

    /// Perform `steps` steps, stopping at the first failure.
    ///
    /// Steps completed before a failure stay committed.
    pub fn run(&mut self, steps: u64) -> Result<Generation, StepError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(self.generation())
    }

    /// Consume the automaton, returning its rule.
    pub fn into_rule(self) -> R {
        self.rule
    }
}

/// Evaluate the rule for every cell, appending results to `writer`.
fn compute_next<R: Rule>(
    space: &GridSpace,
    rule: &R,
    previous: Snapshot<'_, R::State>,
    writer: &mut StagingWriter<'_, R::State>,
) -> Result<(), StepError> {
    for (coord, current) in previous.iter() {
        let neighbors = NeighborMap::gather_with(space, coord, |nb| previous.get(nb));
        let next = rule
            .update_cell(coord, current, &neighbors)
            .map_err(|reason| StepError::RuleFailed {
                rule: rule.name().to_string(),
                coord,
                reason,
            })?;
        writer
            .push(next)
            .map_err(|e| StepError::StagingFailed {
                reason: e.to_string(),
            })?;
    }
    Ok(())
}
