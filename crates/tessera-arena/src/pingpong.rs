//! Double-buffered ping-pong grid orchestrator.
//!
//! [`PingPongGrid`] maintains two cell buffers that alternate between
//! "published" (readable) and "staging" (writable) roles. The lifecycle
//! per step is:
//! 1. `begin_step()`: clear staging, borrow published as a [`Snapshot`]
//!    and staging as a [`StagingWriter`]
//! 2. The caller writes every cell's next state through the writer
//! 3. `publish()`: swap buffers, advance the generation
//!
//! If the caller abandons a step between 1 and 3, the published buffer is
//! untouched and the next `begin_step()` starts from a clean staging buffer.

use tessera_core::Generation;

use crate::error::ArenaError;
use crate::read::{OwnedSnapshot, Snapshot};
use crate::write::StagingWriter;

/// Step guard providing read access to the frozen current grid and write
/// access to the next one.
///
/// Created by [`PingPongGrid::begin_step()`] and dropped before
/// [`PingPongGrid::publish()`]. Holds borrows into both buffers, preventing
/// any other access to the grid during the step.
#[must_use]
pub struct StepGuard<'a, S> {
    /// The published grid as it was when the step began.
    pub previous: Snapshot<'a, S>,
    /// Append-only writer into the staging buffer.
    pub writer: StagingWriter<'a, S>,
}

/// Double-buffered cell storage with ping-pong swap.
///
/// # Buffer layout
///
/// ```text
/// published: Vec<S>  ←─── current grid (generation N)
/// staging:   Vec<S>  ←─── next grid while a step runs, empty otherwise
/// ```
#[derive(Debug)]
pub struct PingPongGrid<S> {
    rows: u32,
    cols: u32,
    published: Vec<S>,
    staging: Vec<S>,
    generation: Generation,
    step_in_progress: bool,
}

impl<S: Clone> PingPongGrid<S> {
    /// Create a grid from its generation-0 cells in row-major order.
    ///
    /// Returns `Err(ArenaError::CellCountMismatch)` if `cells.len()` is not
    /// `rows * cols`.
    pub fn new(rows: u32, cols: u32, cells: Vec<S>) -> Result<Self, ArenaError> {
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(ArenaError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            published: cells,
            staging: Vec::with_capacity(expected),
            generation: Generation(0),
            step_in_progress: false,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cells in each buffer.
    pub fn cell_count(&self) -> usize {
        self.published.len()
    }

    /// Generation of the published buffer.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether `begin_step()` has been called without a matching
    /// `publish()` or `abandon_step()`.
    pub fn step_in_progress(&self) -> bool {
        self.step_in_progress
    }

    /// Begin a step: clear staging and hand out the read and write halves.
    pub fn begin_step(&mut self) -> StepGuard<'_, S> {
        self.staging.clear();
        self.step_in_progress = true;
        let capacity = self.published.len();
        StepGuard {
            previous: Snapshot::new(&self.published, self.rows, self.cols, self.generation),
            writer: StagingWriter::new(&mut self.staging, capacity),
        }
    }

    /// Publish the staging buffer as the new current grid.
    ///
    /// Fails without changing anything if no step is in progress or if the
    /// staging buffer is not completely written.
    pub fn publish(&mut self) -> Result<Generation, ArenaError> {
        if !self.step_in_progress {
            return Err(ArenaError::NoStepInProgress);
        }
        if self.staging.len() != self.published.len() {
            return Err(ArenaError::IncompleteStaging {
                expected: self.published.len(),
                written: self.staging.len(),
            });
        }
        std::mem::swap(&mut self.published, &mut self.staging);
        // The old grid is dropped here; its allocation is kept for the
        // next step.
        self.staging.clear();
        self.step_in_progress = false;
        self.generation = self.generation.next();
        Ok(self.generation)
    }

    /// Discard a partially written staging buffer.
    pub fn abandon_step(&mut self) {
        self.staging.clear();
        self.step_in_progress = false;
    }

    /// Borrow the published buffer as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot<'_, S> {
        Snapshot::new(&self.published, self.rows, self.cols, self.generation)
    }

    /// Copy the published buffer into an [`OwnedSnapshot`].
    pub fn owned_snapshot(&self) -> OwnedSnapshot<S> {
        self.snapshot().to_owned_snapshot()
    }
}
