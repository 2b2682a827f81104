//! Read-only views of a published grid.
//!
//! [`Snapshot`] borrows the published buffer of a [`crate::PingPongGrid`];
//! [`OwnedSnapshot`] is a reference-counted copy a caller can keep across
//! later steps.

use std::sync::Arc;

use tessera_core::{Coord, Generation, GridRead};

fn rank(coord: Coord, rows: u32, cols: u32) -> Option<usize> {
    if coord.row >= rows || coord.col >= cols {
        return None;
    }
    Some(coord.row as usize * cols as usize + coord.col as usize)
}

fn row_slice<S>(cells: &[S], r: u32, rows: u32, cols: u32) -> Option<&[S]> {
    if r >= rows {
        return None;
    }
    let start = r as usize * cols as usize;
    Some(&cells[start..start + cols as usize])
}

fn iter_cells<S>(cells: &[S], cols: u32) -> impl Iterator<Item = (Coord, &S)> {
    let cols = cols as usize;
    cells.iter().enumerate().map(move |(i, s)| {
        (Coord::new((i / cols) as u32, (i % cols) as u32), s)
    })
}

/// A read-only view of a published generation.
///
/// Borrows the published buffer; all data is immutable for the lifetime
/// of the snapshot. Because stepping takes `&mut` on the owner, the
/// borrow checker rules out stepping while a snapshot is alive.
#[derive(Debug)]
pub struct Snapshot<'a, S> {
    cells: &'a [S],
    rows: u32,
    cols: u32,
    generation: Generation,
}

// Manual impls: a snapshot is a pair of references and copies regardless
// of whether `S` does.
impl<S> Clone for Snapshot<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Snapshot<'_, S> {}

impl<'a, S> Snapshot<'a, S> {
    pub(crate) fn new(cells: &'a [S], rows: u32, cols: u32, generation: Generation) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        Self {
            cells,
            rows,
            cols,
            generation,
        }
    }

    /// The flat row-major cell slice.
    pub fn cells(&self) -> &'a [S] {
        self.cells
    }

    /// The state at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<&'a S> {
        rank(coord, self.rows, self.cols).map(|i| &self.cells[i])
    }

    /// One row of cells, or `None` if `r` is out of bounds.
    pub fn row(&self, r: u32) -> Option<&'a [S]> {
        row_slice(self.cells, r, self.rows, self.cols)
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &'a S)> {
        iter_cells(self.cells, self.cols)
    }

    /// Copy this view into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot<S>
    where
        S: Clone,
    {
        OwnedSnapshot {
            cells: Arc::from(self.cells),
            rows: self.rows,
            cols: self.cols,
            generation: self.generation,
        }
    }
}

impl<S> GridRead<S> for Snapshot<'_, S> {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn get(&self, coord: Coord) -> Option<&S> {
        rank(coord, self.rows, self.cols).map(|i| &self.cells[i])
    }

    fn generation(&self) -> Generation {
        self.generation
    }
}

/// An owned, immutable copy of a published generation.
///
/// Cloning is O(1): the cells are shared behind an `Arc`.
#[derive(Debug)]
pub struct OwnedSnapshot<S> {
    cells: Arc<[S]>,
    rows: u32,
    cols: u32,
    generation: Generation,
}

impl<S> Clone for OwnedSnapshot<S> {
    fn clone(&self) -> Self {
        Self {
            cells: Arc::clone(&self.cells),
            rows: self.rows,
            cols: self.cols,
            generation: self.generation,
        }
    }
}

impl<S> OwnedSnapshot<S> {
    /// The flat row-major cell slice.
    pub fn cells(&self) -> &[S] {
        &self.cells
    }

    /// One row of cells, or `None` if `r` is out of bounds.
    pub fn row(&self, r: u32) -> Option<&[S]> {
        row_slice(&self.cells, r, self.rows, self.cols)
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &S)> {
        iter_cells(&self.cells, self.cols)
    }
}

impl<S> GridRead<S> for OwnedSnapshot<S> {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn get(&self, coord: Coord) -> Option<&S> {
        rank(coord, self.rows, self.cols).map(|i| &self.cells[i])
    }

    fn generation(&self) -> Generation {
        self.generation
    }
}

impl<S: PartialEq> PartialEq for OwnedSnapshot<S> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}
