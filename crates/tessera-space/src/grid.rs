//! Bounded 2D square grid with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use crate::grid2d;
use smallvec::SmallVec;
use tessera_core::Coord;

/// A two-dimensional rectangular grid with Moore neighbourhood.
///
/// Each cell has coordinate `(row, col)`. Neighbours are the four cardinal
/// directions plus the four diagonals. Cells beyond the edge are clipped:
/// corners have 3 neighbours, non-corner edge cells 5, interior cells 8.
/// There is no wraparound.
///
/// Distance is Chebyshev (L-inf), so the neighbourhood of a cell is exactly
/// the set of other cells at distance 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpace {
    rows: u32,
    cols: u32,
}

impl GridSpace {
    /// Create a grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if the cell count overflows
    /// `usize`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace { rows, cols });
        }
        if (rows as usize).checked_mul(cols as usize).is_none() {
            return Err(SpaceError::DimensionTooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Human-readable description of the valid coordinate range.
    pub fn bounds(&self) -> String {
        grid2d::bounds_2d(self.rows, self.cols)
    }

    /// `Ok(())` if `coord` is in bounds, otherwise `CoordOutOfBounds`.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), SpaceError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                bounds: self.bounds(),
            })
        }
    }

    /// Row-major rank of `coord`, or `None` if out of bounds.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        grid2d::canonical_rank_2d(coord, self.rows, self.cols)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn coord_at(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Coord::new((rank / cols) as u32, (rank % cols) as u32))
    }

    /// Every coordinate in row-major order.
    ///
    /// This is the canonical traversal used for initialization, stepping
    /// and cell storage, so position `i` of the iterator has rank `i`.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
    }

    /// Moore neighbours of `coord`, clipped to the grid.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. Only internal misuse can reach
    /// an out-of-bounds query.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        assert!(
            self.contains(coord),
            "neighbour query for {coord} outside {}",
            self.bounds()
        );
        let r = i64::from(coord.row);
        let c = i64::from(coord.col);
        let mut result = SmallVec::new();
        for (dr, dc) in grid2d::OFFSETS_8 {
            let nr = grid2d::resolve_axis(r + dr, self.rows);
            let nc = grid2d::resolve_axis(c + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push(Coord::new(nr, nc));
            }
        }
        result
    }

    /// Chebyshev distance between two coordinates.
    pub fn distance(&self, a: Coord, b: Coord) -> u32 {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        dr.max(dc)
    }
}
