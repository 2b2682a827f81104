//! Grid compliance test helpers.
//!
//! These functions verify that a [`GridSpace`] satisfies the invariants
//! the engine relies on: a complete, duplicate-free canonical ordering and
//! a symmetric, clipped Moore neighbourhood.

use crate::grid::GridSpace;
use indexmap::IndexSet;

/// Assert that `coords()` yields exactly `cell_count` unique coordinates.
pub fn assert_ordering_complete(space: &GridSpace) {
    let ordering: Vec<_> = space.coords().collect();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), space.cell_count(), "ordering has duplicates");
}

/// Assert that two traversals return the same result.
pub fn assert_ordering_deterministic(space: &GridSpace) {
    let a: Vec<_> = space.coords().collect();
    let b: Vec<_> = space.coords().collect();
    assert_eq!(a, b, "ordering is non-deterministic");
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &GridSpace) {
    for coord in space.coords() {
        for nb in space.neighbours(coord) {
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that no cell lists itself or a duplicate as a neighbour.
pub fn assert_neighbours_distinct(space: &GridSpace) {
    for coord in space.coords() {
        let n = space.neighbours(coord);
        assert!(!n.contains(&coord), "{coord} is its own neighbour");
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbour of {coord}");
    }
}

/// Assert that the neighbour count equals the size of the clipped 3x3 block
/// minus the centre, for every cell.
pub fn assert_neighbour_counts_clipped(space: &GridSpace) {
    let span = |v: u32, len: u32| -> usize {
        let lo = v.saturating_sub(1);
        let hi = (v + 1).min(len - 1);
        (hi - lo + 1) as usize
    };
    for coord in space.coords() {
        let expected = span(coord.row, space.rows()) * span(coord.col, space.cols()) - 1;
        let actual = space.neighbours(coord).len();
        assert_eq!(actual, expected, "neighbour count of {coord}");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(space: &GridSpace) {
    assert_ordering_complete(space);
    assert_ordering_deterministic(space);
    assert_neighbours_symmetric(space);
    assert_neighbours_distinct(space);
    assert_neighbour_counts_clipped(space);
}
