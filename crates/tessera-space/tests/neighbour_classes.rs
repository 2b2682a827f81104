//! Neighbour count by cell position class on grids of at least 3x3.

use proptest::prelude::*;
use tessera_core::Coord;
use tessera_space::GridSpace;

#[derive(Debug, PartialEq, Eq)]
enum Class {
    Corner,
    Edge,
    Interior,
}

fn classify(space: &GridSpace, coord: Coord) -> Class {
    let on_row_edge = coord.row == 0 || coord.row == space.rows() - 1;
    let on_col_edge = coord.col == 0 || coord.col == space.cols() - 1;
    match (on_row_edge, on_col_edge) {
        (true, true) => Class::Corner,
        (true, false) | (false, true) => Class::Edge,
        (false, false) => Class::Interior,
    }
}

#[test]
fn three_by_three_center_sees_whole_grid() {
    let space = GridSpace::new(3, 3).unwrap();
    let mut n: Vec<Coord> = space.neighbours(Coord::new(1, 1)).into_iter().collect();
    n.sort();
    let expected: Vec<Coord> = space.coords().filter(|&c| c != Coord::new(1, 1)).collect();
    assert_eq!(n, expected);
}

proptest! {
    #[test]
    fn counts_follow_position_class(rows in 3u32..16, cols in 3u32..16) {
        let space = GridSpace::new(rows, cols).unwrap();
        for coord in space.coords() {
            let expected = match classify(&space, coord) {
                Class::Corner => 3,
                Class::Edge => 5,
                Class::Interior => 8,
            };
            prop_assert_eq!(space.neighbours(coord).len(), expected, "at {}", coord);
        }
    }

    #[test]
    fn neighbour_set_is_clipped_block(rows in 1u32..10, cols in 1u32..10, seed in any::<u64>()) {
        let space = GridSpace::new(rows, cols).unwrap();
        let rank = (seed % space.cell_count() as u64) as usize;
        let coord = space.coord_at(rank).unwrap();
        let mut expected = Vec::new();
        for r in coord.row.saturating_sub(1)..=(coord.row + 1).min(rows - 1) {
            for c in coord.col.saturating_sub(1)..=(coord.col + 1).min(cols - 1) {
                if (r, c) != (coord.row, coord.col) {
                    expected.push(Coord::new(r, c));
                }
            }
        }
        let mut actual: Vec<Coord> = space.neighbours(coord).into_iter().collect();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
