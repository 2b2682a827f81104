//! Shared helpers for the 2D grid backend.

use tessera_core::Coord;

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
pub(crate) const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Resolve a single axis value under boundary clipping.
/// Returns `Some(val)` when it lies in `[0, len)`, `None` otherwise.
pub(crate) fn resolve_axis(val: i64, len: u32) -> Option<u32> {
    if val >= 0 && val < i64::from(len) {
        Some(val as u32)
    } else {
        None
    }
}

/// Human-readable bounds string: `[0, rows) x [0, cols)`.
pub(crate) fn bounds_2d(rows: u32, cols: u32) -> String {
    format!("[0, {rows}) x [0, {cols})")
}

/// Row-major rank of an in-bounds coordinate, `None` if out of bounds.
pub(crate) fn canonical_rank_2d(coord: Coord, rows: u32, cols: u32) -> Option<usize> {
    if coord.row >= rows || coord.col >= cols {
        return None;
    }
    Some(coord.row as usize * cols as usize + coord.col as usize)
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub(crate) fn canonical_ordering_2d(rows: u32, cols: u32) -> impl Iterator<Item = Coord> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(0, 5), Some(0));
        assert_eq!(resolve_axis(4, 5), Some(4));
    }

    #[test]
    fn resolve_axis_clips_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5), None);
        assert_eq!(resolve_axis(5, 5), None);
    }

    #[test]
    fn rank_is_row_major() {
        assert_eq!(canonical_rank_2d(Coord::new(0, 0), 3, 4), Some(0));
        assert_eq!(canonical_rank_2d(Coord::new(1, 0), 3, 4), Some(4));
        assert_eq!(canonical_rank_2d(Coord::new(2, 3), 3, 4), Some(11));
        assert_eq!(canonical_rank_2d(Coord::new(3, 0), 3, 4), None);
        assert_eq!(canonical_rank_2d(Coord::new(0, 4), 3, 4), None);
    }

    #[test]
    fn ordering_matches_rank() {
        for (i, coord) in canonical_ordering_2d(3, 4).enumerate() {
            assert_eq!(canonical_rank_2d(coord, 3, 4), Some(i));
        }
    }
}
