//! Strongly-typed identifiers: [`Coord`] and [`Generation`].

use std::fmt;

/// Identifies one cell of a two-dimensional grid as `(row, col)`.
///
/// Coordinates order row-major: `(0, 0) < (0, 1) < ... < (1, 0)`, which
/// matches the canonical traversal order of every grid in the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl Coord {
    /// Create a coordinate from a row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (u32, u32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

/// Monotonically increasing step counter.
///
/// Zero after construction; incremented each time a step is committed.
/// A step that fails does not advance the generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }

    #[test]
    fn coord_orders_row_major() {
        let mut coords = vec![
            Coord::new(1, 0),
            Coord::new(0, 2),
            Coord::new(0, 0),
            Coord::new(1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn generation_next_increments() {
        assert_eq!(Generation::default(), Generation(0));
        assert_eq!(Generation(4).next(), Generation(5));
    }

    proptest! {
        #[test]
        fn coord_tuple_conversion(row in any::<u32>(), col in any::<u32>()) {
            let c: Coord = (row, col).into();
            prop_assert_eq!(c, Coord::new(row, col));
            let back: (u32, u32) = c.into();
            prop_assert_eq!(back, (row, col));
        }
    }
}
