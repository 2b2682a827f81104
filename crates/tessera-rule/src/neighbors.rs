//! [`NeighborMap`]: the per-query view of a cell's Moore neighbours.

use indexmap::IndexMap;
use tessera_core::{Coord, GridRead};
use tessera_space::GridSpace;

/// Mapping from neighbour coordinate to that neighbour's current state.
///
/// Built fresh for each query. Contains exactly the in-bounds cells at
/// Chebyshev distance 1 from the queried cell: 8 for interior cells, 5 on
/// edges, 3 in corners, and none on a 1x1 grid.
///
/// Iteration order is deterministic but carries no meaning; transition
/// functions must only use order-independent aggregates (counts, sums,
/// means) or keyed lookups.
#[derive(Debug)]
pub struct NeighborMap<'a, S> {
    center: Coord,
    entries: IndexMap<Coord, &'a S>,
}

impl<'a, S> NeighborMap<'a, S> {
    /// Gather the neighbours of `center` from `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `center` is outside `space`, or if `grid` is smaller than
    /// `space`.
    pub fn gather<G>(space: &GridSpace, grid: &'a G, center: Coord) -> Self
    where
        G: GridRead<S>,
    {
        Self::gather_with(space, center, move |nb| grid.get(nb))
    }

    /// Gather the neighbours of `center`, resolving each state via `lookup`.
    ///
    /// Used when the grid view is a short-lived handle whose cells outlive
    /// it, such as an arena snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `center` is outside `space`, or if `lookup` returns `None`
    /// for an in-bounds neighbour.
    pub fn gather_with<F>(space: &GridSpace, center: Coord, lookup: F) -> Self
    where
        F: Fn(Coord) -> Option<&'a S>,
    {
        let entries = space
            .neighbours(center)
            .into_iter()
            .map(|nb| {
                let state = lookup(nb).unwrap_or_else(|| panic!("grid has no cell at {nb}"));
                (nb, state)
            })
            .collect();
        Self { center, entries }
    }

    /// The coordinate whose neighbourhood this is.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Number of neighbours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cell has no neighbours (1x1 grid).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The state of neighbour `coord`, or `None` if it is not a neighbour.
    pub fn get(&self, coord: Coord) -> Option<&'a S> {
        self.entries.get(&coord).copied()
    }

    /// Whether `coord` is one of the neighbours.
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// `(coord, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &'a S)> + '_ {
        self.entries.iter().map(|(&c, &s)| (c, s))
    }

    /// Neighbour coordinates.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.keys().copied()
    }

    /// Neighbour states.
    pub fn values(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.entries.values().copied()
    }

    /// Number of neighbours whose state satisfies `pred`.
    pub fn count_where(&self, mut pred: impl FnMut(&S) -> bool) -> usize {
        self.values().filter(|s| pred(s)).count()
    }
}
