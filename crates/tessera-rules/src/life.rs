//! Conway's Game of Life.
//!
//! Boolean cells on a clipped (non-wrapping) grid. A live cell survives
//! with 2 or 3 live neighbours; a dead cell is born with exactly 3. Edge
//! and corner cells simply have fewer neighbours.
//!
//! Seeds come from an explicit coordinate set, an ASCII pattern
//! ([`GameOfLife::from_pattern`]), or a seeded random soup
//! ([`GameOfLife::random_soup`]).

use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tessera_core::{Coord, GridRead, RuleError};
use tessera_rule::{NeighborMap, Rule};
use tessera_space::GridSpace;

/// Game of Life rule with a fixed set of initially-live cells.
#[derive(Debug, Clone, Default)]
pub struct GameOfLife {
    seeds: IndexSet<Coord>,
}

impl GameOfLife {
    /// Rule whose live cells at generation 0 are exactly `seeds`.
    ///
    /// Seeds are checked against the grid when the automaton is built.
    pub fn new(seeds: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
        }
    }

    /// Like [`new`](Self::new), but rejects seeds outside `rows x cols`
    /// immediately.
    pub fn bounded(
        rows: u32,
        cols: u32,
        seeds: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, RuleError> {
        let rule = Self::new(seeds);
        rule.check_seeds(rows, cols)?;
        Ok(rule)
    }

    /// Seeds from ASCII art placed with its top-left corner at `origin`.
    ///
    /// `#` and `O` are alive, `.` is dead. Rows may differ in length.
    /// Any other character yields [`RuleError::InvalidPattern`].
    ///
    /// ```
    /// use tessera_core::Coord;
    /// use tessera_rules::GameOfLife;
    ///
    /// let glider = GameOfLife::from_pattern(Coord::new(0, 0), &[".#.", "..#", "###"]).unwrap();
    /// assert_eq!(glider.seeds().len(), 5);
    /// assert!(glider.seeds().contains(&Coord::new(0, 1)));
    /// ```
    pub fn from_pattern<S: AsRef<str>>(origin: Coord, rows: &[S]) -> Result<Self, RuleError> {
        let mut seeds = IndexSet::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.as_ref().chars().enumerate() {
                match ch {
                    '#' | 'O' => {
                        let coord = offset(origin, r, c).ok_or_else(|| RuleError::InvalidPattern {
                            reason: format!("cell at line {r}, column {c} overflows the grid"),
                        })?;
                        seeds.insert(coord);
                    }
                    '.' => {}
                    other => {
                        return Err(RuleError::InvalidPattern {
                            reason: format!("unexpected character {other:?} at line {r}, column {c}"),
                        })
                    }
                }
            }
        }
        Ok(Self { seeds })
    }

    /// Random seeds covering `space`: each cell is alive with probability
    /// `density`, drawn from a ChaCha8 stream keyed by `seed`.
    ///
    /// The same `(space, density, seed)` always yields the same seeds.
    pub fn random_soup(space: &GridSpace, density: f64, seed: u64) -> Result<Self, RuleError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(RuleError::InvalidPattern {
                reason: format!("density {density} is outside [0, 1]"),
            });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let seeds = space.coords().filter(|_| rng.gen_bool(density)).collect();
        Ok(Self { seeds })
    }

    /// The initially-live cells, in insertion order.
    pub fn seeds(&self) -> &IndexSet<Coord> {
        &self.seeds
    }

    fn check_seeds(&self, rows: u32, cols: u32) -> Result<(), RuleError> {
        match self
            .seeds
            .iter()
            .find(|c| c.row >= rows || c.col >= cols)
        {
            Some(&coord) => Err(RuleError::InvalidInitialCondition {
                coord,
                bounds: format!("[0, {rows}) x [0, {cols})"),
            }),
            None => Ok(()),
        }
    }
}

fn offset(origin: Coord, r: usize, c: usize) -> Option<Coord> {
    let row = origin.row.checked_add(u32::try_from(r).ok()?)?;
    let col = origin.col.checked_add(u32::try_from(c).ok()?)?;
    Some(Coord::new(row, col))
}

impl Rule for GameOfLife {
    type State = bool;

    fn name(&self) -> &str {
        "life"
    }

    fn validate(&self, space: &GridSpace) -> Result<(), RuleError> {
        self.check_seeds(space.rows(), space.cols())
    }

    fn init_cell(&self, coord: Coord) -> bool {
        self.seeds.contains(&coord)
    }

    fn update_cell(
        &self,
        _coord: Coord,
        current: &bool,
        neighbors: &NeighborMap<'_, bool>,
    ) -> Result<bool, RuleError> {
        let alive = neighbors.count_where(|&s| s);
        Ok(if *current {
            alive == 2 || alive == 3
        } else {
            alive == 3
        })
    }
}

/// Coordinates of every live cell in `grid`, row-major.
pub fn live_cells<G: GridRead<bool>>(grid: &G) -> Vec<Coord> {
    let mut out = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let coord = Coord::new(row, col);
            if grid.get(coord).copied().unwrap_or(false) {
                out.push(coord);
            }
        }
    }
    out
}
