//! The lunch-table economy.
//!
//! Each cell is a [`Diner`] trading with its Moore neighbours. Every
//! field of the next state is computed from pre-step values only:
//!
//! | field | next value |
//! |-------|------------|
//! | money | `money - 1` if the neighbours are hungrier on average, else `money + 1` |
//! | happiness | `money + hunger - ceil(avg_hunger)` |
//! | hunger | `clip(happy_neighbours - money, limit)` |
//!
//! A diner with no neighbours (1x1 grid) treats the average hunger as its
//! own hunger.

use std::fmt;

use tessera_core::{Coord, RuleError};
use tessera_rule::{NeighborMap, Rule};

/// Default bound for [`clip`] on the hunger field.
pub const DEFAULT_HUNGER_LIMIT: i64 = 10;

/// State of one seat at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Diner {
    /// Unbounded; moves by exactly one each step.
    pub money: i64,
    /// Positive means happy.
    pub happiness: i64,
    /// Bounded by the rule's hunger limit after the first step.
    pub hunger: i64,
}

impl Diner {
    /// A diner with the given fields.
    pub const fn new(money: i64, happiness: i64, hunger: i64) -> Self {
        Self {
            money,
            happiness,
            hunger,
        }
    }

    /// Whether this diner counts as happy to its neighbours.
    pub fn is_happy(&self) -> bool {
        self.happiness > 0
    }
}

impl fmt::Display for Diner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.money, self.happiness, self.hunger)
    }
}

/// Symmetric clamp: `v` if `|v| <= lim`, otherwise `lim` with the sign of `v`.
///
/// `lim` is expected to be non-negative.
pub fn clip(v: i64, lim: i64) -> i64 {
    if v > lim {
        lim
    } else if v < -lim {
        -lim
    } else {
        v
    }
}

/// The lunch-table rule. Every diner starts at `(0, 0, 0)`.
#[derive(Clone, Copy, Debug)]
pub struct LunchTable {
    hunger_limit: i64,
}

impl Default for LunchTable {
    fn default() -> Self {
        Self {
            hunger_limit: DEFAULT_HUNGER_LIMIT,
        }
    }
}

impl LunchTable {
    /// Rule with the default hunger limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule clipping hunger to `[-limit, limit]`. Negative limits are
    /// taken by magnitude.
    pub fn with_hunger_limit(limit: i64) -> Self {
        Self {
            hunger_limit: limit.saturating_abs(),
        }
    }

    /// The bound applied to the hunger field.
    pub fn hunger_limit(&self) -> i64 {
        self.hunger_limit
    }
}

impl Rule for LunchTable {
    type State = Diner;

    fn name(&self) -> &str {
        "lunch_table"
    }

    fn init_cell(&self, _coord: Coord) -> Diner {
        Diner::default()
    }

    fn update_cell(
        &self,
        _coord: Coord,
        current: &Diner,
        neighbors: &NeighborMap<'_, Diner>,
    ) -> Result<Diner, RuleError> {
        let Diner { money, hunger, .. } = *current;

        // Mean hunger as an exact fraction sum/n so the comparison and the
        // ceiling never go through floating point.
        let (sum, n) = if neighbors.is_empty() {
            (hunger, 1)
        } else {
            let sum = neighbors.values().map(|d| d.hunger).sum::<i64>();
            (sum, neighbors.len() as i64)
        };
        let hungrier_around = sum > hunger * n;
        let ceil_avg = -(-sum).div_euclid(n);

        let happy = neighbors.count_where(Diner::is_happy) as i64;

        Ok(Diner {
            money: if hungrier_around { money - 1 } else { money + 1 },
            happiness: money + hunger - ceil_avg,
            hunger: clip(happy - money, self.hunger_limit),
        })
    }
}
