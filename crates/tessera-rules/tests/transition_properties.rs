//! Property tests for the reference transition functions over arbitrary
//! 3x3 neighbourhoods.

use proptest::prelude::*;
use tessera_arena::PingPongGrid;
use tessera_core::Coord;
use tessera_rule::{NeighborMap, Rule};
use tessera_rules::{clip, Diner, GameOfLife, LunchTable};
use tessera_space::GridSpace;

const CENTER: Coord = Coord::new(1, 1);

fn update_center<R: Rule>(rule: &R, cells: Vec<R::State>) -> R::State {
    let space = GridSpace::new(3, 3).unwrap();
    let grid = PingPongGrid::new(3, 3, cells).unwrap();
    let snap = grid.snapshot();
    let n = NeighborMap::gather(&space, &snap, CENTER);
    rule.update_cell(CENTER, snap.get(CENTER).unwrap(), &n).unwrap()
}

fn diner() -> impl Strategy<Value = Diner> {
    (-50i64..50, -50i64..50, -10i64..=10).prop_map(|(m, h, g)| Diner::new(m, h, g))
}

proptest! {
    #[test]
    fn life_follows_b3_s23(cells in prop::collection::vec(any::<bool>(), 9)) {
        let alive = cells[4];
        let n = cells.iter().enumerate().filter(|&(i, &c)| i != 4 && c).count();
        let next = update_center(&GameOfLife::default(), cells);
        prop_assert_eq!(next, if alive { n == 2 || n == 3 } else { n == 3 });
    }

    #[test]
    fn money_moves_by_one_and_hunger_is_clipped(
        cells in prop::collection::vec(diner(), 9),
        limit in 0i64..12,
    ) {
        let before = cells[4];
        let next = update_center(&LunchTable::with_hunger_limit(limit), cells);
        prop_assert_eq!((next.money - before.money).abs(), 1);
        prop_assert!(next.hunger.abs() <= limit);
    }

    #[test]
    fn lunch_update_ignores_neighbour_order(cells in prop::collection::vec(diner(), 9)) {
        let mut reversed = cells.clone();
        reversed.reverse();
        let rule = LunchTable::new();
        prop_assert_eq!(update_center(&rule, cells), update_center(&rule, reversed));
    }

    #[test]
    fn clip_bounds_and_identity(v in any::<i32>(), lim in 0i64..1000) {
        let v = i64::from(v);
        let c = clip(v, lim);
        prop_assert!(c.abs() <= lim);
        if v.abs() <= lim {
            prop_assert_eq!(c, v);
        } else {
            prop_assert_eq!(c.signum(), v.signum());
        }
    }
}
