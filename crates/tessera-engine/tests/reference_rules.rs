//! End-to-end runs of the shipped rules through the engine.

use tessera_core::{Coord, Generation};
use tessera_engine::{Automaton, AutomatonConfig, ConfigError};
use tessera_rules::{live_cells, Diner, GameOfLife, LunchTable};
use tessera_test_utils::all_coords;

fn coords(pairs: &[(u32, u32)]) -> Vec<Coord> {
    pairs.iter().map(|&p| Coord::from(p)).collect()
}

// ── Game of Life ───────────────────────────────────────────────────

#[test]
fn dead_grid_stays_dead() {
    let mut life = Automaton::with_dims(3, 3, GameOfLife::default()).unwrap();
    life.run(4).unwrap();
    assert!(life.current_state().cells().iter().all(|&alive| !alive));
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = coords(&[(2, 1), (2, 2), (2, 3)]);
    let vertical = coords(&[(1, 2), (2, 2), (3, 2)]);
    let mut life = Automaton::with_dims(5, 5, GameOfLife::new(horizontal.clone())).unwrap();

    life.step().unwrap();
    assert_eq!(live_cells(&life.current_state()), vertical);
    life.step().unwrap();
    assert_eq!(live_cells(&life.current_state()), horizontal);
    assert_eq!(life.generation(), Generation(2));
}

#[test]
fn blinker_on_the_boundary_is_clipped() {
    // Along the top edge nothing exists above row 0, so only the
    // vertical half below survives.
    let mut life = Automaton::with_dims(3, 3, GameOfLife::new(coords(&[(0, 0), (0, 1), (0, 2)])))
        .unwrap();
    life.step().unwrap();
    assert_eq!(live_cells(&life.current_state()), coords(&[(0, 1), (1, 1)]));
}

#[test]
fn glider_pattern_translates() {
    let glider = GameOfLife::from_pattern(Coord::new(0, 0), &[".#.", "..#", "###"]).unwrap();
    let mut life = Automaton::with_dims(8, 8, glider).unwrap();
    life.run(4).unwrap();
    assert_eq!(
        live_cells(&life.current_state()),
        coords(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)])
    );
}

#[test]
fn seed_outside_grid_rejected_at_construction() {
    let err = Automaton::new(AutomatonConfig::new(
        4,
        4,
        GameOfLife::new([Coord::new(1, 1), Coord::new(0, 4)]),
    ))
    .unwrap_err();
    match err {
        ConfigError::InvalidInitialCondition { rule, .. } => assert_eq!(rule, "life"),
        other => panic!("expected InvalidInitialCondition, got {other:?}"),
    }
}

#[test]
fn soup_runs_identically_for_equal_seeds() {
    let space = tessera_space::GridSpace::new(12, 12).unwrap();
    let mut a = Automaton::with_dims(12, 12, GameOfLife::random_soup(&space, 0.35, 99).unwrap())
        .unwrap();
    let mut b = Automaton::with_dims(12, 12, GameOfLife::random_soup(&space, 0.35, 99).unwrap())
        .unwrap();
    a.run(10).unwrap();
    b.run(10).unwrap();
    assert_eq!(a.current_state().cells(), b.current_state().cells());
}

// ── Lunch table ────────────────────────────────────────────────────

#[test]
fn lunch_table_initializes_to_zero() {
    let table = Automaton::with_dims(3, 4, LunchTable::new()).unwrap();
    assert!(table.current_state().cells().iter().all(|d| *d == Diner::default()));
}

#[test]
fn first_two_steps_are_uniform() {
    // While every hunger is equal, position does not matter.
    let mut table = Automaton::with_dims(4, 5, LunchTable::new()).unwrap();
    table.step().unwrap();
    assert!(table.current_state().cells().iter().all(|d| *d == Diner::new(1, 0, 0)));
    table.step().unwrap();
    assert!(table.current_state().cells().iter().all(|d| *d == Diner::new(2, 1, -1)));
}

#[test]
fn lunch_table_is_mirror_symmetric() {
    let (rows, cols) = (5, 6);
    let mut table = Automaton::with_dims(rows, cols, LunchTable::new()).unwrap();
    for _ in 0..12 {
        table.step().unwrap();
        for c in all_coords(rows, cols) {
            let here = table.state_at(c);
            assert_eq!(here, table.state_at(Coord::new(rows - 1 - c.row, c.col)));
            assert_eq!(here, table.state_at(Coord::new(c.row, cols - 1 - c.col)));
        }
    }
}

#[test]
fn single_diner_runs_without_neighbours() {
    let mut table = Automaton::with_dims(1, 1, LunchTable::new()).unwrap();
    let expected = [Diner::new(1, 0, 0), Diner::new(2, 1, -1), Diner::new(3, 2, -2)];
    for want in expected {
        table.step().unwrap();
        assert_eq!(table.state_at(Coord::new(0, 0)), Some(&want));
    }
}

#[test]
fn hunger_never_leaves_the_limit() {
    let mut table = Automaton::with_dims(6, 6, LunchTable::with_hunger_limit(3)).unwrap();
    for _ in 0..20 {
        table.step().unwrap();
        assert!(table.current_state().cells().iter().all(|d| d.hunger.abs() <= 3));
    }
}

#[test]
fn uniform_grid_stays_uniform_when_every_cell_sees_the_same_count() {
    for (rows, cols) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        let mut table = Automaton::with_dims(rows, cols, LunchTable::new()).unwrap();
        for _ in 0..15 {
            table.step().unwrap();
            let snap = table.current_state();
            let first = snap.cells()[0];
            assert!(
                snap.cells().iter().all(|d| *d == first),
                "{rows}x{cols} diverged at {}",
                table.generation()
            );
        }
    }
}
