//! Tessera blinker: a period-2 Game of Life oscillator on a 5x5 grid.
//!
//! Prints the grid for each generation, `#` alive and `.` dead.
//!
//! Run with:
//!   cargo run --example blinker
//!   RUST_LOG=tessera_engine=trace cargo run --example blinker

use tessera_core::Coord;
use tessera_engine::Automaton;
use tessera_rules::GameOfLife;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ROWS: u32 = 5;
const COLS: u32 = 5;
const GENERATIONS: u64 = 4;

fn render(life: &Automaton<GameOfLife>) {
    let snap = life.current_state();
    println!("generation {}", life.generation());
    for r in 0..ROWS {
        let line: String = snap
            .row(r)
            .unwrap_or_default()
            .iter()
            .map(|&alive| if alive { '#' } else { '.' })
            .collect();
        println!("  {line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let seeds = [Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)];
    let mut life = Automaton::with_dims(ROWS, COLS, GameOfLife::bounded(ROWS, COLS, seeds)?)?;

    render(&life);
    for _ in 0..GENERATIONS {
        let metrics = life.step()?;
        info!(
            generation = %metrics.generation,
            total_us = metrics.total_us,
            "stepped"
        );
        render(&life);
    }
    Ok(())
}
