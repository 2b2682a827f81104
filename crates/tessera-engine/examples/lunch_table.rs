//! Tessera lunch table: the diner economy on a 4x4 grid.
//!
//! Prints every diner as `(money, happiness, hunger)` per generation.
//!
//! Run with:
//!   cargo run --example lunch_table

use tessera_engine::Automaton;
use tessera_rules::LunchTable;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ROWS: u32 = 4;
const COLS: u32 = 4;
const GENERATIONS: u64 = 5;

fn render(table: &Automaton<LunchTable>) {
    let snap = table.current_state();
    println!("generation {}", table.generation());
    for r in 0..ROWS {
        let cells: Vec<String> = snap
            .row(r)
            .unwrap_or_default()
            .iter()
            .map(|d| format!("{:>14}", d.to_string()))
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let mut table = Automaton::with_dims(ROWS, COLS, LunchTable::new())?;
    render(&table);
    for _ in 0..GENERATIONS {
        table.step()?;
        render(&table);
    }

    let happy = table
        .current_state()
        .cells()
        .iter()
        .filter(|d| d.is_happy())
        .count();
    info!(generation = %table.generation(), happy, "table settled");
    Ok(())
}
