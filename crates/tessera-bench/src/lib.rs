//! Benchmark profiles for the Tessera cellular-automaton engine.
//!
//! - [`life_profile`]: 100x100 Game of Life soup (10K cells)
//! - [`lunch_profile`]: 100x100 lunch table
//! - [`stress_life_profile`]: 316x316 soup (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_engine::{Automaton, ConfigError};
use tessera_rules::{GameOfLife, LunchTable};
use tessera_space::GridSpace;

/// Soup density used by the life profiles.
pub const SOUP_DENSITY: f64 = 0.35;

/// 100x100 Game of Life seeded from a deterministic soup.
pub fn life_profile(seed: u64) -> Result<Automaton<GameOfLife>, ConfigError> {
    soup(100, seed)
}

/// 316x316 Game of Life (~100K cells) for stress runs.
pub fn stress_life_profile(seed: u64) -> Result<Automaton<GameOfLife>, ConfigError> {
    soup(316, seed)
}

/// 100x100 lunch table.
pub fn lunch_profile() -> Result<Automaton<LunchTable>, ConfigError> {
    Automaton::with_dims(100, 100, LunchTable::new())
}

fn soup(side: u32, seed: u64) -> Result<Automaton<GameOfLife>, ConfigError> {
    let invalid = || ConfigError::InvalidDimensions {
        rows: side,
        cols: side,
    };
    let space = GridSpace::new(side, side).map_err(|_| invalid())?;
    let rule = GameOfLife::random_soup(&space, SOUP_DENSITY, seed).map_err(|_| invalid())?;
    Automaton::with_dims(side, side, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_build() {
        assert_eq!(life_profile(1).unwrap().current_state().cells().len(), 10_000);
        assert_eq!(lunch_profile().unwrap().rows(), 100);
    }

    #[test]
    fn life_profile_is_seed_deterministic() {
        let a = life_profile(5).unwrap();
        let b = life_profile(5).unwrap();
        assert_eq!(a.current_state().cells(), b.current_state().cells());
    }
}
