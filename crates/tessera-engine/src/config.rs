//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the builder input for constructing an
//! [`Automaton`](crate::Automaton). [`validate()`](AutomatonConfig::validate)
//! checks the dimensions and lets the rule check its own configuration
//! against them.

use std::error::Error;
use std::fmt;

use tessera_arena::ArenaError;
use tessera_core::RuleError;
use tessera_rule::Rule;
use tessera_space::{GridSpace, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing an automaton.
///
/// Construction either succeeds completely or yields no automaton.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Zero rows or zero columns.
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// `rows * cols` cannot be addressed on this platform.
    DimensionTooLarge {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// The rule's seed configuration references a cell outside the grid.
    InvalidInitialCondition {
        /// Name of the rule.
        rule: String,
        /// The underlying rule error.
        reason: RuleError,
    },
    /// The rule rejected the grid for some other reason.
    InvalidRule {
        /// Name of the rule.
        rule: String,
        /// The underlying rule error.
        reason: RuleError,
    },
    /// Cell storage could not be built.
    Arena(ArenaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions {rows}x{cols}: both must be positive")
            }
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "dimensions {rows}x{cols} are too large")
            }
            Self::InvalidInitialCondition { rule, reason } => {
                write!(f, "rule '{rule}' has an invalid initial condition: {reason}")
            }
            Self::InvalidRule { rule, reason } => {
                write!(f, "rule '{rule}' rejected the grid: {reason}")
            }
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInitialCondition { reason, .. } | Self::InvalidRule { reason, .. } => {
                Some(reason)
            }
            Self::Arena(e) => Some(e),
            Self::InvalidDimensions { .. } | Self::DimensionTooLarge { .. } => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Everything needed to build an automaton.
#[derive(Debug)]
pub struct AutomatonConfig<R> {
    /// Number of rows. Must be positive.
    pub rows: u32,
    /// Number of columns. Must be positive.
    pub cols: u32,
    /// The rule driving initialization and transitions.
    pub rule: R,
}

impl<R: Rule> AutomatonConfig<R> {
    /// Bundle dimensions and a rule.
    pub fn new(rows: u32, cols: u32, rule: R) -> Self {
        Self { rows, cols, rule }
    }

    /// Check structural invariants and return the validated grid space.
    ///
    /// 1. Dimensions are positive and addressable.
    /// 2. The rule accepts the grid (`Rule::validate`).
    pub fn validate(&self) -> Result<GridSpace, ConfigError> {
        let space = GridSpace::new(self.rows, self.cols).map_err(|e| match e {
            SpaceError::DimensionTooLarge { rows, cols } => {
                ConfigError::DimensionTooLarge { rows, cols }
            }
            SpaceError::EmptySpace { .. } | SpaceError::CoordOutOfBounds { .. } => {
                ConfigError::InvalidDimensions {
                    rows: self.rows,
                    cols: self.cols,
                }
            }
        })?;
        self.rule.validate(&space).map_err(|reason| {
            let rule = self.rule.name().to_string();
            match reason {
                RuleError::InvalidInitialCondition { .. } => {
                    ConfigError::InvalidInitialCondition { rule, reason }
                }
                _ => ConfigError::InvalidRule { rule, reason },
            }
        })?;
        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Coord;
    use tessera_test_utils::{NeighborCountRule, SeededRule};

    #[test]
    fn validate_zero_rows_fails() {
        let cfg = AutomatonConfig::new(0, 4, NeighborCountRule);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn validate_zero_cols_fails() {
        let cfg = AutomatonConfig::new(4, 0, NeighborCountRule);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDimensions { rows: 4, cols: 0 })
        );
    }

    #[test]
    fn validate_returns_space() {
        let space = AutomatonConfig::new(3, 5, NeighborCountRule).validate().unwrap();
        assert_eq!(space.rows(), 3);
        assert_eq!(space.cols(), 5);
    }

    #[test]
    fn validate_rejects_out_of_bounds_seed() {
        let cfg = AutomatonConfig::new(3, 3, SeededRule::new([Coord::new(3, 0)]));
        match cfg.validate() {
            Err(ConfigError::InvalidInitialCondition { rule, reason }) => {
                assert_eq!(rule, "seeded");
                assert!(matches!(
                    reason,
                    RuleError::InvalidInitialCondition { coord, .. } if coord == Coord::new(3, 0)
                ));
            }
            other => panic!("expected InvalidInitialCondition, got {other:?}"),
        }
    }

    #[test]
    fn error_display_and_source() {
        let e = ConfigError::InvalidDimensions { rows: 0, cols: 2 };
        assert_eq!(e.to_string(), "invalid dimensions 0x2: both must be positive");
        assert!(e.source().is_none());

        let e = ConfigError::Arena(ArenaError::CellCountMismatch {
            expected: 4,
            actual: 3,
        });
        assert!(e.source().is_some());
    }
}
