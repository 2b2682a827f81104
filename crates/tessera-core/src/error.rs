//! Error types for the Tessera engine.
//!
//! Organized by subsystem: rule (per-cell initialization and transition
//! logic) and step (the engine's synchronous update).

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Errors raised by a rule implementation.
///
/// Returned by `Rule::validate()` and `Rule::update_cell()`. The engine
/// wraps transition failures in [`StepError::RuleFailed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rule-supplied seed coordinate lies outside the grid.
    InvalidInitialCondition {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The transition needs at least one neighbour but the cell has none
    /// (only possible on a 1x1 grid).
    UndefinedNeighborhood {
        /// The cell whose neighbourhood is empty.
        coord: Coord,
    },
    /// A textual seed pattern could not be parsed.
    InvalidPattern {
        /// What went wrong.
        reason: String,
    },
    /// The transition function failed for a rule-specific reason.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialCondition { coord, bounds } => {
                write!(f, "initial cell {coord} out of bounds: {bounds}")
            }
            Self::UndefinedNeighborhood { coord } => {
                write!(f, "cell {coord} has no neighbours")
            }
            Self::InvalidPattern { reason } => write!(f, "invalid pattern: {reason}"),
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for RuleError {}

/// Errors from the engine during `step()`.
///
/// A step that returns an error commits nothing: the current grid and
/// the generation counter are exactly as they were before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The rule's transition function failed for one cell.
    RuleFailed {
        /// Name of the failing rule.
        rule: String,
        /// The cell being updated when the rule failed.
        coord: Coord,
        /// The underlying rule error.
        reason: RuleError,
    },
    /// The staging buffer rejected a write or could not be published.
    StagingFailed {
        /// Description of the staging failure.
        reason: String,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleFailed {
                rule,
                coord,
                reason,
            } => write!(f, "rule '{rule}' failed at {coord}: {reason}"),
            Self::StagingFailed { reason } => write!(f, "staging failed: {reason}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RuleFailed { reason, .. } => Some(reason),
            Self::StagingFailed { .. } => None,
        }
    }
}
