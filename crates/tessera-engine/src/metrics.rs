//! Per-step performance metrics for the engine.
//!
//! [`StepMetrics`] captures timing data for a single committed step.

use tessera_core::Generation;

/// Timing metrics collected during a single step.
///
/// All durations are in microseconds. The engine populates these after
/// each successful `step()` call and keeps the most recent set available
/// through `Automaton::last_metrics()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation produced by this step.
    pub generation: Generation,
    /// Number of cells whose next state was computed.
    pub cells_updated: usize,
    /// Time spent evaluating the rule across all cells, in microseconds.
    pub update_us: u64,
    /// Time spent publishing the staging buffer, in microseconds.
    pub publish_us: u64,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.generation, Generation(0));
        assert_eq!(m.cells_updated, 0);
        assert_eq!(m.update_us, 0);
        assert_eq!(m.publish_us, 0);
        assert_eq!(m.total_us, 0);
    }
}
