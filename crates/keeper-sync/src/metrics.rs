//! Per-sweep change counters.
//!
//! [`SweepMetrics`] records what a single sweep did to the level. A sweep
//! over a region that is already consistent reports
//! [`is_noop`](SweepMetrics::is_noop).

/// Counters collected during one sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepMetrics {
    /// Tiles whose rules ran.
    pub tiles_visited: u32,
    /// Things added to the level.
    pub things_created: u32,
    /// Things whose fields changed during reconciliation.
    pub things_updated: u32,
    /// Things removed from the level.
    pub things_deleted: u32,
    /// Things whose height or sub-position changed in the positioning pass.
    pub things_repositioned: u32,
    /// Wall-clock time for the whole sweep, in microseconds.
    pub elapsed_us: u64,
}

impl SweepMetrics {
    /// Total number of changes made to things.
    pub fn changes(&self) -> u32 {
        self.things_created + self.things_updated + self.things_deleted + self.things_repositioned
    }

    /// Whether the sweep left every thing exactly as it found it.
    pub fn is_noop(&self) -> bool {
        self.changes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SweepMetrics::default();
        assert_eq!(m.tiles_visited, 0);
        assert_eq!(m.elapsed_us, 0);
        assert!(m.is_noop());
    }

    #[test]
    fn visiting_alone_is_noop() {
        let m = SweepMetrics {
            tiles_visited: 40,
            elapsed_us: 12,
            ..Default::default()
        };
        assert!(m.is_noop());
        let m = SweepMetrics {
            things_repositioned: 1,
            ..Default::default()
        };
        assert_eq!(m.changes(), 1);
        assert!(!m.is_noop());
    }
}
