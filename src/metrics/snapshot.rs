/// Point-in-time copy of a simulator's counters.
///
/// Plain data, cheap to clone and compare; decoupled from the live
/// [`SimMetrics`](crate::metrics::metrics_impl::SimMetrics) so benches and
/// exporters never hold a reference into the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimMetricsSnapshot {
    pub add_calls: u64,
    pub add_hits: u64,
    pub add_misses: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub split_requests: u64,
    pub split_blocks: u64,
    pub check_calls: u64,
    pub check_hits: u64,
    pub resident_len: usize,
    pub capacity: usize,
    pub clock: u64,
}

impl SimMetricsSnapshot {
    /// Fraction of `add` calls that hit, in [0, 1].
    pub fn hit_ratio(&self) -> f64 {
        if self.add_calls == 0 {
            0.0
        } else {
            self.add_hits as f64 / self.add_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_handles_empty_run() {
        assert_eq!(SimMetricsSnapshot::default().hit_ratio(), 0.0);
    }

    #[test]
    fn hit_ratio_divides_hits_by_calls() {
        let snap = SimMetricsSnapshot {
            add_calls: 4,
            add_hits: 1,
            ..Default::default()
        };
        assert_eq!(snap.hit_ratio(), 0.25);
    }
}
