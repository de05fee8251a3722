use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{SimMetricsReadRecorder, SimMetricsRecorder};

/// Raw counters for one simulator instance.
///
/// `check_*` counters use [`MetricsCell`] because the membership probe takes
/// `&self`; everything else is written on the `&mut self` request path.
#[derive(Debug, Default)]
pub struct SimMetrics {
    pub add_calls: u64,
    pub add_hits: u64,
    pub add_misses: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub split_requests: u64,
    pub split_blocks: u64,
    pub check_calls: MetricsCell,
    pub check_hits: MetricsCell,
}

impl SimMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimMetricsRecorder for SimMetrics {
    #[inline]
    fn record_add_call(&mut self) {
        self.add_calls += 1;
    }

    #[inline]
    fn record_add_hit(&mut self) {
        self.add_hits += 1;
    }

    #[inline]
    fn record_add_miss(&mut self) {
        self.add_misses += 1;
    }

    #[inline]
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    #[inline]
    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }

    #[inline]
    fn record_split_request(&mut self) {
        self.split_requests += 1;
    }

    #[inline]
    fn record_split_blocks(&mut self, blocks: u64) {
        self.split_blocks += blocks;
    }
}

impl SimMetricsReadRecorder for SimMetrics {
    #[inline]
    fn record_check_call(&self) {
        self.check_calls.incr();
    }

    #[inline]
    fn record_check_hit(&self) {
        self.check_hits.incr();
    }
}
