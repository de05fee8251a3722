//! # Metrics Trait Seams
//!
//! Separates *recording*, *snapshotting*, and *export* responsibilities into
//! small, composable traits, so monitoring concerns never couple to the
//! replay core's logic.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │ SimMetricsRecorder           │   │ SimMetricsReadRecorder       │
//!   │ (&mut self hot-path writes)  │   │ (&self probes, MetricsCell)  │
//!   └──────────────────────────────┘   └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │   │ MetricsExporter<S>           │
//!   │ (bench/test)                 │   │ (monitoring)                 │
//!   └──────────────────────────────┘   └──────────────────────────────┘
//! ```

/// Counters written on the `&mut self` request path.
pub trait SimMetricsRecorder {
    fn record_add_call(&mut self);
    fn record_add_hit(&mut self);
    fn record_add_miss(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_split_request(&mut self);
    fn record_split_blocks(&mut self, blocks: u64);
}

/// Counters written by `&self` probes (uses interior mutability).
///
/// `check` takes `&self` by contract, so its counters go through
/// [`MetricsCell`](crate::metrics::cell::MetricsCell) rather than a mutable
/// recorder.
pub trait SimMetricsReadRecorder {
    fn record_check_call(&self);
    fn record_check_hit(&self);
}

/// Read access to a point-in-time metrics snapshot.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a metrics snapshot to a monitoring system.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
