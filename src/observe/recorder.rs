//! Ordered capture of evicted keys for offline analysis.
//!
//! The caller pre-sizes an [`EvictionLog`] to the expected eviction count
//! for the trace (e.g. reuse-distance studies know it from a prior pass)
//! and lends it to an [`EvictionRecorder`] for the run. The log's capacity
//! is a hard bound: an append past it fails rather than reallocating or
//! truncating, because a silently incomplete eviction sequence poisons any
//! analysis built on it.

use crate::error::BufferOverflow;
use crate::traits::EvictionObserver;

/// Fixed-capacity, append-only sequence of evicted keys.
///
/// # Example
///
/// ```
/// use replaykit::observe::EvictionLog;
///
/// let mut log: EvictionLog<u64> = EvictionLog::with_capacity(2);
/// log.try_push(1).unwrap();
/// log.try_push(2).unwrap();
/// assert!(log.try_push(3).is_err());
/// assert_eq!(log.entries(), &[1, 2]);
/// ```
#[derive(Debug)]
pub struct EvictionLog<K> {
    entries: Vec<K>,
    capacity: usize,
}

impl<K> EvictionLog<K> {
    /// Creates an empty log that can hold at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `key`, failing when the log is full.
    ///
    /// # Errors
    ///
    /// Returns [`BufferOverflow`] if `len() == capacity()`. The log is left
    /// unchanged.
    pub fn try_push(&mut self, key: K) -> Result<(), BufferOverflow> {
        if self.entries.len() == self.capacity {
            return Err(BufferOverflow::new(self.capacity));
        }
        self.entries.push(key);
        Ok(())
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recorded entries, in eviction order.
    pub fn entries(&self) -> &[K] {
        &self.entries
    }

    /// Consumes the log and returns the recorded sequence.
    pub fn into_inner(self) -> Vec<K> {
        self.entries
    }
}

/// Observer that appends every evicted key into a borrowed [`EvictionLog`].
///
/// The log stays caller-owned; the recorder only borrows it for the run.
/// Overflow is fatal by design (see module docs).
///
/// # Example
///
/// ```
/// use replaykit::builder::SimBuilder;
/// use replaykit::observe::{EvictionLog, EvictionRecorder};
///
/// let mut log = EvictionLog::with_capacity(8);
/// {
///     let mut sim = SimBuilder::new(1)
///         .try_build_with_observer::<u64, _>(EvictionRecorder::new(&mut log))
///         .unwrap();
///     for key in [1u64, 2, 3] {
///         sim.add(key);
///     }
/// }
/// assert_eq!(log.entries(), &[1, 2]);
/// ```
#[derive(Debug)]
pub struct EvictionRecorder<'a, K> {
    log: &'a mut EvictionLog<K>,
}

impl<'a, K> EvictionRecorder<'a, K> {
    /// Creates a recorder appending into `log`.
    pub fn new(log: &'a mut EvictionLog<K>) -> Self {
        Self { log }
    }

    /// Number of entries recorded so far.
    pub fn recorded(&self) -> usize {
        self.log.len()
    }
}

impl<K: Clone> EvictionObserver<K> for EvictionRecorder<'_, K> {
    fn on_evict(&mut self, _clock: u64, key: &K) {
        if let Err(err) = self.log.try_push(key.clone()) {
            panic!("{}", err);
        }
    }
}
