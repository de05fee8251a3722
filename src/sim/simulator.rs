//! # Trace-Driven LRU Cache Simulator
//!
//! This module provides the replay core: a fixed-capacity resident-set
//! tracker that executes a recency-based admission/eviction policy over a
//! request trace, one request at a time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                      Simulator<K, O>                             │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  RecencyIndex<K>                                           │ │
//!   │   │                                                            │ │
//!   │   │  FxHashMap<K, SlotId>     RecencyList<K> (SlotArena)       │ │
//!   │   │  ┌─────────┬───────┐      front ─► [A] ◄──► [B] ◄── back   │ │
//!   │   │  │  key A  │ id_1  │        LRU                    MRU     │ │
//!   │   │  │  key B  │ id_2  │                                       │ │
//!   │   │  └─────────┴───────┘                                       │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   │                                                                  │
//!   │   config: SimConfig { capacity, block_unit }                     │
//!   │   clock:  u64 (one tick per processed request)                   │
//!   │   observer: O  (monomorphized eviction hook, `()` = none)        │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! ```text
//!   add(k)
//!   ═══════════════════════════════════════════════════════════════════
//!     1. contains(k)?          hit:  touch(k)   → MRU
//!                              miss: insert(k)  → MRU
//!     2. while len > capacity: evict_front() ─► observer.on_evict(T, k')
//!     3. clock += 1            (unconditional, last step)
//!
//!   check(k)
//!   ═══════════════════════════════════════════════════════════════════
//!     membership probe only: no touch, no clock tick, no eviction.
//!     Used for hit-rate probing that must not perturb recency order.
//! ```
//!
//! ## Methods
//!
//! | Method              | Complexity | Description                            |
//! |---------------------|------------|----------------------------------------|
//! | `try_new(config)`   | O(1)       | Build an unobserved simulator          |
//! | `check(&k)`         | O(1)       | Membership probe, side-effect free     |
//! | `add(k)`            | O(1)*      | Process one request, returns hit/miss  |
//! | `add_only(k)`       | O(1)*      | Same as `add`, hit/miss discarded      |
//! | `add_withsize(k,s)` | O(blocks)  | Multi-block admission (integer keys)   |
//! | `remove(&k)`        | O(1)       | Drop a resident key, no clock tick     |
//! | `size()`            | O(1)       | Resident key count                     |
//! | `clock()`           | O(1)       | Requests processed so far              |
//!
//! \* amortized; the eviction loop runs until the resident count is back
//! within capacity, which for single-block admissions is at most one pass.
//!
//! ## Design Rationale
//!
//! - **Deterministic replay, not a live cache.** Each request's outcome
//!   depends on the exact prior sequence, so one instance is strictly
//!   sequential and `&mut self` throughout. Parallelism belongs across
//!   instances (see [`sweep`](crate::sim::sweep)).
//! - **Identity only.** The simulator never stores object values; the
//!   resident set is a set of keys.
//! - **Observers are a type parameter.** Instrumentation (oracle validation,
//!   eviction recording) attaches at construction and monomorphizes away
//!   when absent; the unobserved eviction loop carries no branches for it.
//! - **Eviction loops until within capacity** in every admission path, so
//!   the capacity invariant holds even if multi-block accounting ever puts
//!   the resident count more than one over.
//!
//! ## Example Usage
//!
//! ```
//! use replaykit::builder::SimBuilder;
//!
//! let mut sim = SimBuilder::new(2).try_build::<u64>().unwrap();
//!
//! assert!(!sim.add(1));   // miss
//! assert!(!sim.add(2));   // miss
//! assert!(sim.add(1));    // hit, promotes 1
//! assert!(!sim.add(3));   // miss, evicts 2
//!
//! assert!(sim.check(&1));
//! assert!(!sim.check(&2));
//! assert_eq!(sim.size(), 2);
//! assert_eq!(sim.clock(), 4);
//! ```
//!
//! ## Thread Safety
//!
//! A `Simulator` is **not** shared between threads. It is `Send` when its
//! key and observer are, so independent instances can replay the same trace
//! on separate threads with zero synchronization.

use std::fmt;

use crate::ds::recency_index::RecencyIndex;
use crate::error::{ConfigError, InvariantError, NotFoundError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SimMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SimMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, SimMetricsReadRecorder, SimMetricsRecorder,
};
use crate::sim::config::SimConfig;
use crate::sim::splitter;
use crate::traits::{BlockKey, EvictionObserver, SimKey};

/// Fixed-capacity, recency-based replay core.
///
/// `K` is the key kind (`u64` or `String`); `O` is the eviction observer,
/// `()` by default. See the module docs for the operation flow.
pub struct Simulator<K, O = ()>
where
    K: SimKey,
    O: EvictionObserver<K>,
{
    index: RecencyIndex<K>,
    config: SimConfig,
    clock: u64,
    observer: O,
    #[cfg(feature = "metrics")]
    metrics: SimMetrics,
}

impl<K: SimKey> Simulator<K> {
    /// Creates an unobserved simulator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` enables size-based splitting for
    /// a key kind that cannot derive sub-request keys (e.g. `String`).
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::try_with_observer(config, ())
    }
}

impl<K, O> Simulator<K, O>
where
    K: SimKey,
    O: EvictionObserver<K>,
{
    /// Creates a simulator with an attached eviction observer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` enables size-based splitting for
    /// a key kind that cannot derive sub-request keys.
    pub fn try_with_observer(config: SimConfig, observer: O) -> Result<Self, ConfigError> {
        if config.block_unit() > 0 && !K::SPLITTABLE {
            return Err(ConfigError::new(
                "block unit requires an integer key kind; string keys have no successor",
            ));
        }
        Ok(Self {
            index: RecencyIndex::with_capacity(config.capacity()),
            config,
            clock: 0,
            observer,
            #[cfg(feature = "metrics")]
            metrics: SimMetrics::default(),
        })
    }

    /// Membership probe. Never touches, never ticks the clock, never evicts.
    ///
    /// Any number of `check` calls between two `add` calls leaves subsequent
    /// hit/miss outcomes and eviction order unchanged.
    #[inline]
    pub fn check(&self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_check_call();

        let hit = self.index.contains(key);

        #[cfg(feature = "metrics")]
        if hit {
            self.metrics.record_check_hit();
        }

        hit
    }

    /// Processes one request. Returns `true` on a hit.
    ///
    /// A hit promotes the key to the MRU position; a miss admits it there.
    /// Either way the eviction loop then restores the capacity bound and the
    /// clock advances by one as the final step.
    #[inline]
    pub fn add(&mut self, key: K) -> bool {
        let hit = self.admit(key);
        self.clock += 1;
        hit
    }

    /// Processes one request, discarding the hit/miss outcome.
    ///
    /// Identical eviction semantics to [`add`](Self::add); provided for call
    /// sites that do not consume the boolean, notably the sub-requests of a
    /// multi-block admission.
    #[inline]
    pub fn add_only(&mut self, key: K) {
        let _ = self.add(key);
    }

    /// Removes a resident key without ticking the clock or notifying the
    /// observer.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if `key` is not resident.
    pub fn remove(&mut self, key: &K) -> Result<(), NotFoundError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        if !self.index.remove(key) {
            return Err(NotFoundError::new("remove of a key that is not resident"));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Ok(())
    }

    /// Returns the number of resident keys.
    #[inline]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Returns the configured capacity, in blocks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the configured block unit size; 0 means splitting is disabled.
    #[inline]
    pub fn block_unit(&self) -> u64 {
        self.config.block_unit()
    }

    /// Returns the number of requests processed so far.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Returns a shared reference to the attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns a mutable reference to the attached observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the simulator and returns the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Iterates over resident keys from LRU to MRU.
    pub fn resident(&self) -> impl Iterator<Item = &K> {
        self.index.iter()
    }

    /// Validates the resident-set invariants: index/list bijection and
    /// resident count within capacity.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.index.check_invariants()?;
        if self.index.len() > self.config.capacity() {
            return Err(InvariantError::new(format!(
                "resident count {} exceeds capacity {}",
                self.index.len(),
                self.config.capacity()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("simulator invariant violated: {}", err);
        }
    }

    fn admit(&mut self, key: K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();

        let hit = self.index.contains(&key);
        if hit {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_hit();

            self.index.touch(&key);
        } else {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_miss();

            self.index.insert(key);
        }

        while self.index.len() > self.config.capacity() {
            let evicted = self.index.evict_front();

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            self.observer.on_evict(self.clock, &evicted);
        }

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        hit
    }
}

impl<K, O> Simulator<K, O>
where
    K: BlockKey,
    O: EvictionObserver<K>,
{
    /// Processes a variable-size request as 1..N block-unit sub-requests.
    ///
    /// The returned hit/miss reflects the base key only; the derived keys
    /// are admitted with [`add_only`](Self::add_only). With a block unit of
    /// 0 the request passes through as a single `add`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is 0.
    pub fn add_withsize(&mut self, key: K, size: u64) -> Result<bool, ConfigError> {
        #[cfg(feature = "metrics")]
        let blocks_before = self.clock;

        let hit = splitter::admit_sized(self, key, size)?;

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_split_request();
            self.metrics.record_split_blocks(self.clock - blocks_before);
        }

        Ok(hit)
    }
}

#[cfg(feature = "metrics")]
impl<K, O> Simulator<K, O>
where
    K: SimKey,
    O: EvictionObserver<K>,
{
    pub fn metrics_snapshot(&self) -> SimMetricsSnapshot {
        SimMetricsSnapshot {
            add_calls: self.metrics.add_calls,
            add_hits: self.metrics.add_hits,
            add_misses: self.metrics.add_misses,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            split_requests: self.metrics.split_requests,
            split_blocks: self.metrics.split_blocks,
            check_calls: self.metrics.check_calls.get(),
            check_hits: self.metrics.check_hits.get(),
            resident_len: self.index.len(),
            capacity: self.config.capacity(),
            clock: self.clock,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, O> MetricsSnapshotProvider<SimMetricsSnapshot> for Simulator<K, O>
where
    K: SimKey,
    O: EvictionObserver<K>,
{
    fn snapshot(&self) -> SimMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, O> fmt::Debug for Simulator<K, O>
where
    K: SimKey,
    O: EvictionObserver<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .field("block_unit", &self.block_unit())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
