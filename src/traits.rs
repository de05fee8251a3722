//! # Simulator Trait Seams
//!
//! This module defines the trait seams of the simulator: what a key is, which
//! key kinds support size-based admission splitting, and how eviction events
//! are observed without taxing the unobserved hot path.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────────────────────────┐
//!                 │            SimKey                    │
//!                 │                                      │
//!                 │  Eq + Hash + Clone                   │
//!                 │  const SPLITTABLE: bool              │
//!                 └──────────────────┬───────────────────┘
//!                                    │
//!                                    ▼
//!                 ┌──────────────────────────────────────┐
//!                 │            BlockKey                  │
//!                 │                                      │
//!                 │  block_offset(u64) -> Self           │
//!                 │  (derived keys for multi-block       │
//!                 │   admission; integer kinds only)     │
//!                 └──────────────────────────────────────┘
//!
//!                 ┌──────────────────────────────────────┐
//!                 │        EvictionObserver<K>           │
//!                 │                                      │
//!                 │  on_evict(&mut, clock, &K)           │
//!                 │                                      │
//!                 │  impls: ()            no-op default  │
//!                 │         (A, B)        composition    │
//!                 │         OracleValidator              │
//!                 │         EvictionRecorder             │
//!                 └──────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//!
//! The observer is a type parameter of
//! [`Simulator`](crate::sim::Simulator), not a runtime branch: an unobserved
//! simulator is instantiated with `()` and monomorphizes to the bare eviction
//! loop. Attaching instrumentation is therefore a construction-time decision,
//! which also keeps the per-event loop free of level checks.
//!
//! Key types are never interpreted by the simulator; they are only hashed,
//! compared, and (for [`BlockKey`]) offset to derive sub-request keys.

use std::hash::Hash;

/// A cache key as seen by the simulator: identity only, never a value.
///
/// Provided impls cover the two supported key kinds: `u64` (integer) and
/// `String`. `SPLITTABLE` records at the type level whether size-based
/// admission splitting is defined for the kind; the builder rejects a
/// non-zero block unit for kinds where it is not.
///
/// # Example
///
/// ```
/// use replaykit::traits::SimKey;
///
/// assert!(u64::SPLITTABLE);
/// assert!(!String::SPLITTABLE);
/// ```
pub trait SimKey: Eq + Hash + Clone {
    /// Whether size-based admission splitting is defined for this key kind.
    const SPLITTABLE: bool;
}

impl SimKey for u64 {
    const SPLITTABLE: bool = true;
}

impl SimKey for String {
    // No well-defined successor key.
    const SPLITTABLE: bool = false;
}

/// Key kinds that can derive the sub-request keys of a multi-block object.
///
/// A request for `size` bytes at `base` is admitted as `base`,
/// `base.block_offset(1)`, ..., `base.block_offset(n - 1)` where `n` is the
/// block count. Only defined for integer keys.
pub trait BlockKey: SimKey {
    /// Returns the derived key `offset` blocks past `self`.
    fn block_offset(&self, offset: u64) -> Self;
}

impl BlockKey for u64 {
    #[inline]
    fn block_offset(&self, offset: u64) -> Self {
        self.wrapping_add(offset)
    }
}

/// Hook invoked once per eviction, in eviction order.
///
/// `clock` is the simulator's logical time for the request being processed
/// (the clock value before its end-of-request increment). Observers must not
/// assume anything about wall time.
///
/// Implementations compose: `(A, B)` notifies `A` then `B`, and `()` is the
/// no-op used by unobserved simulators.
///
/// # Example
///
/// ```
/// use replaykit::traits::EvictionObserver;
///
/// #[derive(Default)]
/// struct CountEvictions(u64);
///
/// impl EvictionObserver<u64> for CountEvictions {
///     fn on_evict(&mut self, _clock: u64, _key: &u64) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EvictionObserver<K> {
    /// Called after `key` has been removed from the resident set.
    fn on_evict(&mut self, clock: u64, key: &K);
}

impl<K> EvictionObserver<K> for () {
    #[inline]
    fn on_evict(&mut self, _clock: u64, _key: &K) {}
}

impl<K, A, B> EvictionObserver<K> for (A, B)
where
    A: EvictionObserver<K>,
    B: EvictionObserver<K>,
{
    #[inline]
    fn on_evict(&mut self, clock: u64, key: &K) {
        self.0.on_evict(clock, key);
        self.1.on_evict(clock, key);
    }
}

impl<K, O> EvictionObserver<K> for &mut O
where
    O: EvictionObserver<K>,
{
    #[inline]
    fn on_evict(&mut self, clock: u64, key: &K) {
        (**self).on_evict(clock, key);
    }
}
