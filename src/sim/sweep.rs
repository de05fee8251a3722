//! Miss-ratio sweeps across independent simulator instances.
//!
//! The natural unit of parallelism in trace replay is the instance: each
//! simulator owns its whole resident set and shares no mutable state with
//! any other, so sweeping a parameter (here: capacity) over the same trace
//! needs zero synchronization. [`sweep`] runs the instances sequentially;
//! [`sweep_parallel`] gives each one its own scoped thread.
//!
//! ```text
//!   trace ──┬──► Simulator(capacity c1) ──► SweepPoint { c1, hits, misses }
//!           ├──► Simulator(capacity c2) ──► SweepPoint { c2, ... }
//!           └──► Simulator(capacity c3) ──► SweepPoint { c3, ... }
//! ```
//!
//! The resulting points form a miss-ratio curve over capacity.

use crate::error::ConfigError;
use crate::sim::config::SimConfig;
use crate::sim::simulator::Simulator;
use crate::traits::EvictionObserver;

/// One trace entry: a key plus an optional object size in bytes.
///
/// A `size` of 0 means "unsized": the request is played as a plain `add`
/// regardless of the simulator's block unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub key: u64,
    pub size: u64,
}

impl Request {
    /// An unsized request for `key`.
    pub fn new(key: u64) -> Self {
        Self { key, size: 0 }
    }

    /// A request for `size` bytes at `key`.
    pub fn sized(key: u64, size: u64) -> Self {
        Self { key, size }
    }
}

/// Hit/miss totals for one capacity in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl SweepPoint {
    /// Total requests replayed for this point.
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of requests served from the resident set, in [0, 1].
    pub fn hit_ratio(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// `1 - hit_ratio()`, the usual y-axis of a miss-ratio curve.
    pub fn miss_ratio(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }
}

/// Replays `trace` through `sim`, returning `(hits, misses)`.
///
/// Sized requests go through the admission splitter; unsized ones through
/// plain `add`. Sub-requests of a split do not count toward hits or misses,
/// matching the rule that a multi-block request has exactly one externally
/// visible outcome.
///
/// # Errors
///
/// Propagates [`ConfigError`] from sized admissions. Traces built from
/// [`Request::new`] and [`Request::sized`] with non-zero sizes never hit
/// this path.
pub fn replay<O>(
    sim: &mut Simulator<u64, O>,
    trace: &[Request],
) -> Result<(u64, u64), ConfigError>
where
    O: EvictionObserver<u64>,
{
    let mut hits = 0u64;
    let mut misses = 0u64;
    for request in trace {
        let hit = if request.size == 0 {
            sim.add(request.key)
        } else {
            sim.add_withsize(request.key, request.size)?
        };
        if hit {
            hits += 1;
        } else {
            misses += 1;
        }
    }
    Ok((hits, misses))
}

/// Replays `trace` once per capacity, sequentially.
///
/// # Errors
///
/// Returns [`ConfigError`] if any capacity is 0 or the block unit is
/// invalid for the trace.
pub fn sweep(
    capacities: &[usize],
    block_unit: u64,
    trace: &[Request],
) -> Result<Vec<SweepPoint>, ConfigError> {
    let configs = validate_capacities(capacities, block_unit)?;
    configs
        .into_iter()
        .map(|config| run_point(config, trace))
        .collect()
}

/// Replays `trace` once per capacity, one scoped thread per instance.
///
/// Instances share nothing mutable; the only join point is collecting the
/// finished sweep points, which come back in capacity-argument order.
///
/// # Errors
///
/// Returns [`ConfigError`] under the same conditions as [`sweep`].
pub fn sweep_parallel(
    capacities: &[usize],
    block_unit: u64,
    trace: &[Request],
) -> Result<Vec<SweepPoint>, ConfigError> {
    // Reject bad configs before spawning anything.
    let configs = validate_capacities(capacities, block_unit)?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .into_iter()
            .map(|config| scope.spawn(move || run_point(config, trace)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("sweep worker panicked"))
            .collect()
    })
}

fn validate_capacities(
    capacities: &[usize],
    block_unit: u64,
) -> Result<Vec<SimConfig>, ConfigError> {
    if capacities.is_empty() {
        return Err(ConfigError::new("sweep requires at least one capacity"));
    }
    capacities
        .iter()
        .map(|&capacity| SimConfig::new(capacity, block_unit))
        .collect()
}

fn run_point(config: SimConfig, trace: &[Request]) -> Result<SweepPoint, ConfigError> {
    let capacity = config.capacity();
    let mut sim: Simulator<u64> = Simulator::try_new(config)?;
    let (hits, misses) = replay(&mut sim, trace)?;
    Ok(SweepPoint {
        capacity,
        hits,
        misses,
    })
}
