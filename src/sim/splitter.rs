//! Size-aware admission splitting.
//!
//! A cache with per-block capacity accounting sees a `size`-byte object as
//! `ceil(size / block_unit)` single-block entries. This module derives that
//! run of sub-requests from the base key and plays it through the simulator:
//! one `add` for the base key (whose hit/miss is the request's result),
//! then `add_only` for each derived key.
//!
//! Only integer key kinds support splitting; the builder rejects the
//! inconsistent configuration up front, so this module can assume
//! [`BlockKey`] is available.

use crate::error::ConfigError;
use crate::sim::simulator::Simulator;
use crate::traits::{BlockKey, EvictionObserver};

/// Returns the number of block-unit sub-requests for a `size`-byte object.
///
/// # Errors
///
/// Returns [`ConfigError`] if `size` is 0; a zero-byte request has no
/// well-defined block count and almost always indicates a trace parsing bug
/// upstream.
///
/// # Panics
///
/// Panics if `block_unit` is 0. Callers reach this function only with
/// splitting enabled.
pub fn block_count(size: u64, block_unit: u64) -> Result<u64, ConfigError> {
    if size == 0 {
        return Err(ConfigError::new("request size must be > 0"));
    }
    debug_assert!(block_unit > 0);
    Ok(size.div_ceil(block_unit))
}

/// Plays a `size`-byte request for `base` through `sim`.
///
/// With splitting disabled (`block_unit == 0`) the request passes straight
/// through as a single `add`. Otherwise the base key is added first and its
/// hit/miss returned, followed by the derived keys `base + 1 .. base + n-1`.
///
/// # Errors
///
/// Returns [`ConfigError`] if `size` is 0.
pub fn admit_sized<K, O>(
    sim: &mut Simulator<K, O>,
    base: K,
    size: u64,
) -> Result<bool, ConfigError>
where
    K: BlockKey,
    O: EvictionObserver<K>,
{
    if size == 0 {
        return Err(ConfigError::new("request size must be > 0"));
    }

    let unit = sim.block_unit();
    if unit == 0 {
        return Ok(sim.add(base));
    }

    let blocks = block_count(size, unit)?;
    let hit = sim.add(base.clone());
    for i in 1..blocks {
        sim.add_only(base.block_offset(i));
    }
    Ok(hit)
}
