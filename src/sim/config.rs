//! Immutable simulator parameters.

use crate::error::ConfigError;

/// Fixed parameters of one simulator instance.
///
/// Set once at construction and never mutated. The key kind is not part of
/// the config value; it is the simulator's type parameter, resolved at
/// construction by [`SimBuilder`](crate::builder::SimBuilder).
///
/// # Example
///
/// ```
/// use replaykit::sim::SimConfig;
///
/// let config = SimConfig::new(1024, 4096).unwrap();
/// assert_eq!(config.capacity(), 1024);
/// assert_eq!(config.block_unit(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    capacity: usize,
    block_unit: u64,
}

impl SimConfig {
    /// Creates a config with the given capacity (in blocks) and block unit
    /// size (in bytes; 0 disables size-based splitting).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is 0: a simulator that can hold
    /// nothing would evict every admission immediately and report a 0% hit
    /// ratio for any trace, which is never what a sweep intends.
    pub fn new(capacity: usize, block_unit: u64) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self {
            capacity,
            block_unit,
        })
    }

    /// Maximum number of resident keys, in blocks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per block; 0 means size-based splitting is disabled.
    #[inline]
    pub fn block_unit(&self) -> u64 {
        self.block_unit
    }
}
