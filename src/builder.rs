//! Unified construction surface for simulators.
//!
//! Resolves the key kind and validates parameters in one place, so the
//! simulator core never sees an inconsistent configuration. This replaces
//! ad-hoc per-call-site parameter structs with a single typed entry point.
//!
//! ## Example
//!
//! ```
//! use replaykit::builder::SimBuilder;
//!
//! let mut sim = SimBuilder::new(1024).block_unit(4096).try_build::<u64>().unwrap();
//! assert!(!sim.add(1));
//! assert!(sim.add(1));
//! ```

use crate::error::ConfigError;
use crate::sim::config::SimConfig;
use crate::sim::simulator::Simulator;
use crate::traits::{EvictionObserver, SimKey};

/// Builder for [`Simulator`] instances.
#[derive(Debug, Clone, Copy)]
pub struct SimBuilder {
    capacity: usize,
    block_unit: u64,
}

impl SimBuilder {
    /// Creates a builder for a simulator holding at most `capacity` blocks.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            block_unit: 0,
        }
    }

    /// Sets the block unit size in bytes, enabling size-based admission
    /// splitting. 0 (the default) disables splitting.
    pub fn block_unit(mut self, block_unit: u64) -> Self {
        self.block_unit = block_unit;
        self
    }

    /// Builds an unobserved simulator for key kind `K`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is 0, or if a non-zero block
    /// unit is combined with a key kind that does not support splitting.
    ///
    /// # Example
    ///
    /// ```
    /// use replaykit::builder::SimBuilder;
    ///
    /// // Integer keys support splitting
    /// assert!(SimBuilder::new(100).block_unit(512).try_build::<u64>().is_ok());
    ///
    /// // String keys have no successor key
    /// assert!(SimBuilder::new(100).block_unit(512).try_build::<String>().is_err());
    /// ```
    pub fn try_build<K: SimKey>(self) -> Result<Simulator<K>, ConfigError> {
        let config = SimConfig::new(self.capacity, self.block_unit)?;
        Simulator::try_new(config)
    }

    /// Builds a simulator with an attached eviction observer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`try_build`](Self::try_build).
    pub fn try_build_with_observer<K, O>(self, observer: O) -> Result<Simulator<K, O>, ConfigError>
    where
        K: SimKey,
        O: EvictionObserver<K>,
    {
        let config = SimConfig::new(self.capacity, self.block_unit)?;
        Simulator::try_with_observer(config, observer)
    }
}
