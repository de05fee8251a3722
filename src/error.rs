//! Error types for the replaykit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when simulator configuration parameters are
//!   invalid (e.g. zero capacity, size splitting on a key kind without a
//!   successor).
//! - [`NotFoundError`]: Returned by [`remove`](crate::sim::Simulator::remove)
//!   when the key is not resident. Recoverable by the caller.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` validation walks).
//! - [`BufferOverflow`]: Returned by
//!   [`EvictionLog::try_push`](crate::observe::EvictionLog::try_push) when the
//!   log is full. The recorder escalates this to a panic rather than truncate.
//!
//! ## Example Usage
//!
//! ```
//! use replaykit::builder::SimBuilder;
//!
//! // Fallible constructor for user-configurable parameters
//! let sim = SimBuilder::new(100).try_build::<u64>();
//! assert!(sim.is_ok());
//!
//! // Invalid capacity is caught without panicking
//! let bad = SimBuilder::new(0).try_build::<u64>();
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when simulator configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`SimBuilder::try_build`](crate::builder::SimBuilder::try_build),
/// [`OracleValidator::new`](crate::observe::OracleValidator::new) and by
/// [`add_withsize`](crate::sim::Simulator::add_withsize) for a zero request
/// size. Carries a human-readable description of which parameter failed
/// validation.
///
/// # Example
///
/// ```
/// use replaykit::builder::SimBuilder;
///
/// let err = SimBuilder::new(0).try_build::<u64>().unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// NotFoundError
// ---------------------------------------------------------------------------

/// Error returned by [`remove`](crate::sim::Simulator::remove) when the key is
/// not resident.
///
/// This is an ordinary recoverable result, not a process abort: callers that
/// speculatively invalidate keys are expected to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError(String);

impl NotFoundError {
    /// Creates a new `NotFoundError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NotFoundError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal simulator invariants are violated.
///
/// Produced by `check_invariants` methods on the recency structures
/// (e.g. [`RecencyIndex::check_invariants`](crate::ds::RecencyIndex::check_invariants)).
/// Carries a human-readable description of which invariant failed. A broken
/// invariant detected in the hot path (touch of an absent key, eviction from
/// an empty structure) panics instead: continuing would produce silently wrong
/// statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// BufferOverflow
// ---------------------------------------------------------------------------

/// Error returned when an [`EvictionLog`](crate::observe::EvictionLog) append
/// exceeds the log's fixed capacity.
///
/// The log never resizes behind the caller's back. The recorder treats this as
/// fatal: a truncated eviction sequence would corrupt any offline analysis
/// built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOverflow {
    capacity: usize,
}

impl BufferOverflow {
    /// Creates a new `BufferOverflow` for a log of the given capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the capacity of the log that overflowed.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for BufferOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eviction log capacity exhausted ({} entries)",
            self.capacity
        )
    }
}

impl std::error::Error for BufferOverflow {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
