//! Per-interval validation of eviction choices against an optimal trace.
//!
//! The oracle trace is a precomputed sequence of the keys an optimal
//! ("furthest next use") policy would have evicted, one entry per eviction
//! event. The validator consumes one entry per observed eviction and counts
//! disagreements, aggregated over caller-defined spans of logical time.
//!
//! ```text
//!   breakpoints:   t0        t1        t2        t3
//!                  ├─────────┼─────────┼─────────┤
//!   evictions:       E  E  E    E           E  E
//!   trace:           O  O  O    O           O  O       (consumed in order)
//!                  ╰────┬────╯╰────┬────╯╰────┬────╯
//!                   rate[0]    rate[1]    rate[2] = mismatches / events
//! ```
//!
//! An interval with no evictions reports rate 0. The validator never alters
//! simulator behavior; it only observes.

use crate::error::ConfigError;
use crate::traits::EvictionObserver;

/// Eviction-choice mismatch rates per breakpoint interval.
///
/// Borrows the caller-owned oracle trace and breakpoint sequence for the
/// duration of the run; call [`finish`](Self::finish) afterwards to close
/// trailing intervals and take the rates.
///
/// # Example
///
/// ```
/// use replaykit::builder::SimBuilder;
/// use replaykit::observe::OracleValidator;
///
/// let oracle = [1u64, 2];
/// let breakpoints = [0u64, 4, 8];
/// let validator = OracleValidator::new(&oracle, &breakpoints).unwrap();
///
/// let mut sim = SimBuilder::new(2)
///     .try_build_with_observer::<u64, _>(validator)
///     .unwrap();
/// for key in [1u64, 2, 3, 4, 1, 2] {
///     sim.add(key);
/// }
///
/// let rates = sim.into_observer().finish();
/// assert_eq!(rates.len(), 2);
/// assert!(rates.iter().all(|r| (0.0..=1.0).contains(r)));
/// ```
#[derive(Debug)]
pub struct OracleValidator<'t, K> {
    trace: &'t [K],
    breakpoints: &'t [u64],
    cursor: usize,
    mismatches: u64,
    events: u64,
    rates: Vec<f64>,
}

impl<'t, K: PartialEq> OracleValidator<'t, K> {
    /// Creates a validator over a caller-owned oracle trace and ascending
    /// breakpoint sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if fewer than two breakpoints are given (no
    /// interval to measure) or if they are not strictly ascending.
    pub fn new(trace: &'t [K], breakpoints: &'t [u64]) -> Result<Self, ConfigError> {
        if breakpoints.len() < 2 {
            return Err(ConfigError::new(
                "oracle validation requires at least two breakpoints",
            ));
        }
        if !breakpoints.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::new(
                "oracle breakpoints must be strictly ascending",
            ));
        }
        Ok(Self {
            trace,
            breakpoints,
            cursor: 0,
            mismatches: 0,
            events: 0,
            rates: Vec::with_capacity(breakpoints.len() - 1),
        })
    }

    /// Number of measurement intervals, `breakpoints.len() - 1`.
    pub fn interval_count(&self) -> usize {
        self.breakpoints.len() - 1
    }

    /// Rates of the intervals closed so far.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of oracle trace entries consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Closes all remaining intervals (rate 0 when empty) and returns the
    /// full rate sequence, one entry per interval.
    pub fn finish(mut self) -> Vec<f64> {
        while self.rates.len() < self.interval_count() {
            self.close_interval();
        }
        self.rates
    }

    fn close_interval(&mut self) {
        if self.rates.len() == self.interval_count() {
            return;
        }
        let rate = if self.events == 0 {
            0.0
        } else {
            self.mismatches as f64 / self.events as f64
        };
        self.rates.push(rate);
        self.mismatches = 0;
        self.events = 0;
    }
}

impl<K: PartialEq> EvictionObserver<K> for OracleValidator<'_, K> {
    fn on_evict(&mut self, clock: u64, key: &K) {
        // Close every interval this event's timestamp has crossed; an event
        // landing exactly on a breakpoint belongs to the interval it opens.
        while self.rates.len() < self.interval_count()
            && clock >= self.breakpoints[self.rates.len() + 1]
        {
            self.close_interval();
        }

        self.events += 1;
        // A trace shorter than the eviction sequence counts as mismatching
        // from its end onward.
        match self.trace.get(self.cursor) {
            Some(expected) if expected == key => {},
            _ => self.mismatches += 1,
        }
        self.cursor += 1;
    }
}
