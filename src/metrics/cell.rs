use std::cell::Cell;

/// A metrics-only cell for counters updated through `&self` methods.
///
/// A simulator instance is strictly single-threaded, so plain `Cell`
/// interior mutability is sufficient; the cell makes the simulator `!Sync`,
/// which matches the replay model (instances are never shared).
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
