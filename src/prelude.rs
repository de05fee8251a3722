pub use crate::builder::SimBuilder;
pub use crate::ds::{RecencyIndex, RecencyList, SlotArena, SlotId};
pub use crate::error::{BufferOverflow, ConfigError, InvariantError, NotFoundError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::SimMetricsSnapshot;
pub use crate::observe::{EvictionLog, EvictionRecorder, OracleValidator};
pub use crate::sim::{Request, SimConfig, Simulator, SweepPoint, replay, sweep, sweep_parallel};
pub use crate::traits::{BlockKey, EvictionObserver, SimKey};
