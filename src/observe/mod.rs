pub mod oracle;
pub mod recorder;

pub use oracle::OracleValidator;
pub use recorder::{EvictionLog, EvictionRecorder};
