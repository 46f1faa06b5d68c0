//! Domain model (snapshots, decisions, log, errors).
//!
//! Everything here is architecture-agnostic: plain values and pure
//! functions, no I/O and no runtime assumptions. The loop in `app` and
//! the adapters in `http` are the only consumers.

pub mod command;
pub mod decision;
pub mod errors;
pub mod extract;
pub mod log;
pub mod snapshot;
pub mod validate;

pub use self::command::{CommandPayload, ExecutionResult, ExecutionStatus};
pub use self::decision::Decision;
pub use self::errors::ControlError;
pub use self::extract::extract_json_object;
pub use self::log::{ControlStats, DecisionLog, LogEntry, DEFAULT_MAX_LOG_SIZE};
pub use self::snapshot::{ActuatorStates, PumpState, SensorReading, StatusSnapshot};
pub use self::validate::validate;
