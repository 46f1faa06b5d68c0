//! Read-only views for the presentation layer.

use serde::Serialize;

use crate::domain::{ControlStats, StatusSnapshot};

/// Point-in-time view of the controller. Snapshots are copies: handing
/// one out never exposes mutable controller state.
#[derive(Debug, Clone, Serialize)]
pub struct ControllerStatus {
    pub running: bool,
    pub poll_interval_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<StatusSnapshot>,

    pub stats: ControlStats,
}
