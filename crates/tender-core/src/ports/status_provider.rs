//! StatusProvider port - current sensor and actuator readings.

use async_trait::async_trait;

use crate::domain::{ControlError, StatusSnapshot};

/// Source of point-in-time system status, polled once per cycle.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Fetch a fresh snapshot.
    ///
    /// Fails with [`ControlError::StatusFetch`] on transport failure or a
    /// non-success response.
    async fn fetch(&self) -> Result<StatusSnapshot, ControlError>;
}
