//! CommandGateway port - applies validated commands to the hardware.

use async_trait::async_trait;

use crate::domain::{CommandPayload, ControlError, ExecutionResult};

#[async_trait]
pub trait CommandGateway: Send + Sync {
    /// Submit a command and return the gateway's verdict verbatim.
    ///
    /// A reachable gateway that reports `status: failed` is a successful
    /// call (the verdict gets logged); [`ControlError::CommandExecution`]
    /// is reserved for transport failures and non-success responses.
    async fn execute(&self, payload: &CommandPayload) -> Result<ExecutionResult, ControlError>;
}
