//! Error taxonomy for the control loop.
//!
//! Every variant is contained within a single polling cycle: the loop
//! logs it and proceeds to the next wait. None of these terminate the
//! loop. Construction-time failures are a different animal and live in
//! [`crate::app::builder::BuildError`].
//!
//! Validation rejection is deliberately absent here: an invalid decision
//! is a silent no-op path (`validate` returns `None`), not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    /// Status endpoint unreachable or returned a non-success response.
    #[error("status fetch failed: {0}")]
    StatusFetch(String),

    /// The decision service could not be reached or refused the request.
    #[error("decision request failed: {0}")]
    DecisionRequest(String),

    /// The reply carried no parseable decision object.
    #[error("decision parse failed: {0}")]
    DecisionParse(String),

    /// The command gateway could not be reached or refused the command.
    #[error("command execution failed: {0}")]
    CommandExecution(String),
}
