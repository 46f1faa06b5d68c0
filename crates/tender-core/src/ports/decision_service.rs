//! DecisionService port - the external reasoner.
//!
//! The service is an opaque collaborator: it receives a natural-language
//! prompt and replies with free text. Finding and parsing the decision
//! object embedded in that text is the controller's job, not the port's.

use async_trait::async_trait;

use crate::domain::ControlError;

#[async_trait]
pub trait DecisionService: Send + Sync {
    /// Submit the prompt and return the reasoner's raw textual reply.
    ///
    /// Fails with [`ControlError::DecisionRequest`] when the service is
    /// unreachable or refuses the request, and with
    /// [`ControlError::DecisionParse`] when the reply envelope carries no
    /// text at all.
    async fn propose(&self, prompt: &str) -> Result<String, ControlError>;
}
