//! HTTP command gateway - `POST {base}/ai/control`.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{CommandPayload, ControlError, ExecutionResult};
use crate::ports::CommandGateway;

use super::join_url;

pub struct HttpCommandGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpCommandGateway {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: join_url(base_url, "ai/control"),
        }
    }
}

#[async_trait]
impl CommandGateway for HttpCommandGateway {
    async fn execute(&self, payload: &CommandPayload) -> Result<ExecutionResult, ControlError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|err| ControlError::CommandExecution(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ControlError::CommandExecution(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let result: ExecutionResult = response
            .json()
            .await
            .map_err(|err| ControlError::CommandExecution(format!("bad body: {err}")))?;
        debug!(status = ?result.status, "gateway replied");
        Ok(result)
    }
}
