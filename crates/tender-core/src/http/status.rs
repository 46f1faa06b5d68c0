//! HTTP status provider - `GET {base}/ai/status`.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ControlError, StatusSnapshot};
use crate::ports::StatusProvider;

use super::join_url;

pub struct HttpStatusProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusProvider {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: join_url(base_url, "ai/status"),
        }
    }
}

#[async_trait]
impl StatusProvider for HttpStatusProvider {
    async fn fetch(&self) -> Result<StatusSnapshot, ControlError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| ControlError::StatusFetch(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ControlError::StatusFetch(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let snapshot: StatusSnapshot = response
            .json()
            .await
            .map_err(|err| ControlError::StatusFetch(format!("bad body: {err}")))?;
        debug!(sensors = snapshot.sensors.len(), "status retrieved");
        Ok(snapshot)
    }
}
