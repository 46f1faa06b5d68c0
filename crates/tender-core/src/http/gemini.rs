//! Gemini decision service - the external reasoner over HTTP.
//!
//! Sends the prompt to the Generative Language API and returns the first
//! candidate's text verbatim; JSON extraction happens upstream in the
//! controller, not here.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::app::BuildError;
use crate::domain::ControlError;
use crate::ports::DecisionService;

/// Default generateContent endpoint.
pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Fails fast with [`BuildError::MissingApiKey`] on an empty key;
    /// a keyless client would only ever produce failed cycles.
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Result<Self, BuildError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(BuildError::MissingApiKey);
        }
        Ok(Self {
            client,
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint (stub servers in tests,
    /// regional endpoints in deployment).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GeminiReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl DecisionService for GeminiClient {
    async fn propose(&self, prompt: &str) -> Result<String, ControlError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.5,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024,
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| ControlError::DecisionRequest(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ControlError::DecisionRequest(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let reply: GeminiReply = response
            .json()
            .await
            .map_err(|err| ControlError::DecisionRequest(format!("bad body: {err}")))?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ControlError::DecisionParse("reply carried no text".to_string()))?;

        debug!(chars = text.len(), "reasoner replied");
        Ok(text)
    }
}
