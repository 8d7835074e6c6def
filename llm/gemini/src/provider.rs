//! The LLM implementation.

use crate::{ENDPOINT, Gemini, GenerateResponse, Request};
use llm::{ChatMessage, LLM, LlmError, decode, reqwest::Client};

impl LLM for Gemini {
    fn new(client: Client, key: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client,
            key: key.into(),
        })
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let body = Request::new(messages);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);
        let response = self
            .client
            .post(ENDPOINT)
            .query(&[("key", self.key.as_str())])
            .json(&body)
            .send()
            .await?;

        decode::<GenerateResponse>(response).await?.into_text()
    }
}
