//! The LLM implementation.

use crate::{ENDPOINT, OpenAI, Request};
use llm::{
    ChatMessage, Completion, LLM, LlmError, decode,
    reqwest::{
        Client,
        header::{self, HeaderMap},
    },
};

/// Returned when a well-formed response carries zero choices.
const NO_RESPONSE: &str = "No response from OpenAI";

impl LLM for OpenAI {
    fn new(client: Client, key: &str) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self { client, headers })
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let body = Request::new(messages);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);
        let response = self
            .client
            .post(ENDPOINT)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        decode::<Completion>(response).await?.into_text(NO_RESPONSE)
    }
}
