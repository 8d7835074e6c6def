//! The response body for the Gemini API.

use crate::Content;
use llm::{ApiError, LlmError};
use serde::Deserialize;

/// Returned when a well-formed response carries zero candidates.
const NO_RESPONSE: &str = "No response from Gemini";

/// A generateContent response, tolerant of both success and error shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Provider-reported error payload, if any.
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The generated turn.
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped.
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GenerateResponse {
    /// Extract the reply text.
    ///
    /// An error payload wins over any success field. Zero candidates (or
    /// a candidate with no text part) is a soft failure and yields the
    /// fixed fallback string.
    pub fn into_text(self) -> Result<String, LlmError> {
        if let Some(error) = self.error {
            return Err(LlmError::Provider(error.detail()));
        }
        Ok(self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_else(|| NO_RESPONSE.to_owned()))
    }
}
