//! OpenAI-style chat completion response union.
//!
//! Providers return either a success shape with choices or an error
//! payload, and on rare occasions both. The error payload always takes
//! precedence.

use crate::{ChatMessage, LlmError};
use serde::Deserialize;
use serde_json::Value;

/// A chat completions response, tolerant of both success and error shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    /// The list of completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Provider-reported error payload, if any.
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl Completion {
    /// Extract the reply text.
    ///
    /// An error payload wins over any success field. A well-formed
    /// response with zero choices is a soft failure and yields the
    /// provider's fixed `fallback` string instead of an error.
    pub fn into_text(self, fallback: &str) -> Result<String, LlmError> {
        if let Some(error) = self.error {
            return Err(LlmError::Provider(error.detail()));
        }
        Ok(self
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_else(|| fallback.to_owned()))
    }
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChatMessage,
}

/// A provider-reported error payload.
///
/// Field coverage is the union of the OpenAI-style shape
/// (`message`/`type`/`code`) and the Gemini shape
/// (`code`/`message`/`status`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,

    /// Machine-readable error type.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Canonical status string (Gemini).
    #[serde(default)]
    pub status: Option<String>,

    /// Provider-specific error code.
    #[serde(default)]
    pub code: Option<Value>,
}

impl ApiError {
    /// The most specific available detail: message, else status or type,
    /// else a generic fallback.
    pub fn detail(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.status)
            .or(self.kind)
            .unwrap_or_else(|| "unknown provider error".to_owned())
    }
}
