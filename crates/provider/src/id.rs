//! The closed set of provider identifiers.

use crate::Credentials;
use llm::LlmError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A supported LLM provider.
///
/// The string forms are the identifiers persisted on sessions and
/// messages, so they stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ProviderId {
    /// OpenAI chat completions.
    OpenAi,
    /// DeepSeek chat completions.
    DeepSeek,
    /// Google Gemini generateContent.
    Gemini,
}

impl ProviderId {
    /// All supported providers.
    pub const ALL: [Self; 3] = [Self::OpenAi, Self::DeepSeek, Self::Gemini];

    /// The stable identifier persisted in session and message records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::DeepSeek => "DeepSeek",
            Self::Gemini => "Gemini",
        }
    }

    /// The human-readable label shown in the provider picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "ChatGPT 4",
            Self::DeepSeek => "DeepSeek",
            Self::Gemini => "Gemini",
        }
    }

    /// The API key configured for this provider.
    pub fn key_of<'a>(&self, credentials: &'a Credentials) -> &'a str {
        match self {
            Self::OpenAi => &credentials.openai_key,
            Self::DeepSeek => &credentials.deepseek_key,
            Self::Gemini => &credentials.gemini_key,
        }
    }
}

impl FromStr for ProviderId {
    type Err = LlmError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "OpenAI" => Ok(Self::OpenAi),
            "DeepSeek" => Ok(Self::DeepSeek),
            "Gemini" => Ok(Self::Gemini),
            _ => Err(LlmError::UnknownProvider(id.into())),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
