//! Provider implementation.
//!
//! Unified `Provider` enum with enum dispatch over concrete backends.

use crate::{Credentials, ProviderId};
use deepseek::DeepSeek;
use gemini::Gemini;
use llm::{ChatMessage, Client, LLM, LlmError};
use openai::OpenAI;

/// Unified LLM provider enum.
///
/// Adapters are stateless aside from the injected credential and
/// transport, so a resolved variant is functionally equivalent to any
/// other resolved from the same inputs.
#[derive(Clone)]
pub enum Provider {
    /// OpenAI API.
    OpenAi(OpenAI),
    /// DeepSeek API.
    DeepSeek(DeepSeek),
    /// Gemini API.
    Gemini(Gemini),
}

/// Construct the adapter for a provider identifier.
///
/// Fails with [`LlmError::UnknownProvider`] when the identifier matches
/// none of the supported set.
pub fn resolve(id: &str, credentials: &Credentials, client: Client) -> Result<Provider, LlmError> {
    let id: ProviderId = id.parse()?;
    let provider = match id {
        ProviderId::OpenAi => Provider::OpenAi(OpenAI::new(client, id.key_of(credentials))?),
        ProviderId::DeepSeek => Provider::DeepSeek(DeepSeek::new(client, id.key_of(credentials))?),
        ProviderId::Gemini => Provider::Gemini(Gemini::new(client, id.key_of(credentials))?),
    };
    Ok(provider)
}

impl Provider {
    /// Send the ordered history to the backing provider.
    pub async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        match self {
            Self::OpenAi(p) => p.generate(messages).await,
            Self::DeepSeek(p) => p.generate(messages).await,
            Self::Gemini(p) => p.generate(messages).await,
        }
    }
}
