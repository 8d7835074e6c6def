//! Provider abstraction for the unified LLM interface.

use crate::{ChatMessage, LlmError};
use reqwest::Client;

/// A trait for LLM providers.
pub trait LLM: Sized + Clone {
    /// Create a new LLM provider.
    fn new(client: Client, key: &str) -> Result<Self, LlmError>;

    /// Send the ordered history to the provider and return the reply text.
    fn generate(
        &self,
        messages: &[ChatMessage],
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}
