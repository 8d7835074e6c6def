//! The OpenAI LLM provider.

pub use request::{Request, WireMessage};
use llm::reqwest::{Client, header::HeaderMap};

mod provider;
mod request;

/// The chat completions endpoint.
pub const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// The fixed model used for every request.
pub const MODEL: &str = "gpt-4o";

/// The OpenAI LLM provider.
#[derive(Clone)]
pub struct OpenAI {
    /// The HTTP client.
    pub client: Client,

    /// The request headers.
    headers: HeaderMap,
}
