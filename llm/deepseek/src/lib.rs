//! The DeepSeek LLM provider.

pub use request::{Request, WireMessage};
use llm::reqwest::{Client, header::HeaderMap};

mod provider;
mod request;

/// The chat completions endpoint.
pub const ENDPOINT: &str = "https://api.deepseek.com/chat/completions";

/// The fixed model used for every request.
pub const MODEL: &str = "deepseek-chat";

/// The DeepSeek LLM provider.
#[derive(Clone)]
pub struct DeepSeek {
    /// The HTTP client.
    pub client: Client,

    /// The request headers.
    headers: HeaderMap,
}
