//! The Gemini LLM provider.
//!
//! Unlike the OpenAI-style providers, Gemini authenticates with the API
//! key as a query parameter and speaks its own `contents`/`parts` wire
//! format.

pub use request::{Content, Part, Request};
pub use response::{Candidate, GenerateResponse};
use compact_str::CompactString;
use llm::reqwest::Client;

mod provider;
mod request;
mod response;

/// The generateContent endpoint, model included.
pub const ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// The Gemini LLM provider.
#[derive(Clone)]
pub struct Gemini {
    /// The HTTP client.
    pub client: Client,

    /// The API key, sent as a query parameter.
    key: CompactString,
}
