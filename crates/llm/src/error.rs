//! Error taxonomy for provider calls.

use compact_str::CompactString;
use thiserror::Error;

/// Errors produced while resolving a provider or generating a reply.
///
/// `Provider` carries provider-supplied text. That text is untrusted and
/// may echo sensitive material (some providers echo invalid API keys back
/// in error bodies), so it must only ever be logged, never persisted or
/// displayed verbatim.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The requested provider identifier has no adapter.
    #[error("unknown provider: {0}")]
    UnknownProvider(CompactString),

    /// The provider reported an error payload or a non-2xx status.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request failed before a structured response was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The API key cannot be used as header material.
    #[error("invalid api key: {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),
}
