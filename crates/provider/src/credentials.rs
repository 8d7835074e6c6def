//! Per-provider API keys.

use serde::{Deserialize, Serialize};

/// The credential set: one API key string per provider, possibly empty.
///
/// Loaded fresh for every send so a key update takes effect on the next
/// call. No `Debug` derive prints key material anywhere; keep it that way
/// when touching logging.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    /// OpenAI API key.
    #[serde(default)]
    pub openai_key: String,

    /// DeepSeek API key.
    #[serde(default)]
    pub deepseek_key: String,

    /// Gemini API key.
    #[serde(default)]
    pub gemini_key: String,
}
