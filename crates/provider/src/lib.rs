//! Provider crate — centralizes LLM provider enum dispatch, credential
//! lookup, and selection.
//!
//! [`Provider`] wraps the concrete backends (OpenAI, DeepSeek, Gemini)
//! behind a unified `generate`. [`resolve`] is the pure lookup from a
//! provider identifier and credentials to a constructed adapter. The
//! provider set is closed; there is no plugin registration.

pub use credentials::Credentials;
pub use id::ProviderId;
pub use provider::{Provider, resolve};

mod credentials;
mod id;
mod provider;
