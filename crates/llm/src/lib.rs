//! Unified LLM interface types and traits.
//!
//! This crate provides the shared types used across all LLM providers:
//! [`ChatMessage`], [`Role`], the [`LLM`] trait, and the [`LlmError`]
//! taxonomy. Also provides [`Completion`] for the OpenAI-style chat
//! completions response union and [`decode`] for the shared HTTP
//! response handling.

pub use completion::{ApiError, Choice, Completion};
pub use error::LlmError;
pub use http::decode;
pub use message::{ChatMessage, Role};
pub use provider::LLM;
pub use reqwest::{self, Client};

mod completion;
mod error;
mod http;
mod message;
mod provider;
