//! The request body for the OpenAI API.

use crate::MODEL;
use llm::{ChatMessage, Role};
use serde::Serialize;

/// The request body for the chat completions API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// The model we are using.
    pub model: &'static str,

    /// The messages to send to the API.
    pub messages: Vec<WireMessage>,

    /// Whether to stream the response.
    pub stream: bool,
}

/// One message in the provider's own role vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireMessage {
    /// `user` or `assistant`.
    pub role: &'static str,

    /// The text body.
    pub content: String,
}

impl Request {
    /// Shape the internal history into the provider wire format.
    ///
    /// Assistant turns keep their role; every other role collapses
    /// to `user`.
    pub fn new(messages: &[ChatMessage]) -> Self {
        Self {
            model: MODEL,
            messages: messages
                .iter()
                .map(|message| WireMessage {
                    role: match message.role {
                        Role::Assistant => "assistant",
                        _ => "user",
                    },
                    content: message.content.clone(),
                })
                .collect(),
            stream: false,
        }
    }
}
