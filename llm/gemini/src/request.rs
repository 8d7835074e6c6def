//! The request body for the Gemini API.

use llm::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

/// The request body for the generateContent API.
///
/// Gemini takes the conversation as a list of `contents` turns directly,
/// not a flat message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// The conversation turns.
    pub contents: Vec<Content>,
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Content {
    /// `user` or `model`.
    pub role: String,

    /// The content parts of this turn.
    pub parts: Vec<Part>,
}

/// One content part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Part {
    /// The text body.
    pub text: String,
}

impl Request {
    /// Shape the internal history into the provider wire format.
    ///
    /// User turns keep their role; every other role collapses to
    /// `model`, and each text body is wrapped in a single part.
    pub fn new(messages: &[ChatMessage]) -> Self {
        Self {
            contents: messages
                .iter()
                .map(|message| Content {
                    role: match message.role {
                        Role::User => "user",
                        _ => "model",
                    }
                    .to_owned(),
                    parts: vec![Part {
                        text: message.content.clone(),
                    }],
                })
                .collect(),
        }
    }
}
