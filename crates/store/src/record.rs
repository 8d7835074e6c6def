//! Durable session and message records.

use compact_str::CompactString;
use llm::Role;
use std::time::{SystemTime, UNIX_EPOCH};

/// One persisted conversation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Unique session identifier (UUID v4), immutable.
    pub id: CompactString,
    /// Human-readable label, derived from the first user message at
    /// creation and never recomputed.
    pub title: String,
    /// Creation timestamp (epoch milliseconds).
    pub created_at: i64,
    /// The provider selected when the session was created.
    pub provider_id: CompactString,
}

/// One turn in a conversation. Immutable after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Unique message identifier (UUID v4).
    pub id: CompactString,
    /// The owning session.
    pub session_id: CompactString,
    /// The role of this turn.
    pub role: Role,
    /// The text body.
    pub content: String,
    /// Insertion timestamp (epoch milliseconds).
    pub timestamp: i64,
    /// Delivery status.
    pub status: MessageStatus,
    /// Provider active when this message was produced. Nullable for
    /// pre-provider-aware rows.
    pub provider_id: Option<CompactString>,
}

impl MessageRecord {
    /// Create a record with a fresh id and the current timestamp.
    pub fn new(
        session_id: impl Into<CompactString>,
        role: Role,
        content: impl Into<String>,
        status: MessageStatus,
        provider_id: Option<&str>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string().into(),
            session_id: session_id.into(),
            role,
            content: content.into(),
            timestamp: now_millis(),
            status,
            provider_id: provider_id.map(Into::into),
        }
    }
}

/// Delivery status of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// The turn committed normally.
    Sent,
    /// A sanitized failure record.
    Error,
}

impl MessageStatus {
    /// The storage representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Error => "error",
        }
    }

    /// Parse a stored status string.
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "sent" => Some(Self::Sent),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
