//! SQLite-backed conversation store.
//!
//! Owns the durable session and message records and exposes reactive
//! read streams plus mutation operations. Wraps a `rusqlite::Connection`
//! in a `Mutex`; change notification is a `watch` revision counter that
//! every mutation bumps after its write commits, so a subscriber that
//! re-queries on a bump always observes the committed row.
//!
//! All SQL lives in `sql/*.sql` files, loaded via `include_str!`.

pub use record::{MessageRecord, MessageStatus, SessionRecord, now_millis};

use anyhow::{Context, Result, bail};
use compact_str::CompactString;
use futures_core::Stream;
use llm::Role;
use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Arc, Mutex},
};
use tokio::sync::watch;

mod record;

const SQL_SCHEMA: &str = include_str!("../sql/schema.sql");
const SQL_INSERT_SESSION: &str = include_str!("../sql/insert_session.sql");
const SQL_INSERT_MESSAGE: &str = include_str!("../sql/insert_message.sql");
const SQL_SELECT_SESSIONS: &str = include_str!("../sql/select_sessions.sql");
const SQL_SELECT_SESSION: &str = include_str!("../sql/select_session.sql");
const SQL_SELECT_MESSAGES: &str = include_str!("../sql/select_messages.sql");
const SQL_DELETE_SESSIONS: &str = include_str!("../sql/delete_sessions.sql");

/// Cloneable handle to the conversation store.
///
/// Also holds the transient active-session pointer: `None` means a new,
/// unsaved conversation. The pointer is not persisted.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

struct Inner {
    conn: Mutex<Connection>,
    /// Bumped after every committed mutation.
    revision: watch::Sender<u64>,
    /// Which session the UI currently displays.
    active: watch::Sender<Option<CompactString>>,
}

impl Store {
    /// Open or create a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_conn(Connection::open(path)?)
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self> {
        conn.execute_batch(SQL_SCHEMA)?;
        Ok(Self {
            inner: Arc::new(Inner {
                conn: Mutex::new(conn),
                revision: watch::Sender::new(0),
                active: watch::Sender::new(None),
            }),
        })
    }

    /// Generate a session id, persist the session, and return it.
    pub fn create_session(&self, title: &str, provider_id: &str) -> Result<SessionRecord> {
        let session = SessionRecord {
            id: uuid::Uuid::new_v4().to_string().into(),
            title: title.to_owned(),
            created_at: now_millis(),
            provider_id: provider_id.into(),
        };
        {
            let conn = self.lock();
            conn.execute(
                SQL_INSERT_SESSION,
                rusqlite::params![
                    session.id.as_str(),
                    session.title,
                    session.created_at,
                    session.provider_id.as_str()
                ],
            )?;
        }
        self.bump();
        Ok(session)
    }

    /// Look up a session by id.
    pub fn session(&self, id: &str) -> Result<Option<SessionRecord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(SQL_SELECT_SESSION)?;
        let mut rows = stmt.query_map([id], session_from_row)?;
        rows.next().transpose().map_err(Into::into)
    }

    /// All sessions, most recently created first.
    pub fn all_sessions(&self) -> Result<Vec<SessionRecord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(SQL_SELECT_SESSIONS)?;
        let rows = stmt.query_map([], session_from_row)?;
        rows.collect::<rusqlite::Result<_>>().map_err(Into::into)
    }

    /// Delete every session; messages cascade.
    pub fn delete_all_sessions(&self) -> Result<()> {
        {
            let conn = self.lock();
            conn.execute(SQL_DELETE_SESSIONS, [])?;
        }
        self.bump();
        Ok(())
    }

    /// Persist one message. The insert is atomic with respect to
    /// concurrent reads; the revision bump happens after it commits.
    pub fn append(&self, message: &MessageRecord) -> Result<()> {
        {
            let conn = self.lock();
            conn.execute(
                SQL_INSERT_MESSAGE,
                rusqlite::params![
                    message.id.as_str(),
                    message.session_id.as_str(),
                    message.role.as_str(),
                    message.content,
                    message.timestamp,
                    message.status.as_str(),
                    message.provider_id.as_deref(),
                ],
            )?;
        }
        self.bump();
        Ok(())
    }

    /// All messages of a session, ascending timestamp.
    pub fn messages_for(&self, session_id: &str) -> Result<Vec<MessageRecord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(SQL_SELECT_MESSAGES)?;
        let rows = stmt.query_map([session_id], message_from_row)?;
        let mut messages = Vec::new();
        for row in rows {
            messages.push(decode_message(row?)?);
        }
        Ok(messages)
    }

    /// Update the transient active-session pointer.
    pub fn set_active(&self, session_id: Option<CompactString>) {
        self.inner.active.send_replace(session_id);
    }

    /// The current active session, if any.
    pub fn active(&self) -> Option<CompactString> {
        self.inner.active.borrow().clone()
    }

    /// Reactive stream of all sessions, most recent first.
    ///
    /// Emits the current snapshot immediately, then again after every
    /// store mutation.
    pub fn sessions(&self) -> impl Stream<Item = Vec<SessionRecord>> + Send + 'static {
        let store = self.clone();
        let mut revision = self.inner.revision.subscribe();
        async_stream::stream! {
            loop {
                yield store.all_sessions().unwrap_or_else(|err| {
                    tracing::warn!("session query failed: {err}");
                    Vec::new()
                });
                if revision.changed().await.is_err() {
                    break;
                }
            }
        }
    }

    /// Reactive stream of the active session's messages, ascending
    /// timestamp.
    ///
    /// Follows the active-session pointer; yields an empty sequence
    /// while no session is active (a blank canvas for an unsaved chat).
    pub fn messages(&self) -> impl Stream<Item = Vec<MessageRecord>> + Send + 'static {
        let store = self.clone();
        let mut revision = self.inner.revision.subscribe();
        let mut active = self.inner.active.subscribe();
        async_stream::stream! {
            loop {
                let session = active.borrow_and_update().clone();
                let messages = match &session {
                    Some(id) => store.messages_for(id).unwrap_or_else(|err| {
                        tracing::warn!("message query failed: {err}");
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
                yield messages;
                tokio::select! {
                    changed = active.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    changed = revision.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.inner.conn.lock().expect("store lock poisoned")
    }

    fn bump(&self) {
        self.inner.revision.send_modify(|revision| *revision += 1);
    }
}

/// Raw message row before role/status decoding.
struct MessageRow {
    id: String,
    session_id: String,
    role: String,
    content: String,
    timestamp: i64,
    status: String,
    provider_id: Option<String>,
}

fn session_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionRecord> {
    Ok(SessionRecord {
        id: row.get::<_, String>(0)?.into(),
        title: row.get(1)?,
        created_at: row.get(2)?,
        provider_id: row.get::<_, String>(3)?.into(),
    })
}

fn message_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        session_id: row.get(1)?,
        role: row.get(2)?,
        content: row.get(3)?,
        timestamp: row.get(4)?,
        status: row.get(5)?,
        provider_id: row.get(6)?,
    })
}

fn decode_message(row: MessageRow) -> Result<MessageRecord> {
    let Some(role) = Role::parse(&row.role) else {
        bail!("unknown role '{}' in message {}", row.role, row.id);
    };
    let status = MessageStatus::parse(&row.status)
        .with_context(|| format!("unknown status '{}' in message {}", row.status, row.id))?;
    Ok(MessageRecord {
        id: row.id.into(),
        session_id: row.session_id.into(),
        role,
        content: row.content,
        timestamp: row.timestamp,
        status,
        provider_id: row.provider_id.map(Into::into),
    })
}
