//! The send-message orchestrator.

use crate::{ChatState, Notice, SettingsStore};
use anyhow::Result;
use llm::{ChatMessage, Client, LlmError, Role};
use provider::{Credentials, ProviderId, resolve};
use store::{MessageRecord, MessageStatus, Store};

/// Persisted in place of a provider-reported error. Fixed text: provider
/// payloads may echo the caller's own API key and must never be stored.
pub const SERVICE_ERROR_TEXT: &str = "The AI service returned an error.";

/// Persisted for any other failure (transport, resolution, local reads).
pub const NETWORK_ERROR_TEXT: &str =
    "A network error occurred. Please check your internet connection.";

/// The provider seam: resolve an adapter and run one generation call.
///
/// The live implementation goes over the network; tests substitute a
/// scripted one.
pub trait Dispatch: Send + Sync {
    /// Resolve the adapter for `id` with the given credentials and send
    /// the history.
    fn generate(
        &self,
        id: ProviderId,
        credentials: &Credentials,
        history: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Live dispatch over a shared HTTP client.
#[derive(Clone, Default)]
pub struct LiveDispatch {
    client: Client,
}

impl Dispatch for LiveDispatch {
    async fn generate(
        &self,
        id: ProviderId,
        credentials: &Credentials,
        history: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        let provider = resolve(id.as_str(), credentials, self.client.clone())?;
        provider.generate(&history).await
    }
}

/// Coordinates one "send message" operation against the store and the
/// selected provider, and owns the session-level intents (`new_chat`,
/// `load_session`).
pub struct ChatRepository<D = LiveDispatch> {
    store: Store,
    settings: SettingsStore,
    dispatch: D,
    state: ChatState,
}

impl ChatRepository<LiveDispatch> {
    /// Create a repository with live network dispatch.
    pub fn new(store: Store, settings: SettingsStore) -> Self {
        Self::with_dispatch(store, settings, LiveDispatch::default())
    }
}

impl<D: Dispatch> ChatRepository<D> {
    /// Create a repository with a custom dispatch (tests).
    pub fn with_dispatch(store: Store, settings: SettingsStore, dispatch: D) -> Self {
        Self {
            store,
            settings,
            dispatch,
            state: ChatState::new(),
        }
    }

    /// The reactive UI state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// The conversation store (for the UI's session/message streams).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Send one user message to the selected provider.
    ///
    /// Blank text is a silent no-op. A missing API key surfaces a
    /// [`Notice`] and touches nothing. Otherwise the user turn is
    /// persisted unconditionally, and exactly one of an assistant reply
    /// or a sanitized system error record follows it.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let provider = self.state.selected();
        let credentials = self.settings.load()?;
        if provider.key_of(&credentials).trim().is_empty() {
            self.state.notify(Notice::MissingKey(provider));
            return Ok(());
        }

        self.state.set_loading(true);
        let result = self.send_inner(text, provider, &credentials).await;
        self.state.set_loading(false);
        result
    }

    async fn send_inner(
        &self,
        text: &str,
        provider: ProviderId,
        credentials: &Credentials,
    ) -> Result<()> {
        let session_id = match self.store.active() {
            Some(id) => id,
            None => {
                let session = self
                    .store
                    .create_session(&session_title(text), provider.as_str())?;
                self.store.set_active(Some(session.id.clone()));
                session.id
            }
        };

        self.store.append(&MessageRecord::new(
            session_id.clone(),
            Role::User,
            text,
            MessageStatus::Sent,
            Some(provider.as_str()),
        ))?;

        let reply = match self.complete(&session_id, provider, credentials).await {
            Ok(content) => MessageRecord::new(
                session_id,
                Role::Assistant,
                content,
                MessageStatus::Sent,
                Some(provider.as_str()),
            ),
            Err(err) => {
                tracing::warn!("send failed for provider {provider}: {err:#}");
                MessageRecord::new(
                    session_id,
                    Role::System,
                    failure_text(&err),
                    MessageStatus::Error,
                    Some(provider.as_str()),
                )
            }
        };
        self.store.append(&reply)?;
        Ok(())
    }

    /// Steps 4-6 of the send: read back the history, shape the context
    /// window, and run the provider call.
    async fn complete(
        &self,
        session_id: &str,
        provider: ProviderId,
        credentials: &Credentials,
    ) -> Result<String> {
        let rows = self.store.messages_for(session_id)?;
        let history = context_window(&rows);
        let text = self
            .dispatch
            .generate(provider, credentials, history)
            .await?;
        Ok(text)
    }

    /// Make `session_id` the active session and restore its provider
    /// selection when it still maps to a known provider.
    pub fn load_session(&self, session_id: &str) -> Result<()> {
        self.store.set_active(Some(session_id.into()));
        if let Some(session) = self.store.session(session_id)?
            && let Ok(provider) = session.provider_id.parse::<ProviderId>()
        {
            self.state.set_selected(provider);
        }
        Ok(())
    }

    /// Start a new, unsaved conversation. Deletes nothing.
    pub fn new_chat(&self) {
        self.store.set_active(None);
    }

    /// Change the selected provider for subsequent sends.
    pub fn select_provider(&self, id: ProviderId) {
        self.state.set_selected(id);
    }
}

/// Filter the stored history down to the turns a provider may see.
///
/// `system` rows are local diagnostics; letting them through would
/// pollute future model context with error text.
pub fn context_window(rows: &[MessageRecord]) -> Vec<ChatMessage> {
    rows.iter()
        .filter(|row| matches!(row.role, Role::User | Role::Assistant))
        .map(|row| ChatMessage {
            role: row.role,
            content: row.content.clone(),
        })
        .collect()
}

/// The fixed user-visible text for a failure, selected by category.
///
/// Never the raw error string: provider bodies are untrusted and may
/// contain the caller's own key.
pub fn failure_text(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<LlmError>() {
        Some(LlmError::Provider(_)) => SERVICE_ERROR_TEXT,
        _ => NETWORK_ERROR_TEXT,
    }
}

/// Derive a session title from the first user message.
fn session_title(text: &str) -> String {
    let head: String = text.chars().take(20).collect();
    format!("{}...", head.trim())
}
