//! Reactive UI-facing chat state.

use provider::ProviderId;
use tokio::sync::{broadcast, watch};

/// A transient user-facing notice (the snackbar contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The selected provider has no API key configured.
    MissingKey(ProviderId),
}

impl Notice {
    /// The user-facing text for this notice.
    pub fn text(&self) -> String {
        match self {
            Self::MissingKey(id) => {
                format!("Please configure {} API Key in Settings", id.display_name())
            }
        }
    }
}

/// Shared reactive state observed by the UI.
///
/// `loading` is the cooperative send-exclusion contract: it is set before
/// a send does meaningful work and cleared when the operation terminates,
/// and callers are expected to disable the send action while it is true.
pub struct ChatState {
    selected: watch::Sender<ProviderId>,
    loading: watch::Sender<bool>,
    notices: broadcast::Sender<Notice>,
}

impl ChatState {
    /// Create state with the default provider selection.
    pub fn new() -> Self {
        Self {
            selected: watch::Sender::new(ProviderId::DeepSeek),
            loading: watch::Sender::new(false),
            notices: broadcast::channel(16).0,
        }
    }

    /// The currently selected provider.
    pub fn selected(&self) -> ProviderId {
        *self.selected.borrow()
    }

    /// Change the selected provider.
    pub fn set_selected(&self, id: ProviderId) {
        self.selected.send_replace(id);
    }

    /// Watch provider-selection changes.
    pub fn watch_selected(&self) -> watch::Receiver<ProviderId> {
        self.selected.subscribe()
    }

    /// Whether a send is in flight.
    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch the loading flag.
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Subscribe to user-facing notices.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.loading.send_replace(loading);
    }

    pub(crate) fn notify(&self, notice: Notice) {
        // Nobody listening is fine; notices are fire-and-forget.
        let _ = self.notices.send(notice);
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
