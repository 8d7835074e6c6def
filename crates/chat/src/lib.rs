//! Send orchestration for EasyChat.
//!
//! [`ChatRepository`] coordinates a single send: persist the user turn,
//! build the context window, invoke the selected provider, and persist
//! either the assistant reply or a sanitized error record. [`ChatState`]
//! carries the reactive UI contract (selected provider, loading flag,
//! notices), and [`SettingsStore`] the on-disk credential file.

pub use repository::{
    ChatRepository, Dispatch, LiveDispatch, NETWORK_ERROR_TEXT, SERVICE_ERROR_TEXT, context_window,
    failure_text,
};
pub use settings::SettingsStore;
pub use state::{ChatState, Notice};

mod repository;
mod settings;
mod state;
