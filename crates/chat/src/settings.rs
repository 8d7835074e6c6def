//! The on-disk credential file.

use anyhow::{Context, Result};
use provider::{Credentials, ProviderId};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Key-value settings file holding one API key per provider.
///
/// Every read goes back to disk; nothing is cached, so a key saved from
/// the settings screen takes effect on the very next send.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by the given TOML file. The file need not
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the credential set. A missing file reads as all-empty keys.
    pub fn load(&self) -> Result<Credentials> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Credentials::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        toml::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Update one provider's key, leaving the others untouched.
    pub fn save_key(&self, id: ProviderId, key: &str) -> Result<()> {
        let mut credentials = self.load()?;
        match id {
            ProviderId::OpenAi => credentials.openai_key = key.to_owned(),
            ProviderId::DeepSeek => credentials.deepseek_key = key.to_owned(),
            ProviderId::Gemini => credentials.gemini_key = key.to_owned(),
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(&credentials)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}
