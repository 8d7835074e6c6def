//! Tests for the credential settings file.

use easychat_chat::SettingsStore;
use provider::ProviderId;

#[test]
fn missing_file_reads_as_empty_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    let credentials = store.load().unwrap();
    assert!(credentials.openai_key.is_empty());
    assert!(credentials.deepseek_key.is_empty());
    assert!(credentials.gemini_key.is_empty());
}

#[test]
fn save_key_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    store.save_key(ProviderId::Gemini, "AIza-test").unwrap();

    let credentials = store.load().unwrap();
    assert_eq!(credentials.gemini_key, "AIza-test");
    assert!(credentials.openai_key.is_empty());
}

#[test]
fn save_key_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.toml"));

    store.save_key(ProviderId::OpenAi, "sk-one").unwrap();
    store.save_key(ProviderId::DeepSeek, "sk-two").unwrap();

    let credentials = store.load().unwrap();
    assert_eq!(credentials.openai_key, "sk-one");
    assert_eq!(credentials.deepseek_key, "sk-two");
}

#[test]
fn loads_are_fresh_reads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let store = SettingsStore::new(&path);

    store.save_key(ProviderId::DeepSeek, "stale").unwrap();
    assert_eq!(store.load().unwrap().deepseek_key, "stale");

    // An external edit (another settings screen) is visible on the next
    // load without any invalidation step.
    std::fs::write(&path, "deepseek_key = \"fresh\"\n").unwrap();
    assert_eq!(store.load().unwrap().deepseek_key, "fresh");
}
