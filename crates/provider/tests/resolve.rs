//! Tests for provider selection.

use easychat_provider::{Credentials, Provider, ProviderId, resolve};
use llm::{Client, LlmError};

fn credentials() -> Credentials {
    Credentials {
        openai_key: "sk-openai".into(),
        deepseek_key: "sk-deepseek".into(),
        gemini_key: "AIza-gemini".into(),
    }
}

#[test]
fn resolves_every_supported_identifier() {
    let client = Client::new();
    assert!(matches!(
        resolve("OpenAI", &credentials(), client.clone()),
        Ok(Provider::OpenAi(_))
    ));
    assert!(matches!(
        resolve("DeepSeek", &credentials(), client.clone()),
        Ok(Provider::DeepSeek(_))
    ));
    assert!(matches!(
        resolve("Gemini", &credentials(), client),
        Ok(Provider::Gemini(_))
    ));
}

#[test]
fn unknown_identifier_is_rejected() {
    let result = resolve("Claude", &credentials(), Client::new());
    match result {
        Err(LlmError::UnknownProvider(id)) => assert_eq!(id, "Claude"),
        _ => panic!("expected unknown provider error"),
    }
}

#[test]
fn resolve_is_stable_across_calls() {
    let client = Client::new();
    let first = resolve("Gemini", &credentials(), client.clone()).unwrap();
    let second = resolve("Gemini", &credentials(), client).unwrap();
    assert!(matches!(
        (first, second),
        (Provider::Gemini(_), Provider::Gemini(_))
    ));
}

#[test]
fn identifier_round_trips() {
    for id in ProviderId::ALL {
        assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
    }
}

#[test]
fn key_lookup_matches_provider() {
    let credentials = credentials();
    assert_eq!(ProviderId::OpenAi.key_of(&credentials), "sk-openai");
    assert_eq!(ProviderId::DeepSeek.key_of(&credentials), "sk-deepseek");
    assert_eq!(ProviderId::Gemini.key_of(&credentials), "AIza-gemini");
}
