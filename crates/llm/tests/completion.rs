//! Tests for completion response decoding.

use easychat_llm::{Completion, LlmError, Role};

#[test]
fn success_extracts_first_choice() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "hello"}},
            {"message": {"role": "assistant", "content": "ignored"}}
        ]
    }"#;
    let completion: Completion = serde_json::from_str(body).unwrap();
    assert_eq!(completion.into_text("fallback").unwrap(), "hello");
}

#[test]
fn empty_choices_is_soft_failure() {
    let completion: Completion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert_eq!(
        completion.into_text("No response from OpenAI").unwrap(),
        "No response from OpenAI"
    );
}

#[test]
fn error_payload_wins_over_choices() {
    let body = r#"{
        "choices": [{"message": {"role": "assistant", "content": "hello"}}],
        "error": {"message": "invalid api key: sk-abc123", "type": "invalid_request_error"}
    }"#;
    let completion: Completion = serde_json::from_str(body).unwrap();
    match completion.into_text("fallback") {
        Err(LlmError::Provider(detail)) => assert_eq!(detail, "invalid api key: sk-abc123"),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[test]
fn error_detail_falls_back_to_status_then_type() {
    let body = r#"{"error": {"status": "PERMISSION_DENIED", "code": 403}}"#;
    let completion: Completion = serde_json::from_str(body).unwrap();
    match completion.into_text("fallback") {
        Err(LlmError::Provider(detail)) => assert_eq!(detail, "PERMISSION_DENIED"),
        other => panic!("expected provider error, got {other:?}"),
    }

    let body = r#"{"error": {"type": "server_error"}}"#;
    let completion: Completion = serde_json::from_str(body).unwrap();
    match completion.into_text("fallback") {
        Err(LlmError::Provider(detail)) => assert_eq!(detail, "server_error"),
        other => panic!("expected provider error, got {other:?}"),
    }

    let completion: Completion = serde_json::from_str(r#"{"error": {}}"#).unwrap();
    match completion.into_text("fallback") {
        Err(LlmError::Provider(detail)) => assert_eq!(detail, "unknown provider error"),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[test]
fn role_round_trips_through_storage_form() {
    for role in [Role::User, Role::Assistant, Role::System] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("tool"), None);
}
