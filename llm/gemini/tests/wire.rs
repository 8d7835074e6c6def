//! Tests for Gemini request shaping and response decoding.

use easychat_gemini::{GenerateResponse, Request};
use llm::{ChatMessage, LlmError};

#[test]
fn maps_assistant_to_model_and_wraps_parts() {
    let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
    let request = Request::new(&history);

    assert_eq!(request.contents.len(), 2);
    assert_eq!(request.contents[0].role, "user");
    assert_eq!(request.contents[1].role, "model");
    assert_eq!(request.contents[1].parts.len(), 1);
    assert_eq!(request.contents[1].parts[0].text, "hello");
}

#[test]
fn body_matches_wire_contract() {
    let request = Request::new(&[ChatMessage::user("hi")]);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "hi"}]}]
        })
    );
}

#[test]
fn extracts_first_candidate_text() {
    let body = r#"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "hello"}]},
            "finishReason": "STOP"
        }]
    }"#;
    let response: GenerateResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.into_text().unwrap(), "hello");
}

#[test]
fn empty_candidates_is_soft_failure() {
    let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
    assert_eq!(response.into_text().unwrap(), "No response from Gemini");
}

#[test]
fn error_payload_wins() {
    let body = r#"{
        "candidates": [{"content": {"role": "model", "parts": [{"text": "hello"}]}}],
        "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
    }"#;
    let response: GenerateResponse = serde_json::from_str(body).unwrap();
    match response.into_text() {
        Err(LlmError::Provider(detail)) => assert_eq!(detail, "API key not valid"),
        other => panic!("expected provider error, got {other:?}"),
    }
}
