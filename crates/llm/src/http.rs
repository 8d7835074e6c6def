//! Shared HTTP response handling for provider adapters.

use crate::{ApiError, LlmError};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// An error-only response envelope, used to pull a detail string out of
/// non-2xx bodies.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ApiError>,
}

/// Read a provider response body and decode it.
///
/// A non-2xx status is always a provider error; the body is still probed
/// for an error payload so the detail survives into the (logged, never
/// persisted) error message, falling back to the bare HTTP status.
pub async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, LlmError> {
    let status = response.status();
    let text = response.text().await?;
    tracing::debug!("response ({status}): {text}");

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorEnvelope>(&text)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(ApiError::detail)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(LlmError::Provider(detail));
    }

    serde_json::from_str(&text).map_err(Into::into)
}
