use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the HTTP clients
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status; the message is what the server said, if anything
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Build a status error from a failed response, reading its body for a
    /// server-provided message.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        ClientError::Status {
            status,
            message: error_message(status, &body),
        }
    }
}

/// Pull a human readable message out of an error body.
///
/// FastAPI puts it under `detail`, PostgREST and GoTrue under `message`
/// (or `msg`, `error_description` for some auth errors).
pub fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let found = parsed.as_ref().and_then(|value| {
        ["detail", "message", "msg", "error_description"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .map(str::to_string)
    });

    match found {
        Some(message) if !message.trim().is_empty() => message,
        _ => format!("HTTP {}", status.as_u16()),
    }
}
