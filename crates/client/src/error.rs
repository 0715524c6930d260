//! Error taxonomy for backend calls.

use serde_json::Value;
use thiserror::Error;

/// What went wrong talking to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// An authenticated call was attempted with no stored token.
    #[error("no authentication token found; please login again")]
    MissingToken,

    /// The backend rejected the request. `detail` carries the backend's
    /// human-readable message when one was present, or a generic
    /// `HTTP <status>` fallback.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request timed out.
    #[error("request timed out; the server took too long to respond")]
    Timeout,

    /// The server could not be reached at all.
    #[error("unable to connect to server: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from an error response body.
    ///
    /// The backend reports failures as JSON objects with a `detail` field,
    /// either a string or (for validation failures) an array of
    /// `{loc, msg}` objects which are flattened to `"loc.path: msg"` pairs.
    /// Anything else falls back to a generic `HTTP <status>` message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| extract_detail(&json))
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Api { status, detail }
    }

    /// Whether the failure is an authentication problem the UI should treat
    /// as "please login again".
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Api { status: 401, .. })
    }
}

fn extract_detail(json: &Value) -> Option<String> {
    match json.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(entries) => {
            let flattened: Vec<String> = entries
                .iter()
                .map(|entry| {
                    let field = entry
                        .get("loc")
                        .and_then(Value::as_array)
                        .map(|loc| {
                            loc.iter()
                                .map(|part| match part {
                                    Value::String(s) => s.clone(),
                                    other => other.to_string(),
                                })
                                .collect::<Vec<_>>()
                                .join(".")
                        })
                        .unwrap_or_else(|| "field".to_string());
                    let msg = entry
                        .get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| entry.to_string());
                    format!("{field}: {msg}")
                })
                .collect();
            if flattened.is_empty() {
                None
            } else {
                Some(flattened.join(", "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
