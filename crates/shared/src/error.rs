use serde::{Deserialize, Serialize};

/// Error envelope returned by the triage service on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ServiceErrorBody {
    /// Best-effort one-line summary of a raw error body for logs.
    pub fn summarize(raw: &str) -> String {
        match serde_json::from_str::<ServiceErrorBody>(raw) {
            Ok(ServiceErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ServiceErrorBody {
                detail: serde_json::Value::Null,
            }) => raw.trim().to_string(),
            Ok(body) => body.detail.to_string(),
            Err(_) => raw.trim().to_string(),
        }
    }
}
