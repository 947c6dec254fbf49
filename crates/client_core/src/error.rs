use shared::error::ServiceErrorBody;
use thiserror::Error;

/// Any way the live triage call can fail. The submission controller treats
/// every variant the same and falls back to the offline resolver.
#[derive(Debug, Error)]
pub enum LiveCallError {
    #[error("triage service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("triage service returned {status}: {}", ServiceErrorBody::summarize(.body))]
    Status { status: u16, body: String },
    #[error("malformed triage response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("triage service is unavailable")]
    Unavailable,
}

impl LiveCallError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LiveCallError::Transport(err) if err.is_timeout())
    }
}
