use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ServiceStatus, TriageRequest, TriageResult};
use tracing::{debug, info};

pub mod config;
pub mod controller;
pub mod error;
pub mod offline;
pub mod render;

pub use config::{load_settings, Settings};
pub use controller::{SubmissionController, SubmitOutcome, TriageForm, TriageView};
pub use error::LiveCallError;
pub use offline::{known_mock_ids, resolve_offline_mock};
pub use render::{FailurePanel, RenderedOutput, ResultPanel};

/// Remote triage evaluation.
#[async_trait]
pub trait TriageService: Send + Sync {
    async fn triage(&self, request: &TriageRequest) -> Result<TriageResult, LiveCallError>;
}

/// Service stand-in for offline-only sessions; every call fails.
pub struct MissingTriageService;

#[async_trait]
impl TriageService for MissingTriageService {
    async fn triage(&self, _request: &TriageRequest) -> Result<TriageResult, LiveCallError> {
        Err(LiveCallError::Unavailable)
    }
}

pub struct TriageClient {
    http: Client,
    service_url: String,
}

impl TriageClient {
    pub fn new(service_url: impl Into<String>, timeout: Duration) -> Result<Self, LiveCallError> {
        let http = Client::builder().timeout(timeout).build()?;
        let service_url: String = service_url.into();
        Ok(Self {
            http,
            service_url: service_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LiveCallError> {
        Self::new(settings.service_url.clone(), settings.request_timeout())
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Fetches the service's root status document.
    pub async fn status(&self) -> Result<ServiceStatus, LiveCallError> {
        let url = format!("{}/", self.service_url);
        debug!(url = %url, "probing triage service status");
        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(LiveCallError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TriageService for TriageClient {
    async fn triage(&self, request: &TriageRequest) -> Result<TriageResult, LiveCallError> {
        let url = format!("{}/triage", self.service_url);
        info!(url = %url, modality = %request.modality, "submitting triage request");
        let res = self.http.post(&url).json(request).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(LiveCallError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
