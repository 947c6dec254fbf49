use std::{fs, path::Path, time::Duration};

use anyhow::{anyhow, bail, Context};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "triage.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".into(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn with_service_url(mut self, raw: &str) -> anyhow::Result<Self> {
        self.service_url = normalize_service_url(raw)?;
        Ok(self)
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> anyhow::Result<Self> {
        if secs == 0 {
            bail!("request timeout must be at least one second");
        }
        self.request_timeout_secs = secs;
        Ok(self)
    }
}

/// Loads settings from `path` (or `triage.toml` in the working directory when
/// it exists) and then the process environment.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_SETTINGS_FILE).ok(),
    };

    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

pub fn settings_from_sources(
    file_raw: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_raw {
        let file_cfg: toml::Table = toml::from_str(raw).context("invalid settings file")?;
        if let Some(v) = file_cfg.get("service_url") {
            let v = v
                .as_str()
                .ok_or_else(|| anyhow!("service_url must be a string"))?;
            settings = settings.with_service_url(v)?;
        }
        if let Some(v) = file_cfg.get("request_timeout_secs") {
            let secs = match v {
                toml::Value::Integer(secs) => u64::try_from(*secs).ok(),
                toml::Value::String(secs) => secs.trim().parse::<u64>().ok(),
                _ => None,
            };
            if let Some(secs) = secs {
                settings = settings.with_request_timeout_secs(secs)?;
            }
        }
    }

    if let Some(v) = env("TRIAGE_SERVICE_URL") {
        settings = settings.with_service_url(&v)?;
    }
    if let Some(v) = env("APP__SERVICE_URL") {
        settings = settings.with_service_url(&v)?;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings = settings.with_request_timeout_secs(parsed)?;
        }
    }

    Ok(settings)
}

fn normalize_service_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).with_context(|| format!("invalid service url '{raw}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("service url '{raw}' must use http or https");
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
