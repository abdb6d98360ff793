/*
[INPUT]:  YAML configuration file and STRAVA_* environment variables
[OUTPUT]: Client configuration for the strava-api crate
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strava_api::http::config::{ENV_ACCESS_TOKEN, ENV_BASE_PATH, ENV_TIMEOUT_SECS};
use strava_api::Configuration;

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API base path, defaults to the public Strava API
    #[serde(default)]
    pub base_path: Option<String>,
    /// OAuth access token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Overlay `STRAVA_*` variables on top of the file values
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|token| !token.is_empty()) {
            self.access_token = Some(token);
        }
        if let Some(base_path) = lookup(ENV_BASE_PATH).filter(|path| !path.is_empty()) {
            self.base_path = Some(base_path);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number, got '{raw}'"))?;
            self.timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Check values that would only fail later, at request time
    pub fn validate(&self) -> Result<()> {
        if let Some(base_path) = &self.base_path {
            url::Url::parse(base_path)
                .with_context(|| format!("invalid base_path '{base_path}'"))?;
        }
        if self.timeout_secs == Some(0) {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::default();
        if let Some(base_path) = &self.base_path {
            config = config.with_base_path(base_path.clone());
        }
        if let Some(token) = &self.access_token {
            config = config.with_access_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout_secs {
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        config
    }
}
