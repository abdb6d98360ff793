/*
[INPUT]:  Base path, access token, timeouts, environment variables
[OUTPUT]: Client configuration shared by every endpoint
[POS]:    HTTP layer - client configuration
[UPDATE]: When adding connection options or environment overrides
*/

use std::collections::BTreeMap;
use std::time::Duration;

use crate::http::{ApiError, Result};

/// Base URL of the Strava v3 API
pub const DEFAULT_BASE_PATH: &str = "https://www.strava.com/api/v3";

pub const ENV_ACCESS_TOKEN: &str = "STRAVA_ACCESS_TOKEN";
pub const ENV_BASE_PATH: &str = "STRAVA_BASE_PATH";
pub const ENV_TIMEOUT_SECS: &str = "STRAVA_TIMEOUT_SECS";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    pub base_path: String,
    /// OAuth access token sent for the `strava_oauth` scheme
    pub access_token: Option<String>,
    pub user_agent: String,
    /// Headers added to every request before endpoint headers
    pub default_headers: BTreeMap<String, String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            access_token: None,
            user_agent: concat!("strava-api-rust/", env!("CARGO_PKG_VERSION")).to_string(),
            default_headers: BTreeMap::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Configuration {
    /// Default configuration overridden by `STRAVA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Configuration::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|token| !token.is_empty()) {
            config.access_token = Some(token);
        }
        if let Some(base_path) = lookup(ENV_BASE_PATH).filter(|path| !path.is_empty()) {
            config.base_path = base_path;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
            if secs == 0 {
                return Err(ApiError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}
