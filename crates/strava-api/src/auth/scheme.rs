/*
[INPUT]:  Auth setting names and the configured access token
[OUTPUT]: Header map updated with credentials
[POS]:    Auth layer - maps scheme names to request credentials
[UPDATE]: When adding schemes or changing how tokens are sent
*/

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::http::Configuration;

/// Scheme name every Strava endpoint declares
pub const STRAVA_OAUTH: &str = "strava_oauth";

/// Security schemes known to this client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// OAuth2 access token sent as a bearer token
    StravaOauth,
}

impl AuthScheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            STRAVA_OAUTH => Some(AuthScheme::StravaOauth),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthScheme::StravaOauth => STRAVA_OAUTH,
        }
    }
}

/// Apply each named scheme to the request headers.
///
/// Unknown names are skipped. A scheme without a configured credential
/// leaves the request unauthenticated.
pub fn apply_auth(
    auth_settings: &[&str],
    config: &Configuration,
    headers: &mut BTreeMap<String, String>,
) {
    for name in auth_settings {
        match AuthScheme::from_name(name) {
            Some(AuthScheme::StravaOauth) => match config.access_token.as_deref() {
                Some(token) => {
                    headers.insert("Authorization".to_string(), format!("Bearer {token}"));
                }
                None => debug!(scheme = %name, "no access token configured"),
            },
            None => warn!(scheme = %name, "unknown auth scheme, skipping"),
        }
    }
}
