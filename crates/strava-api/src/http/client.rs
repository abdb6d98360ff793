/*
[INPUT]:  Client configuration and fully described endpoint requests
[OUTPUT]: Raw API responses and decoded models
[POS]:    HTTP layer - core client implementation shared by every endpoint
[UPDATE]: When adding connection options or changing request encoding
*/

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::apply_auth;
use crate::http::{ApiError, ApiRequest, Configuration, Result};

/// Status, headers and body text of a completed call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Main HTTP client for the Strava API
#[derive(Debug, Clone)]
pub struct StravaClient {
    http_client: Client,
    config: Configuration,
}

impl StravaClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Configuration::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: Configuration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a client with default configuration pointed at another base path
    pub fn with_base_path(base_path: &str) -> Result<Self> {
        Self::with_config(Configuration::default().with_base_path(base_path))
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn base_path(&self) -> &str {
        &self.config.base_path
    }

    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.config.base_path = base_path.into();
    }

    /// Set the OAuth access token used for authenticated endpoints
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.config.access_token = Some(token.into());
    }

    /// Build full URL for an endpoint path
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_path.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Send the request and return the response whatever its status.
    ///
    /// Only a missing response is an error here; status checks belong to
    /// the caller.
    pub async fn call_api(&self, request: ApiRequest) -> Result<ApiResponse> {
        let operation = request.operation;
        let builder = self.build_request(request)?;

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::transport(operation, &err))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(operation, &err))?;

        debug!(operation, status = status.as_u16(), bytes = body.len(), "response received");
        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Send the request, map failure statuses to errors and decode the body
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let operation = request.operation;
        let response = self.call_api(request).await?;
        if response.status.as_u16() >= 400 {
            return Err(ApiError::status(response.status, operation, response.body));
        }
        self.deserialize(operation, &response)
    }

    /// Decode a response body as JSON
    pub fn deserialize<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        response: &ApiResponse,
    ) -> Result<T> {
        serde_json::from_str(&response.body).map_err(|err| ApiError::Deserialization {
            operation,
            message: err.to_string(),
        })
    }

    fn build_request(&self, request: ApiRequest) -> Result<RequestBuilder> {
        let ApiRequest {
            operation,
            method,
            path,
            query_params,
            header_params,
            form_params,
            file_params,
            body,
            auth_settings,
        } = request;

        let url = self.url(&path)?;
        debug!(operation, %method, %url, "sending request");

        // Later sources replace earlier ones regardless of name case:
        // defaults, then endpoint headers, then credentials, then Accept.
        let mut headers = HeaderMap::new();
        insert_headers(&mut headers, &self.config.default_headers)?;
        insert_headers(&mut headers, &header_params)?;
        let mut auth_headers = BTreeMap::new();
        apply_auth(auth_settings, &self.config, &mut auth_headers);
        insert_headers(&mut headers, &auth_headers)?;
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = self.http_client.request(method, url).headers(headers);

        if !query_params.is_empty() {
            builder = builder.query(&query_params);
        }

        if !file_params.is_empty() {
            let mut form = Form::new();
            for (name, value) in form_params {
                form = form.text(name, value);
            }
            for (name, file) in file_params {
                form = form.part(name, file.into_part()?);
            }
            builder = builder.multipart(form);
        } else if !form_params.is_empty() {
            builder = builder.form(&form_params);
        } else if let Some(body) = body {
            builder = builder.json(&body);
        }

        Ok(builder)
    }
}

fn insert_headers(map: &mut HeaderMap, headers: &BTreeMap<String, String>) -> Result<()> {
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| ApiError::Config(format!("invalid header name '{name}': {err}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| ApiError::Config(format!("invalid value for header '{name}': {err}")))?;
        map.insert(name, value);
    }
    Ok(())
}
