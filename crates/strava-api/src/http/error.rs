/*
[INPUT]:  Error sources (parameter validation, HTTP status, transport, decoding)
[OUTPUT]: Structured error type carrying an HTTP-style status code and message
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::Fault;

/// Main error type for Strava API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was not supplied; no request was sent
    #[error("Missing required parameter '{param}' when calling {operation}")]
    MissingParameter {
        param: &'static str,
        operation: &'static str,
    },

    /// Server answered with a status of 400 or above
    #[error("Error calling {operation}: {body}")]
    Status {
        code: u16,
        operation: &'static str,
        body: String,
    },

    /// No HTTP response was received
    #[error("Error calling {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// Response body did not match the declared result type
    #[error("Error deserializing {operation} response: {message}")]
    Deserialization {
        operation: &'static str,
        message: String,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Upload file could not be read
    #[error("Failed to read file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a missing parameter error for the given operation
    pub fn missing_parameter(param: &'static str, operation: &'static str) -> Self {
        ApiError::MissingParameter { param, operation }
    }

    /// Create a status error from the response status and body
    pub fn status(status: StatusCode, operation: &'static str, body: impl Into<String>) -> Self {
        ApiError::Status {
            code: status.as_u16(),
            operation,
            body: body.into(),
        }
    }

    /// Create a transport error from a reqwest failure
    pub fn transport(operation: &'static str, err: &reqwest::Error) -> Self {
        ApiError::Transport {
            operation,
            message: err.to_string(),
        }
    }

    /// HTTP-style status code for this error.
    ///
    /// Missing parameters report 400, transport failures 0, undecodable
    /// bodies 500.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingParameter { .. } => 400,
            ApiError::Status { code, .. } => *code,
            ApiError::Deserialization { .. } => 500,
            ApiError::Transport { .. }
            | ApiError::InvalidUrl(_)
            | ApiError::File { .. }
            | ApiError::Config(_) => 0,
        }
    }

    /// Human readable message, same as `Display`
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Raw response body, or the transport message when there was no response
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            ApiError::Transport { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Strava fault envelope parsed from the response body, if it is one
    pub fn fault(&self) -> Option<Fault> {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Check if the server rejected the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Status { code: 401 | 403, .. })
    }

    /// Check if the error is attributable to the request (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for Strava API operations
pub type Result<T> = std::result::Result<T, ApiError>;
