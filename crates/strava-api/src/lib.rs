/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Strava API crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

pub use auth::{AuthScheme, STRAVA_OAUTH};

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiRequest,
    ApiResponse,
    Configuration,
    FileParameter,
    GearsApi,
    Result,
    StravaClient,
    UploadsApi,
};

// Re-export all types
pub use types::*;
