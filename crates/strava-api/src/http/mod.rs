/*
[INPUT]:  Client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod config;
pub mod error;
pub mod gears;
pub mod params;
pub mod uploads;

pub use error::{ApiError, Result};

pub use client::{ApiResponse, StravaClient};
pub use config::{Configuration, DEFAULT_BASE_PATH};
pub use gears::GearsApi;
pub use params::{ApiRequest, FileParameter, PathTemplate, ToParameter};
pub use uploads::UploadsApi;
