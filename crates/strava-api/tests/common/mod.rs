/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for strava-api tests

use strava_api::{Configuration, StravaClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock OAuth access token for testing
pub fn mock_access_token() -> String {
    "a4b945687g3ty6s2f2e8bd1fb0a7a0b6".to_string()
}

/// Client pointed at the mock server with the mock token configured
pub fn client_for(server: &MockServer) -> StravaClient {
    let config = Configuration::default()
        .with_base_path(server.uri())
        .with_access_token(mock_access_token());
    StravaClient::with_config(config).expect("client init")
}

/// Sample detailed gear body
#[allow(dead_code)]
pub fn gear_json() -> serde_json::Value {
    serde_json::json!({
        "id": "b1231",
        "primary": false,
        "resource_state": 3,
        "distance": 388206,
        "brand_name": "BMC",
        "model_name": "Teammachine",
        "frame_type": 3,
        "description": "My Bike.",
        "name": "BMC Teammachine"
    })
}

/// Sample upload body for an upload still being processed
#[allow(dead_code)]
pub fn upload_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "id_str": id.to_string(),
        "external_id": null,
        "error": null,
        "status": "Your activity is still being processed.",
        "activity_id": null
    })
}
