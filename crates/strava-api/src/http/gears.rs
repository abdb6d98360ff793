/*
[INPUT]:  Gear identifiers
[OUTPUT]: Detailed gear records
[POS]:    HTTP layer - gear endpoints (require OAuth token)
[UPDATE]: When adding new gear endpoints or changing response format
*/

use async_trait::async_trait;
use reqwest::Method;

use crate::auth::STRAVA_OAUTH;
use crate::http::{ApiError, ApiRequest, PathTemplate, Result, StravaClient};
use crate::types::DetailedGear;

/// Gear endpoints
#[async_trait]
pub trait GearsApi: Send + Sync {
    /// Get Equipment: returns an equipment using its identifier.
    ///
    /// GET /gear/{id}
    async fn get_gear_by_id(&self, id: &str) -> Result<DetailedGear>;
}

#[async_trait]
impl GearsApi for StravaClient {
    async fn get_gear_by_id(&self, id: &str) -> Result<DetailedGear> {
        const OPERATION: &str = "getGearById";

        if id.trim().is_empty() {
            return Err(ApiError::missing_parameter("id", OPERATION));
        }

        let path = PathTemplate::new("/gear/{id}").param("id", id).build();
        let request = ApiRequest::new(OPERATION, Method::GET, path).auth(&[STRAVA_OAUTH]);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Configuration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> StravaClient {
        let config = Configuration::default()
            .with_base_path(server.uri())
            .with_access_token("test-token");
        StravaClient::with_config(config).expect("client init")
    }

    #[tokio::test]
    async fn test_get_gear_by_id() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "id": "b1231",
            "primary": false,
            "resource_state": 3,
            "distance": 388206,
            "brand_name": "BMC",
            "model_name": "Teammachine",
            "frame_type": 3,
            "description": "My Bike.",
            "name": "BMC Teammachine"
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/gear/b1231"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let gear = client_for(&server)
            .get_gear_by_id("b1231")
            .await
            .expect("get_gear_by_id failed");

        let expected = DetailedGear {
            id: Some("b1231".to_string()),
            resource_state: Some(3),
            primary: Some(false),
            name: Some("BMC Teammachine".to_string()),
            distance: Some(388206.0),
            brand_name: Some("BMC".to_string()),
            model_name: Some("Teammachine".to_string()),
            frame_type: Some(3),
            description: Some("My Bike.".to_string()),
        };

        assert_eq!(gear, expected);
    }

    #[tokio::test]
    async fn test_get_gear_by_id_missing_id_sends_nothing() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).get_gear_by_id("  ").await.unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'id' when calling getGearById"
        );
    }

    #[tokio::test]
    async fn test_get_gear_by_id_not_found() {
        let server = MockServer::start().await;
        let body = r#"{"message":"Resource Not Found","errors":[{"resource":"Gear","field":"id","code":"not found"}]}"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/gear/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_gear_by_id("missing").await.unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.body(), Some(body));
        assert_eq!(err.to_string(), format!("Error calling getGearById: {body}"));
        let fault = err.fault().expect("fault body");
        assert_eq!(fault.message.as_deref(), Some("Resource Not Found"));
    }
}
