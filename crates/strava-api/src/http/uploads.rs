/*
[INPUT]:  Activity files with upload metadata, upload identifiers
[OUTPUT]: Upload status records
[POS]:    HTTP layer - upload endpoints (require OAuth token with activity:write)
[UPDATE]: When adding new upload endpoints or changing form fields
*/

use async_trait::async_trait;
use reqwest::Method;

use crate::auth::STRAVA_OAUTH;
use crate::http::{ApiRequest, PathTemplate, Result, StravaClient};
use crate::types::{CreateUploadRequest, Upload};

/// Upload endpoints
#[async_trait]
pub trait UploadsApi: Send + Sync {
    /// Upload Activity: uploads a new data file to create an activity from.
    /// Requires activity:write scope.
    ///
    /// POST /uploads (multipart/form-data)
    async fn create_upload(&self, request: CreateUploadRequest) -> Result<Upload>;

    /// Get Upload: returns an upload for a given identifier.
    /// Requires activity:write scope.
    ///
    /// GET /uploads/{uploadId}
    async fn get_upload_by_id(&self, upload_id: i64) -> Result<Upload>;
}

#[async_trait]
impl UploadsApi for StravaClient {
    async fn create_upload(&self, request: CreateUploadRequest) -> Result<Upload> {
        const OPERATION: &str = "createUpload";

        let CreateUploadRequest {
            file,
            name,
            description,
            trainer,
            commute,
            data_type,
            external_id,
        } = request;

        let path = PathTemplate::new("/uploads").build();
        let request = ApiRequest::new(OPERATION, Method::POST, path)
            .file(file)
            .form("name", name)
            .form("description", description)
            .form("trainer", trainer)
            .form("commute", commute)
            .form("data_type", data_type)
            .form("external_id", external_id)
            .auth(&[STRAVA_OAUTH]);
        self.execute(request).await
    }

    async fn get_upload_by_id(&self, upload_id: i64) -> Result<Upload> {
        const OPERATION: &str = "getUploadById";

        let path = PathTemplate::new("/uploads/{uploadId}")
            .param("uploadId", upload_id)
            .build();
        let request = ApiRequest::new(OPERATION, Method::GET, path).auth(&[STRAVA_OAUTH]);
        self.execute(request).await
    }
}
