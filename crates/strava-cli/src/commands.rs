/*
[INPUT]:  Parsed subcommands and an API client
[OUTPUT]: JSON value of the API result
[POS]:    Command layer - maps CLI subcommands to endpoint calls
[UPDATE]: When adding subcommands or endpoint arguments
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use strava_api::{CreateUploadRequest, FileParameter, GearsApi, UploadDataType, UploadsApi};
use tracing::info;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a piece of gear by id
    Gear {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Upload an activity file (requires activity:write)
    Upload {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Mark the activity as performed on a trainer
        #[arg(long)]
        trainer: bool,
        /// Tag the activity as a commute
        #[arg(long)]
        commute: bool,
        /// fit, fit.gz, tcx, tcx.gz, gpx or gpx.gz; inferred from FILE when omitted
        #[arg(long = "data-type", value_name = "TYPE")]
        data_type: Option<UploadDataType>,
        #[arg(long = "external-id")]
        external_id: Option<String>,
    },
    /// Fetch the processing status of an upload
    UploadStatus {
        #[arg(value_name = "UPLOAD_ID")]
        upload_id: i64,
    },
}

/// Run one subcommand against the API
pub async fn run<C>(client: &C, command: Command) -> Result<serde_json::Value>
where
    C: GearsApi + UploadsApi,
{
    match command {
        Command::Gear { id } => {
            info!(gear_id = %id, "fetching gear");
            let gear = client.get_gear_by_id(&id).await.context("get gear")?;
            Ok(serde_json::to_value(gear)?)
        }
        Command::Upload {
            file,
            name,
            description,
            trainer,
            commute,
            data_type,
            external_id,
        } => {
            let file_param = FileParameter::from_path("file", &file)
                .await
                .context("read activity file")?;
            info!(path = %file.display(), bytes = file_param.len(), "uploading activity");

            let mut request = CreateUploadRequest::new(file_param);
            request.name = name;
            request.description = description;
            request.external_id = external_id;
            if trainer {
                request.trainer = Some("1".to_string());
            }
            if commute {
                request.commute = Some("1".to_string());
            }
            if let Some(data_type) = data_type {
                request.data_type = Some(data_type);
            }

            let upload = client.create_upload(request).await.context("create upload")?;
            info!(upload_id = ?upload.id, status = ?upload.status, "upload accepted");
            Ok(serde_json::to_value(upload)?)
        }
        Command::UploadStatus { upload_id } => {
            info!(upload_id, "fetching upload");
            let upload = client
                .get_upload_by_id(upload_id)
                .await
                .context("get upload")?;
            Ok(serde_json::to_value(upload)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strava_api::{ApiError, Configuration, StravaClient};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> StravaClient {
        let config = Configuration::default()
            .with_base_path(server.uri())
            .with_access_token("test-token");
        StravaClient::with_config(config).expect("client init")
    }

    #[tokio::test]
    async fn test_gear_command() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gear/b1231"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "b1231", "name": "Road bike"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let value = run(&client_for(&server), Command::Gear { id: "b1231".to_string() })
            .await
            .expect("gear command");

        assert_eq!(value["name"], "Road bike");
    }

    #[tokio::test]
    async fn test_upload_command_sets_flags() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uploads"))
            .and(body_string_contains(r#"name="trainer""#))
            .and(body_string_contains(r#"name="external_id""#))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 5})))
            .expect(1)
            .mount(&server)
            .await;

        let file = std::env::temp_dir().join("strava-cli-command-test.gpx");
        tokio::fs::write(&file, "<gpx/>").await.expect("write temp file");

        let command = Command::Upload {
            file: file.clone(),
            name: None,
            description: None,
            trainer: true,
            commute: false,
            data_type: None,
            external_id: Some("ext-1".to_string()),
        };
        let value = run(&client_for(&server), command).await.expect("upload command");
        let _ = tokio::fs::remove_file(&file).await;

        assert_eq!(value["id"], 5);
        let received = server.received_requests().await.expect("recording enabled");
        let body = String::from_utf8_lossy(&received[0].body);
        assert!(!body.contains(r#"name="commute""#));
        assert!(body.contains("gpx"));
    }

    #[tokio::test]
    async fn test_upload_status_error_keeps_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uploads/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let err = run(&client_for(&server), Command::UploadStatus { upload_id: 9 })
            .await
            .unwrap_err();

        let api_err = err.downcast_ref::<ApiError>().expect("api error in chain");
        assert_eq!(api_err.status_code(), 404);
    }
}
