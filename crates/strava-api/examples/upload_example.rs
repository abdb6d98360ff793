/*
[INPUT]:  Path to a .fit/.tcx/.gpx file and STRAVA_ACCESS_TOKEN
[OUTPUT]: Upload record and its processing status
[POS]:    Examples - activity upload
[UPDATE]: When upload endpoints or form fields change
*/

use strava_api::*;

/// Example: upload an activity file, then check on it once
///
/// Requires a token with the activity:write scope.
#[tokio::main]
async fn main() {
    println!("=== Strava Upload Example ===\n");

    let Some(file_path) = std::env::args().nth(1) else {
        eprintln!("usage: upload_example <FILE>");
        return;
    };

    let client = match Configuration::from_env().and_then(StravaClient::with_config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let file = match FileParameter::from_path("file", &file_path).await {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    println!("✓ Read {} bytes from {}", file.len(), file_path);

    let request = CreateUploadRequest::new(file).name("Uploaded from strava-api");
    let upload = match client.create_upload(request).await {
        Ok(upload) => {
            println!("✓ Upload created: {:?}", upload);
            upload
        }
        Err(e) => {
            println!("✗ Error ({}): {}", e.status_code(), e);
            return;
        }
    };

    if let Some(id) = upload.id {
        println!("\nChecking upload {}...", id);
        match client.get_upload_by_id(id).await {
            Ok(status) => println!("✓ Status: {:?}", status.status),
            Err(e) => println!("✗ Error ({}): {}", e.status_code(), e),
        }
    }
}
