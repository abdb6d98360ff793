/*
[INPUT]:  Gear identifier (e.g., "b1231") and STRAVA_ACCESS_TOKEN
[OUTPUT]: Detailed gear record
[POS]:    Examples - gear lookup
[UPDATE]: When gear endpoints change
*/

use strava_api::*;

/// Example: look up a bike or pair of shoes by id
///
/// Reads the access token from `STRAVA_ACCESS_TOKEN`.
#[tokio::main]
async fn main() {
    println!("=== Strava Gear Example ===\n");

    let config = match Configuration::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return;
        }
    };
    let client = match StravaClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let gear_id = std::env::args().nth(1).unwrap_or_else(|| "b1231".to_string());

    println!("Fetching gear {}...", gear_id);
    match client.get_gear_by_id(&gear_id).await {
        Ok(gear) => {
            println!("✓ Gear: {:?}", gear);
            if let Some(frame_type) = gear.frame_type() {
                println!("  frame type: {:?}", frame_type);
            }
        }
        Err(e) => println!("✗ Error ({}): {}", e.status_code(), e),
    }
}
