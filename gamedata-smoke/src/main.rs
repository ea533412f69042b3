//! Smoke-tests a locally running game-data API and narrates the results.

mod probes;
mod settings;

use crate::settings::Settings;
use gamedata_api::GameDataClient;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Keep stdout as the report channel; anything the stack logs goes to stderr.
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load().expect("Failed to load probe settings");
    let client = GameDataClient::new(
        &settings.base_url,
        Duration::from_secs(settings.timeout_secs),
    )
    .expect("Failed to build HTTP client");

    for line in probes::run_all(&client).await {
        println!("{line}");
    }
}
