use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

mod collector;
mod fetcher;
mod models;
mod parser;
mod traits;

use collector::collect_teams;
use fetcher::HttpPageSource;

const OUTPUT_FILE: &str = "teams.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    info!("Starting hockey team stats scrape");
    let started = Instant::now();

    let source = match HttpPageSource::new() {
        Ok(source) => Arc::new(source),
        Err(e) => {
            error!("Failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let teams = collect_teams(source).await;

    info!("Elapsed time {:.2}s", started.elapsed().as_secs_f64());
    info!("Parsed {} teams", teams.len());

    let data = match serde_json::to_vec(&teams) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to serialize teams: {e}");
            std::process::exit(1);
        }
    };

    info!("Writing teams to {OUTPUT_FILE}");
    if let Err(e) = std::fs::write(OUTPUT_FILE, data) {
        error!("Failed to write {OUTPUT_FILE}: {e}");
        std::process::exit(1);
    }

    info!("All operations complete");
}
