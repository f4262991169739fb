//! CBSA Explorer HTTP Server Binary
//!
//! Entry point for the explorer REST API server. It loads and prepares the
//! weekly time-series dataset once, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! CBSA_DATA_PATH=cbsa_timeseries.csv cargo run --bin cbsa-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CBSA_DATA_PATH`: Weekly time-series CSV (default: cbsa_timeseries.csv)
//! - `CBSA_SOURCES_PATH`: Sources manifest CSV (default: data_sources.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cbsa_explorer::config::AppConfig;
use cbsa_explorer::data;
use cbsa_explorer::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting CBSA Explorer HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load and derive the dataset once; requests share the prepared table
    let dataset = data::init_store(&config)?;
    info!(
        "Dataset ready: {} observations, checksum {}",
        dataset.observations.len(),
        &dataset.checksum[..12]
    );

    // Create application state
    let state = AppState::new(dataset, config);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
