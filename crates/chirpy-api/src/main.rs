//! Chirpy API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chirpy-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env`.

use chirpy_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|value| Environment::parse(&value))
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Chirpy API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        platform = ?config.app.platform,
        port = config.api.port,
        "Configuration loaded"
    );

    chirpy_api::run(config).await?;

    Ok(())
}
