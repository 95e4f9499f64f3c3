//! Freezo Server: freezer inventory over HTTP.
//!
//! Main entry point that loads configuration and starts the API server.

use tracing_subscriber::{EnvFilter, fmt};

use freezo_core::config::AppConfig;
use freezo_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting Freezo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = freezo_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let mut config = match std::env::var("FREEZO_CONFIG") {
        Ok(path) => AppConfig::load_file(&path)?,
        Err(_) => {
            let env = std::env::var("FREEZO_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)?
        }
    };

    config.apply_legacy_overrides(
        std::env::var("DB_PATH").ok().as_deref(),
        std::env::var("PORT").ok().as_deref(),
    )?;

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
