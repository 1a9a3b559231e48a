//! Addrmatch API
//!
//! HTTP service for the address-equivalence decision pipeline. Exposes one
//! comparison endpoint and a health check; the actual reasoning is
//! delegated to the Gemini oracle through `addrmatch-comparator`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use addrmatch_comparator::{Comparator, ComparatorConfig};
use addrmatch_llm::GeminiOracle;
use config::ApiConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// API service error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build application state from configuration and an optional credential
///
/// With no credential the service still starts, but every comparison is
/// rejected as a configuration fault until the credential is provided.
pub fn build_state(config: &ApiConfig, api_key: Option<String>) -> AppState<GeminiOracle> {
    let comparator = api_key.map(|key| {
        let oracle = GeminiOracle::with_endpoint(&config.oracle.endpoint, &config.oracle.model, key)
            .with_timeout(Duration::from_secs(config.oracle.timeout_secs));

        let comparator_config = ComparatorConfig {
            oracle_timeout_secs: config.oracle.timeout_secs,
            ..ComparatorConfig::default()
        };

        Arc::new(Comparator::new(oracle, comparator_config))
    });

    AppState { comparator }
}

/// Start the API HTTP server
///
/// Loads the oracle credential from the environment, builds the comparison
/// pipeline, and serves until shutdown.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting addrmatch API");
    info!("Bind address: {}", config.bind_addr());
    info!("Oracle model: {}", config.oracle.model);
    info!("Oracle timeout: {} seconds", config.oracle.timeout_secs);

    let api_key = std::env::var(config::API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty());
    if api_key.is_none() {
        warn!(
            "{} is not set; comparisons will fail until it is configured",
            config::API_KEY_ENV
        );
    }

    let state = build_state(&config, api_key);
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}
