//! FocusGroup AI server binary.
//!
//! Loads configuration, wires the completion provider into the application
//! handlers, and serves the axum router.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use focusgroup_ai::adapters::ai::{OpenAIConfig, OpenAIProvider};
use focusgroup_ai::adapters::http::focus_group::{focus_group_router, FocusGroupAppState};
use focusgroup_ai::config::AppConfig;
use focusgroup_ai::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast on configuration problems, before any listener exists.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        std::process::exit(1);
    }

    init_tracing(&config);

    let provider = build_provider(&config);
    if provider.is_some() {
        tracing::info!(model = %config.ai.model, "completion API integration enabled");
    } else {
        tracing::warn!("completion API key is a placeholder; serving deterministic fallbacks only");
    }

    let state = FocusGroupAppState::new(provider);
    let app = focus_group_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "FocusGroup AI listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes the tracing subscriber with the configured filter directive.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the provider handle, or `None` in fallback-only mode.
fn build_provider(config: &AppConfig) -> Option<Arc<dyn AIProvider>> {
    if !config.ai.integration_enabled() {
        return None;
    }

    let api_key = config.ai.openai_api_key.clone()?;
    let provider_config = OpenAIConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());

    Some(Arc::new(OpenAIProvider::new(provider_config)))
}
