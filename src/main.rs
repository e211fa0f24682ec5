//! latina-empire-api server entry point.
//!
//! Loads configuration, picks the content source and starts the Axum HTTP
//! server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use latina_empire_api::api;
use latina_empire_api::app_state::AppState;
use latina_empire_api::config::{LogFormat, SiteConfig};
use latina_empire_api::service::ContentService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = SiteConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting latina-empire-api");

    // Build service layer
    let content = ContentService::from_config(&config).context("building content source")?;
    if content.source_kind() == "fixture" {
        tracing::info!(data_dir = %config.data_dir.display(), "serving fixture content");
    }

    // Build router
    let app = api::build_app(AppState::new(content));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("serving http")?;

    Ok(())
}
