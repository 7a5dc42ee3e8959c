//! Smart Basket HTTP server.

use anyhow::Context;
use clap::Parser;
use smart_basket::api::rest::{AppState, create_router};
use smart_basket::application::services::{BasketComparisonService, ComparisonServiceConfig};
use smart_basket::config::AppConfig;
use smart_basket::infrastructure::persistence::in_memory::InMemoryPriceSnapshotProvider;
use smart_basket::telemetry::init_tracing;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "smart-basket", version, about)]
struct Args {
    /// Configuration file (defaults to `config/default.toml` when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON price snapshot to seed the store with; overrides `snapshot.path`.
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging).context("initializing tracing")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting smart-basket");

    let provider = match args.snapshot.or_else(|| config.snapshot.path.clone()) {
        Some(path) => InMemoryPriceSnapshotProvider::from_json_file(&path)
            .await
            .with_context(|| format!("seeding snapshot from {}", path.display()))?,
        None => {
            tracing::warn!("no snapshot configured, starting with an empty catalog");
            InMemoryPriceSnapshotProvider::new()
        }
    };

    let service_config = ComparisonServiceConfig::with_timeout(config.comparison.snapshot_timeout_ms)
        .with_default_currency(config.default_currency()?);
    let service = BasketComparisonService::new(Arc::new(provider), service_config);
    let app = create_router(Arc::new(AppState::new(service)));

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;

    tracing::info!(%address, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
