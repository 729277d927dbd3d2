mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod models;
mod prompts;
mod providers;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::interview::AiService;
use crate::llm_client::build_http_client;
use crate::providers::{PgProviderStore, ProviderDirectory, ProviderStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("interview_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL pool (lazy: the provider table may be unreachable at boot)
    let db = create_pool(&config.database_url)?;
    if let Err(e) = run_migrations(&db).await {
        warn!("Migrations not applied: {e:#}");
    }
    let provider_store: Arc<dyn ProviderStore> = Arc::new(PgProviderStore::new(db));

    // Provider directory: store snapshot, or the built-in aliases
    let directory = Arc::new(ProviderDirectory::load(provider_store.as_ref()).await);
    if !directory.is_known(&config.default_provider) {
        warn!(
            "Default provider '{}' is not a directory alias; it must name a vendor directly",
            config.default_provider
        );
    }

    // Shared vendor HTTP client
    let client = build_http_client(config.request_timeout_secs)
        .context("Failed to build vendor HTTP client")?;
    info!(
        "AI client initialized (default provider: {}, timeout: {}s, credentials: {:?})",
        config.default_provider, config.request_timeout_secs, config.credentials
    );

    let ai = AiService::new(
        client,
        Arc::clone(&directory),
        config.credentials.clone(),
        config.default_provider.clone(),
    );

    let state = AppState {
        directory,
        provider_store,
        ai,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
