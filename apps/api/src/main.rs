mod analysis;
mod config;
mod db;
mod errors;
mod models;
mod resumes;
mod routes;
mod state;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extract::PdfTextExtractor;
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::resumes::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let taxonomy = config.taxonomy()?;
    info!("Scoring against {} skills", taxonomy.len());

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Cannot create upload dir {}", config.upload_dir.display()))?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    let store = ResumeStore::new(pool);

    let state = AppState {
        store: store.clone(),
        extractor: Arc::new(PdfTextExtractor),
        taxonomy: Arc::new(taxonomy),
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal()).await?;

    // In-flight requests have drained; nothing else touches the pool.
    store.close().await;
    Ok(())
}

/// Serves until `shutdown` resolves, then waits for in-flight requests to finish.
async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C. Stops the listener from accepting new connections
/// while requests already in flight run to completion.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    info!("received ctrl+c interrupt, draining in-flight requests");
}
