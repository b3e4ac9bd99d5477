mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::source::{InMemoryJobSource, JobSource, PgJobSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Refboard API v{}", env!("CARGO_PKG_VERSION"));

    // Job source: JSON fixture when configured, PostgreSQL otherwise
    let jobs: Arc<dyn JobSource> = match (&config.jobs_fixture, &config.database_url) {
        (Some(path), _) => Arc::new(InMemoryJobSource::load(path).await?),
        (None, Some(url)) => {
            let db = create_pool(url, config.db_max_connections).await?;
            Arc::new(PgJobSource::new(db))
        }
        (None, None) => return Err(anyhow!("DATABASE_URL is not set")),
    };

    info!(
        "Suggestions: default limit {}, up to {} candidates",
        config.suggestion_limit, config.max_candidates
    );

    let state = AppState {
        config: config.clone(),
        jobs,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
