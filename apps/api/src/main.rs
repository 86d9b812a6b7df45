mod config;
mod db;
mod errors;
mod matching;
mod models;
mod repository;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{AnalyzerBackend, Config};
use crate::db::create_pool;
use crate::matching::engine::MatchEngine;
use crate::repository::postgres::PgRepository;
use crate::resume::fields::ResumeFieldExtractor;
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

    info!("Starting Internship API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let repo = Arc::new(PgRepository::new(db));

    // Resume extraction backend
    let extractor = match config.analyzer {
        AnalyzerBackend::Heuristic => ResumeFieldExtractor::heuristic(),
        AnalyzerBackend::Disabled => ResumeFieldExtractor::new(None),
    };
    if extractor.is_enabled() {
        info!("Resume extraction using {:?} language analyzer", config.analyzer);
    } else {
        warn!("Language analyzer disabled; resume extraction will return empty profiles");
    }

    let engine = MatchEngine::default();
    info!(
        "Match engine ready (weights {:?}, threshold {}, limit {})",
        engine.weights(),
        config.match_threshold,
        config.match_limit
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        students: repo.clone(),
        internships: repo.clone(),
        matches: repo,
        engine,
        extractor: Arc::new(extractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
