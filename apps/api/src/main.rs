mod analysis;
mod config;
mod db;
mod errors;
mod ingest;
mod library;
mod models;
mod records;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::settings::AnalysisConfig;
use crate::config::Config;
use crate::db::create_pool;
use crate::library::PgKeywordLibrary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Analysis tables are validated once; a bad table aborts startup
    let analysis = AnalysisConfig::load(config.analysis_config_path.as_deref())
        .context("failed to load analysis configuration")?;
    info!(
        custom = config.analysis_config_path.is_some(),
        top_n = analysis.top_n_keywords(),
        "Analysis configuration loaded"
    );

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    let keyword_library = Arc::new(PgKeywordLibrary::new(db.clone()));

    let state = AppState {
        db,
        config: config.clone(),
        analysis: Arc::new(analysis),
        keyword_library,
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
