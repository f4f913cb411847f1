use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::settings::AnalysisConfig;
use crate::config::Config;
use crate::library::KeywordLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Validated lookup tables and weights, loaded once at startup and never mutated.
    pub analysis: Arc<AnalysisConfig>,
    /// Pluggable keyword library. Default: `PgKeywordLibrary`.
    pub keyword_library: Arc<dyn KeywordLibrary>,
}
