pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::ingest::handlers as ingest;
use crate::library::handlers as library;
use crate::records::handlers as records;
use crate::state::AppState;

// Room for multipart framing around the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/match", post(analysis::handle_match))
        .route("/api/v1/ats-check", post(analysis::handle_ats_check))
        .route("/api/v1/grammar-check", post(analysis::handle_grammar_check))
        .route("/api/v1/parse", post(analysis::handle_parse))
        .route("/api/v1/resumes/auto-fix", post(analysis::handle_auto_fix))
        // Ingestion
        .route("/api/v1/resumes/scan", post(ingest::handle_scan))
        // Keyword library
        .route("/api/v1/keywords", get(library::handle_list_keywords))
        // Records
        .route(
            "/api/v1/jobs",
            post(records::handle_create_job).get(records::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(records::handle_get_job))
        .route(
            "/api/v1/resumes",
            post(records::handle_create_resume).get(records::handle_list_resumes),
        )
        .route("/api/v1/resumes/:id", get(records::handle_get_resume))
        .route("/api/v1/history", get(records::handle_list_history))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::settings::{AnalysisConfig, AnalysisSettings};
    use crate::config::Config;
    use crate::library::InMemoryKeywordLibrary;

    const RESUME: &str = "John Doe. john@x.com. 555-123-4567. EXPERIENCE: Led team of 5 engineers, \
        increased revenue 20%. SKILLS: Python, React.";
    const JOB: &str = "Looking for a Python developer with React and Docker experience.";

    fn test_config() -> Config {
        Config {
            database_url: "postgres://postgres@localhost/resume_analyzer_test".into(),
            port: 0,
            rust_log: "debug".into(),
            analysis_config_path: None,
            max_document_chars: 10_000,
            max_upload_bytes: 64 * 1024,
        }
    }

    // The pool never connects unless a handler touches the database.
    fn app_with(config: Config, analysis: AnalysisConfig) -> Router {
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        build_router(AppState {
            db,
            config,
            analysis: Arc::new(analysis),
            keyword_library: Arc::new(InMemoryKeywordLibrary::default()),
        })
    }

    fn app() -> Router {
        app_with(test_config(), AnalysisConfig::default())
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(&app(), Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_endpoint_reports_missing_docker() {
        let (status, body) = call(
            &app(),
            post_json(
                "/api/v1/match",
                json!({ "resume_text": RESUME, "job_description": JOB }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let missing: Vec<&str> = body["missing_keywords"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(missing.contains(&"docker"));
    }

    #[tokio::test]
    async fn test_analyze_feeds_keyword_library() {
        let app = app();
        let (status, body) = call(
            &app,
            post_json(
                "/api/v1/analyze",
                json!({
                    "resume_text": RESUME,
                    "job_description": JOB,
                    "role_type": "backend",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role_type"], "Backend");
        assert!(body["history_id"].is_null());
        let overall = body["overall_score"].as_u64().unwrap();
        assert!(overall <= 100);

        let (status, body) = call(
            &app,
            Request::get("/api/v1/keywords?role_type=Backend")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let keywords: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|row| row["keyword"].as_str())
            .collect();
        assert!(keywords.contains(&"docker"), "keywords = {keywords:?}");
    }

    #[tokio::test]
    async fn test_repeated_analyze_returns_identical_results() {
        let app = app();
        let request = || {
            post_json(
                "/api/v1/analyze",
                json!({
                    "resume_text": RESUME,
                    "job_description": JOB,
                    "role_type": "Full Stack",
                }),
            )
        };
        let (first_status, first) = call(&app, request()).await;
        let (second_status, second) = call(&app, request()).await;
        let (third_status, third) = call(&app, request()).await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(third_status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn test_analyze_requires_a_resume() {
        let (status, body) = call(
            &app(),
            post_json("/api/v1/analyze", json!({ "job_description": JOB })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_role_type() {
        let (status, _) = call(
            &app(),
            post_json(
                "/api/v1/analyze",
                json!({ "resume_text": RESUME, "job_description": JOB, "role_type": "chef" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_strict_config_turns_empty_resume_into_400() {
        let strict = AnalysisConfig::from_settings(AnalysisSettings {
            require_non_empty_input: true,
            ..AnalysisSettings::default()
        })
        .unwrap();
        let app = app_with(test_config(), strict);
        let (status, _) = call(
            &app,
            post_json(
                "/api/v1/analyze",
                json!({ "resume_text": "  ", "job_description": JOB }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_text_is_rejected() {
        let config = Config {
            max_document_chars: 20,
            ..test_config()
        };
        let app = app_with(config, AnalysisConfig::default());
        let (status, body) = call(
            &app,
            post_json("/api/v1/ats-check", json!({ "resume_text": RESUME })),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_auto_fix_defaults_to_every_fix() {
        let (status, body) = call(
            &app(),
            post_json(
                "/api/v1/resumes/auto-fix",
                json!({
                    "resume_text": "Jane Doe\nResponsible for billing\nSKILLS\nPython",
                    "job_description": JOB,
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let fixed = body["fixed_text"].as_str().unwrap();
        assert!(fixed.contains("Led billing"));
        assert!(fixed.contains("docker"));
        assert_eq!(body["improvements_applied"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_component_endpoints_respond() {
        let app = app();
        for uri in ["/api/v1/ats-check", "/api/v1/grammar-check", "/api/v1/parse"] {
            let (status, _) = call(&app, post_json(uri, json!({ "resume_text": RESUME }))).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_scan_extracts_plain_text_upload() {
        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            Jane Doe\r\nSKILLS\r\nRust\r\n\
            --BOUNDARY--\r\n";
        let request = Request::post("/api/v1/resumes/scan")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let (status, json) = call(&app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["text"], "Jane Doe\nSKILLS\nRust");
        assert_eq!(json["source_format"], "plain");
        assert_eq!(json["word_count"], 4);
        assert_eq!(json["line_count"], 3);
    }
}
