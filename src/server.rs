//! HTTP surface for the analyzer.
//!
//! Axum router with health, info, and the analyze endpoint. The endpoint is
//! the caller-facing wrapper from the dashboard's point of view: it always
//! answers 200 with a well-formed result, so the UI needs no error-branch
//! logic beyond rendering what it gets.

use crate::analyzer::{Analyzer, ERROR_SUMMARY};
use crate::config::Config;
use crate::error::{InsightError, Result};
use crate::normalize::normalize_reasons;
use crate::schema::AnalysisResult;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub analyzer: Arc<Analyzer>,
    pub metrics: Arc<Mutex<HttpMetrics>>,
}

/// Request counters for the /info endpoint
#[derive(Debug, Clone, Default)]
pub struct HttpMetrics {
    pub total_requests: u64,
    pub fallback_total: u64,
    pub last_request_unix: u64,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
    /// Pre-split reason sequence
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Raw multi-line text, one reason per line; used when `reasons` is empty
    #[serde(default)]
    pub text: String,
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Info endpoint
async fn info_handler(State(state): State<HttpState>) -> impl IntoResponse {
    let metrics = state.metrics.lock().await;
    Json(json!({
        "service": "cancel-insight",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.analyzer.provider_name(),
        "total_requests": metrics.total_requests,
        "fallback_total": metrics.fallback_total,
        "last_request_unix": metrics.last_request_unix,
    }))
}

/// Analyze endpoint: always 200 with a complete AnalysisResult body
async fn analyze_handler(
    State(state): State<HttpState>,
    Json(body): Json<AnalyzeBody>,
) -> (StatusCode, Json<AnalysisResult>) {
    let reasons = if body.reasons.is_empty() {
        normalize_reasons(&body.text)
    } else {
        body.reasons
    };

    let result = state.analyzer.analyze(&reasons).await;

    let mut metrics = state.metrics.lock().await;
    metrics.total_requests += 1;
    metrics.last_request_unix = std::time::SystemTime::UNIX_EPOCH
        .elapsed()
        .unwrap_or_default()
        .as_secs();
    if result.summary == ERROR_SUMMARY {
        metrics.fallback_total += 1;
    }

    (StatusCode::OK, Json(result))
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn run_http(config: &Config, analyzer: Arc<Analyzer>) -> Result<()> {
    let state = HttpState {
        analyzer,
        metrics: Arc::new(Mutex::new(HttpMetrics::default())),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.system.bind_addr)
        .await
        .map_err(|e| InsightError::Internal {
            message: format!("failed to bind {}: {}", config.system.bind_addr, e),
        })?;
    info!(addr = %config.system.bind_addr, "HTTP server listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| InsightError::Internal {
            message: format!("HTTP server error: {}", e),
        })
}
