use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use anyhow::Context;
use anyhow::Error as AnyhowError;

use models::errors::RiskError;
use risk_core::RiskPipeline;

pub mod clients;
pub mod config;

use crate::clients::{HttpNoteSource, HttpPatientSource};
use crate::config::RiskApiConfig;

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error(transparent)]
    Risk(#[from] RiskError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] AnyhowError),
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response.
// The three pipeline failure modes keep their distinct statuses: NotFound is
// terminal, Unavailable is retryable by the caller, Validation never is.
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RestApiError::Risk(RiskError::PatientNotFound(id)) => (
                StatusCode::NOT_FOUND,
                format!("patient with identifier {} was not found", id),
            ),
            RestApiError::Risk(RiskError::Unavailable(msg)) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            RestApiError::Risk(RiskError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            RestApiError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("IO error: {}", e)),
            RestApiError::Anyhow(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", e),
            ),
        };

        let body = Json(json!({
            "status": "error",
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

// Shared state for the Axum application
#[derive(Clone)]
struct AppState {
    pipeline: Arc<RiskPipeline<HttpPatientSource, HttpNoteSource>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RiskLevelQuery {
    patient_id: String,
}

// Handler for the /api/risklevels endpoint. The response body is the
// literal risk-level label, which is how the level crosses process
// boundaries.
async fn get_risk_level_handler(
    State(state): State<AppState>,
    Query(params): Query<RiskLevelQuery>,
) -> Result<String, RestApiError> {
    let level = state.pipeline.classify_risk(&params.patient_id).await?;
    Ok(level.as_str().to_string())
}

// Handler for the /api/v1/health endpoint
async fn health_check_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "Risk API is healthy" })),
    )
}

// Handler for the /api/v1/version endpoint
async fn version_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": 1 })),
    )
}

/// Builds the risk pipeline from configuration: one shared HTTP client
/// with a bounded timeout, the two collaborator sources, and the
/// configured (or built-in) symptom vocabulary.
pub fn build_pipeline(
    config: &RiskApiConfig,
) -> Result<RiskPipeline<HttpPatientSource, HttpNoteSource>, AnyhowError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client for collaborator calls")?;

    Ok(RiskPipeline::new(
        HttpPatientSource::new(client.clone(), config.patient_service.base_url.clone()),
        HttpNoteSource::new(client, config.note_service.base_url.clone()),
        config.vocabulary(),
    ))
}

// Main function to start the risk API server
pub async fn start_server(
    config: RiskApiConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let pipeline = build_pipeline(&config)?;
    let app_state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let app = Router::new()
        .route("/api/risklevels", get(get_risk_level_handler))
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/version", get(version_handler))
        .with_state(app_state)
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context(format!(
            "Invalid listen address {}:{}",
            config.host, config.port
        ))?;
    info!("Risk API server listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("Received shutdown signal.");
        })
        .await
        .context("Risk API server failed to start or run")?;

    info!("Risk API server stopped.");
    Ok(())
}
