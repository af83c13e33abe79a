use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use railstat_core::{JourneySummary, PipelineError};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/journeys", post(upload))
        .route("/journeys/filter", post(filter))
        .route("/journeys/stations", get(stations))
        .with_state(app_state)
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_hash: String,
    pub summary: JourneySummary,
    pub stations: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub stations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub summary: JourneySummary,
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub file_hash: String,
    pub stations: BTreeSet<String>,
}

pub struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PipelineError::InvalidInput(_) | PipelineError::Parser(_) => StatusCode::BAD_REQUEST,
            PipelineError::MissingState => StatusCode::CONFLICT,
            PipelineError::EmptyResultSet => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::Io(_) | PipelineError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, "request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn upload(
    State(app_state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut session = app_state.session.lock().await;

    let output = app_state.pipeline.ingest_bytes(&body)?;
    session.replace(&output);

    Ok(Json(UploadResponse {
        file_hash: output.file_hash,
        summary: output.summary,
        stations: output.stations,
    }))
}

pub async fn filter(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, ApiError> {
    let selected: HashSet<String> = payload.stations.into_iter().collect();

    let session = app_state.session.lock().await;
    let summary = session.filter_summary(&selected)?;

    Ok(Json(FilterResponse { summary }))
}

pub async fn stations(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<StationsResponse>, ApiError> {
    let session = app_state.session.lock().await;
    let working_set = session.working_set()?;

    Ok(Json(StationsResponse {
        file_hash: working_set.file_hash.clone(),
        stations: session.stations()?,
    }))
}
