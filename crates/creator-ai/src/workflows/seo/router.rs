use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AnalysisId, AnalysisSubmission};
use super::repository::{AlertPublisher, AnalysisRepository, RepositoryError};
use super::service::{AnalysisService, AnalysisServiceError};

/// Router builder exposing HTTP endpoints for scoring and retrieval.
pub fn analysis_router<R, A>(service: Arc<AnalysisService<R, A>>) -> Router
where
    R: AnalysisRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/videos/analyses", post(submit_handler::<R, A>))
        .route(
            "/api/v1/videos/analyses/:analysis_id",
            get(fetch_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<AnalysisService<R, A>>>,
    axum::Json(submission): axum::Json<AnalysisSubmission>,
) -> Response
where
    R: AnalysisRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AnalysisServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R, A>(
    State(service): State<Arc<AnalysisService<R, A>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    R: AnalysisRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "analysis_id": id.0,
                "error": "analysis not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
