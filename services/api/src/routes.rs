use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use creator_ai::error::AppError;
use creator_ai::workflows::seo::{
    analysis_router, AlertPublisher, AnalysisRepository, AnalysisService,
};
use creator_ai::workflows::studio::{ChannelAudit, StudioCsvImporter};

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelAuditRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) max_rows: Option<usize>,
}

pub(crate) fn with_analysis_routes<R, A>(service: Arc<AnalysisService<R, A>>) -> axum::Router
where
    R: AnalysisRepository + 'static,
    A: AlertPublisher + 'static,
{
    analysis_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/channel/audit",
            axum::routing::post(channel_audit_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn channel_audit_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ChannelAuditRequest>,
) -> Result<Json<ChannelAudit>, AppError> {
    // Client-requested caps can only tighten the configured bound.
    let cap = payload
        .max_rows
        .map(|rows| rows.min(state.audit_max_rows))
        .unwrap_or(state.audit_max_rows);

    let reader = Cursor::new(payload.csv.into_bytes());
    let audit = StudioCsvImporter::audit_from_reader(reader, cap)?;
    Ok(Json(audit))
}
