use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAlertPublisher, InMemoryAnalysisRepository};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use creator_ai::config::AppConfig;
use creator_ai::error::AppError;
use creator_ai::telemetry;
use creator_ai::workflows::seo::AnalysisService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        audit_max_rows: config.import.max_audit_rows,
    };

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let analysis_service = Arc::new(AnalysisService::new(repository, alerts));

    let app = with_analysis_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "video SEO coaching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
