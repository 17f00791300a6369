use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPrognoseRepository};
use crate::routes::with_prognose_routes;
use abirechner::config::AppConfig;
use abirechner::error::AppError;
use abirechner::prognose::PrognoseService;
use abirechner::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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
    };

    let repository = Arc::new(InMemoryPrognoseRepository::default());
    let prognose_service = Arc::new(PrognoseService::new(repository));

    let app = with_prognose_routes(prognose_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "abitur prognosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
