use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::{roster_router, with_operational_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bench_triage::config::AppConfig;
use bench_triage::error::AppError;
use bench_triage::telemetry;
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
    if let Some(path) = args.roster.take() {
        config.roster.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let roster = load_roster(config.roster.path.as_deref())?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_operational_routes(roster_router(roster))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "bench triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
