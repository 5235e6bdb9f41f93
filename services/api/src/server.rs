use crate::cli::ServeArgs;
use crate::infra::{resolve_catalog, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::telemetry;
use std::sync::atomic::Ordering;
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

    // no catalog, no service
    let catalog = resolve_catalog(args.catalog.take(), &config)?;
    let vocabulary = catalog.vocabulary().len();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState::new(catalog, config.matching.clone(), prometheus_handle);
    let readiness_flag = state.readiness.clone();
    let postings = state.catalog.len();

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        postings,
        vocabulary,
        top_k = config.matching.top_k,
        "internship match service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
