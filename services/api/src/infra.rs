use internship_match::catalog::{Catalog, CatalogLoader};
use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::matching::{MatchEngine, MatchPolicy};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) engine: Arc<MatchEngine>,
}

impl AppState {
    pub(crate) fn new(catalog: Catalog, policy: MatchPolicy, metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            catalog: Arc::new(catalog),
            engine: Arc::new(MatchEngine::new(policy)),
        }
    }
}

/// Catalog path from the CLI when given, otherwise from `APP_CATALOG_PATH`.
pub(crate) fn resolve_catalog(
    catalog: Option<PathBuf>,
    config: &AppConfig,
) -> Result<Catalog, AppError> {
    let path = catalog.unwrap_or_else(|| config.catalog.path.clone());
    CatalogLoader::from_path(path).map_err(AppError::from)
}
