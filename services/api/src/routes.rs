use crate::assets;
use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use internship_match::catalog::CatalogStats;
use internship_match::error::AppError;
use internship_match::matching::{clamp_top_k, CandidateRequest, ScoredMatch};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(flatten)]
    pub(crate) candidate: CandidateRequest,
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse<'a> {
    pub(crate) top_k: usize,
    pub(crate) returned: usize,
    pub(crate) recommendations: Vec<ScoredMatch<'a>>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/static/:file", get(assets::static_file))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/recommend", post(recommend_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "postings": state.catalog.len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Form endpoint: returns the bare shortlist array.
pub(crate) async fn recommend_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<CandidateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(candidate) = payload?;
    let shortlist = state.engine.recommend(&state.catalog, &candidate);

    info!(returned = shortlist.len(), "served recommendation");
    Ok(Json(shortlist).into_response())
}

pub(crate) async fn recommendations_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(RecommendationRequest { candidate, top_k }) = payload?;
    let top_k = top_k
        .map(clamp_top_k)
        .unwrap_or(state.engine.policy().top_k);
    let recommendations = state
        .engine
        .recommend_top(&state.catalog, &candidate, top_k);

    info!(top_k, returned = recommendations.len(), "served recommendation");
    Ok(Json(RecommendationResponse {
        top_k,
        returned: recommendations.len(),
        recommendations,
    })
    .into_response())
}

pub(crate) async fn catalog_endpoint(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}
