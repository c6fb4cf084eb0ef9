use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use ironforge::game::workouts::{
    oracle_router, workout_router, DuelSchedule, InventoryRepository, ItemCatalog, OracleService,
    TitanRepository, WellnessProvider, WorkoutService,
};
use serde_json::json;
use std::sync::Arc;

/// Compose the domain routers with the operational endpoints.
pub(crate) fn with_game_routes<T, I, C, W, D>(
    workouts: Arc<WorkoutService<T, I, C>>,
    oracle: Arc<OracleService<W, D>>,
) -> axum::Router
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
    W: WellnessProvider + 'static,
    D: DuelSchedule + 'static,
{
    workout_router(workouts)
        .merge(oracle_router(oracle))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
