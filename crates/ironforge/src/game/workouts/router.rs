use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use rand::Rng;
use serde_json::json;

use super::domain::{TitanEnrollment, TitanId, WorkoutSubmission};
use super::repository::{
    DuelSchedule, InventoryRepository, ItemCatalog, RepositoryError, TitanRepository,
    WellnessProvider,
};
use super::service::{OracleService, WorkoutService, WorkoutServiceError};

/// Router exposing titan enrollment, workout logging, and rating refresh.
pub fn workout_router<T, I, C>(service: Arc<WorkoutService<T, I, C>>) -> Router
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    Router::new()
        .route("/api/v1/titans", post(enroll_handler::<T, I, C>))
        .route("/api/v1/titans/:titan_id", get(profile_handler::<T, I, C>))
        .route(
            "/api/v1/titans/:titan_id/workouts",
            post(log_workout_handler::<T, I, C>),
        )
        .route(
            "/api/v1/titans/:titan_id/rating/refresh",
            post(rating_handler::<T, I, C>),
        )
        .with_state(service)
}

/// Router exposing the daily oracle decree.
pub fn oracle_router<W, D>(service: Arc<OracleService<W, D>>) -> Router
where
    W: WellnessProvider + 'static,
    D: DuelSchedule + 'static,
{
    Router::new()
        .route(
            "/api/v1/titans/:titan_id/decree",
            get(decree_handler::<W, D>),
        )
        .with_state(service)
}

pub(crate) async fn enroll_handler<T, I, C>(
    State(service): State<Arc<WorkoutService<T, I, C>>>,
    axum::Json(enrollment): axum::Json<TitanEnrollment>,
) -> Response
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    match service.register(enrollment) {
        Ok(profile) => (StatusCode::CREATED, axum::Json(profile.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<T, I, C>(
    State(service): State<Arc<WorkoutService<T, I, C>>>,
    Path(titan_id): Path<String>,
) -> Response
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    match service.profile(&TitanId(titan_id)) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn log_workout_handler<T, I, C>(
    State(service): State<Arc<WorkoutService<T, I, C>>>,
    Path(titan_id): Path<String>,
    axum::Json(submission): axum::Json<WorkoutSubmission>,
) -> Response
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    let id = TitanId(titan_id);
    let today = Local::now().date_naive();
    let mut thread_rng = rand::thread_rng();
    let mut draw = move || thread_rng.gen::<f64>();

    match service.log_workout(&id, &submission, today, &mut draw) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rating_handler<T, I, C>(
    State(service): State<Arc<WorkoutService<T, I, C>>>,
    Path(titan_id): Path<String>,
) -> Response
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    let today = Local::now().date_naive();
    match service.rating_snapshot(&TitanId(titan_id), today) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn decree_handler<W, D>(
    State(service): State<Arc<OracleService<W, D>>>,
    Path(titan_id): Path<String>,
) -> Response
where
    W: WellnessProvider + 'static,
    D: DuelSchedule + 'static,
{
    let today = Local::now().date_naive();
    match service.daily_decree(&TitanId(titan_id), today) {
        Ok(decree) => (StatusCode::OK, axum::Json(decree)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: WorkoutServiceError) -> Response {
    let status = match &error {
        WorkoutServiceError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WorkoutServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        WorkoutServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        WorkoutServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
