use super::common::*;
use crate::game::workouts::repository::WellnessSnapshot;
use crate::game::workouts::router::{oracle_router, workout_router};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn enrollment_endpoint_returns_the_created_view() {
    let (service, _, _) = build_service();
    let router = workout_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/titans",
            serde_json::json!({
                "name": "Brakka",
                "training_path": "WARDEN",
                "wilks_score": 400.0,
                "ftp_watts_per_kg": 3.25,
                "mrv_adherence": 1.0,
                "cardio_adherence": 1.0,
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert!(body["titan_id"].as_str().expect("id").starts_with("titan-"));
    assert_eq!(body["power_rating"], 575);
    assert_eq!(body["level"], 1);
    assert_eq!(body["training_path"], "warden");
}

#[tokio::test]
async fn unknown_titans_return_not_found() {
    let (service, _, _) = build_service();
    let router = workout_router(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/titans/titan-ghost")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "record not found");
}

#[tokio::test]
async fn invalid_workouts_are_unprocessable() {
    let (service, _, _) = build_service();
    let profile = service.register(enrollment("Brakka")).expect("enrolls");
    let router = workout_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/titans/{}/workouts", profile.titan_id.0),
            serde_json::json!({
                "duration_minutes": -10.0,
                "intensity": 0.5,
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("message")
        .contains("duration must be positive"));
}

#[tokio::test]
async fn logged_workouts_report_rewards() {
    let (service, _, _) = build_service();
    let profile = service.register(enrollment("Brakka")).expect("enrolls");
    let router = workout_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/titans/{}/workouts", profile.titan_id.0),
            serde_json::json!({
                "duration_minutes": 60.0,
                "intensity": 0.8,
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["workout_number"], 1);
    assert_eq!(body["xp_awarded"], 160);
    assert_eq!(body["streak_days"], 1);
    assert_eq!(body["reward_note"], "Full rewards");
    assert_eq!(body["recommended_to_stop"], false);
}

#[tokio::test]
async fn rating_refresh_returns_the_snapshot() {
    let (service, _, _) = build_service();
    let profile = service.register(enrollment("Brakka")).expect("enrolls");
    let router = workout_router(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!(
                    "/api/v1/titans/{}/rating/refresh",
                    profile.titan_id.0
                ))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["power_rating"], 575);
    assert_eq!(body["decay_applied"], false);
    assert_eq!(body["days_since_activity"], 0);
}

#[tokio::test]
async fn decree_endpoint_serves_the_daily_decree() {
    let oracle = build_oracle(
        WellnessSnapshot {
            readiness: 20,
            sleep_score: Some(55),
            is_injured: false,
        },
        None,
    );
    let router = oracle_router(Arc::new(oracle));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/titans/titan-000001/decree")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["code"], "REST_FORCED");
    assert_eq!(body["kind"], "debuff");
    assert_eq!(body["actions"]["lock_features"][0], "heavy_lifts");
}
