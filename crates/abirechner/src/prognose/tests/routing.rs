use super::common::*;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use crate::prognose::router::{CoverageCheckRequest, ValidateExamsRequest};
use crate::prognose::service::PrognoseService;

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(PrognoseService::new(Arc::new(ConflictRepository)));

    let response = crate::prognose::router::submit_handler::<ConflictRepository>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("prognosis already exists")
    );
}

#[tokio::test]
async fn submit_handler_rejects_unknown_profiles() {
    let (service, _repository) = build_service();
    let mut invalid = submission();
    invalid.profile_id = "sport".to_string();

    let response = crate::prognose::router::submit_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::Json(invalid),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(PrognoseService::new(Arc::new(UnavailableRepository)));

    let response = crate::prognose::router::submit_handler::<UnavailableRepository>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn submit_route_accepts_payloads() {
    let (service, _repository) = build_service();
    let router = prognose_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/prognose")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("prognose_id").is_some());
    assert_eq!(
        payload
            .pointer("/result/total_points")
            .and_then(Value::as_i64),
        Some(666)
    );
    assert_eq!(
        payload
            .pointer("/exam_validation/valid")
            .and_then(Value::as_bool),
        Some(true)
    );
    // Wire spelling of the domain tokens.
    assert_eq!(
        payload
            .pointer("/submission/core_subjects/coreEA1")
            .and_then(Value::as_str),
        Some("Mathematik")
    );
    assert_eq!(
        payload
            .pointer("/submission/exam_subjects/0/level")
            .and_then(Value::as_str),
        Some("eA")
    );
    assert_eq!(
        payload
            .pointer("/submission/exam_subjects/0/exam_type")
            .and_then(Value::as_str),
        Some("schriftlich")
    );
}

#[tokio::test]
async fn fetch_route_returns_stored_prognoses() {
    let (service, _repository) = build_service();
    let record = service.submit(submission()).expect("submission succeeds");
    let router = prognose_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get(format!("/api/v1/prognose/{}", record.prognose_id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("prognose_id").and_then(Value::as_str),
        Some(record.prognose_id.0.as_str())
    );
}

#[tokio::test]
async fn fetch_handler_returns_not_found_for_unknown_ids() {
    let (service, _repository) = build_service();

    let response = crate::prognose::router::fetch_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::extract::Path("prognose-424242".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("prognosis 'prognose-424242' not found")
    );
}

#[tokio::test]
async fn list_route_returns_condensed_overviews() {
    let (service, _repository) = build_service();
    service.submit(submission()).expect("first submission");
    service.submit(submission()).expect("second submission");
    let router = prognose_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/prognose")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let overviews = payload.as_array().expect("array payload");
    assert_eq!(overviews.len(), 2);
    for overview in overviews {
        assert!(overview.get("prognose_id").is_some());
        assert_eq!(
            overview.get("total_points").and_then(Value::as_i64),
            Some(666)
        );
        assert_eq!(overview.get("passed").and_then(Value::as_bool), Some(true));
        assert!(overview.get("block_one").is_none());
    }
}

#[tokio::test]
async fn validate_route_reports_invalid_selections_with_ok_status() {
    let (service, _repository) = build_service();
    let router = prognose_router_with_service(service);

    let mut exams = humanities_exams();
    exams.truncate(2);
    let request = ValidateExamsRequest {
        profile_id: "humanities".to_string(),
        core_subjects: core_subjects(),
        exam_subjects: exams,
    };

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/exam-subjects/validate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&request).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("valid").and_then(Value::as_bool), Some(false));
    assert_eq!(
        payload.pointer("/errors/0").and_then(Value::as_str),
        Some("Es müssen genau 4 Prüfungsfächer gewählt werden.")
    );
}

#[tokio::test]
async fn validate_route_rejects_unknown_profiles() {
    let (service, _repository) = build_service();
    let router = prognose_router_with_service(service);

    let request = ValidateExamsRequest {
        profile_id: "sport".to_string(),
        core_subjects: core_subjects(),
        exam_subjects: humanities_exams(),
    };

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/exam-subjects/validate")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&request).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("unknown profile 'sport'")
    );
}

#[tokio::test]
async fn coverage_route_reports_fulfillment() {
    let (service, _repository) = build_service();
    let router = prognose_router_with_service(service);

    let request = CoverageCheckRequest {
        profile_id: "humanities".to_string(),
        core_subjects: core_subjects(),
        additional_subjects: additional_subjects(),
    };

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/coverage/check")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&request).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("fulfilled").and_then(Value::as_bool), Some(true));
    assert_eq!(
        payload.get("summary").and_then(Value::as_str),
        Some("Alle Belegverpflichtungen pro Semester erfüllt")
    );
}

#[tokio::test]
async fn coverage_route_defaults_to_an_empty_wahlbereich() {
    let (service, _repository) = build_service();
    let router = prognose_router_with_service(service);

    let body = serde_json::json!({
        "profile_id": "humanities",
        "core_subjects": serde_json::to_value(core_subjects()).unwrap(),
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/coverage/check")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("fulfilled").and_then(Value::as_bool),
        Some(false)
    );
}

#[tokio::test]
async fn list_handler_maps_repository_failures_to_internal_errors() {
    let service = Arc::new(PrognoseService::new(Arc::new(UnavailableRepository)));

    let response =
        crate::prognose::router::list_handler::<UnavailableRepository>(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
