use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{AdditionalSubject, CoreSubjects, ExamSubject, PrognoseId, PrognoseSubmission};
use super::repository::{PrognoseRepository, RepositoryError};
use super::service::{PrognoseService, PrognoseServiceError};

/// Router builder exposing the prognosis HTTP endpoints.
pub fn prognose_router<R>(service: Arc<PrognoseService<R>>) -> Router
where
    R: PrognoseRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/prognose",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/prognose/:prognose_id", get(fetch_handler::<R>))
        .route(
            "/api/v1/exam-subjects/validate",
            post(validate_exams_handler::<R>),
        )
        .route("/api/v1/coverage/check", post(coverage_handler::<R>))
        .with_state(service)
}

/// Request body for the stateless exam selection check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateExamsRequest {
    pub profile_id: String,
    pub core_subjects: CoreSubjects,
    pub exam_subjects: Vec<ExamSubject>,
}

/// Request body for the Belegverpflichtungen check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageCheckRequest {
    pub profile_id: String,
    pub core_subjects: CoreSubjects,
    #[serde(default)]
    pub additional_subjects: Vec<AdditionalSubject>,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<PrognoseService<R>>>,
    axum::Json(submission): axum::Json<PrognoseSubmission>,
) -> Response
where
    R: PrognoseRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(PrognoseServiceError::UnknownProfile(profile_id)) => {
            let payload = json!({
                "error": format!("unknown profile '{profile_id}'"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(PrognoseServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "prognosis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<PrognoseService<R>>>,
    Path(prognose_id): Path<String>,
) -> Response
where
    R: PrognoseRepository + 'static,
{
    let id = PrognoseId(prognose_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(PrognoseServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("prognosis '{}' not found", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<PrognoseService<R>>>,
) -> Response
where
    R: PrognoseRepository + 'static,
{
    match service.recent(50) {
        Ok(records) => {
            let overviews: Vec<_> = records.iter().map(|record| record.overview()).collect();
            (StatusCode::OK, axum::Json(overviews)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_exams_handler<R>(
    State(service): State<Arc<PrognoseService<R>>>,
    axum::Json(request): axum::Json<ValidateExamsRequest>,
) -> Response
where
    R: PrognoseRepository + 'static,
{
    match service.validate_exams(
        &request.profile_id,
        &request.exam_subjects,
        &request.core_subjects,
    ) {
        Ok(validation) => (StatusCode::OK, axum::Json(validation)).into_response(),
        Err(PrognoseServiceError::UnknownProfile(profile_id)) => {
            let payload = json!({
                "error": format!("unknown profile '{profile_id}'"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn coverage_handler<R>(
    State(service): State<Arc<PrognoseService<R>>>,
    axum::Json(request): axum::Json<CoverageCheckRequest>,
) -> Response
where
    R: PrognoseRepository + 'static,
{
    match service.check_coverage(
        &request.profile_id,
        &request.core_subjects,
        &request.additional_subjects,
    ) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(PrognoseServiceError::UnknownProfile(profile_id)) => {
            let payload = json!({
                "error": format!("unknown profile '{profile_id}'"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
