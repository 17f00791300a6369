use crate::infra::AppState;
use abirechner::catalog::{
    core_subject_options, Profile, ProfileCatalog, ProfileSubject, Requirement,
};
use abirechner::prognose::{
    exam_variants, prognose_router, ExamVariant, PrognoseRepository, PrognoseService,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Catalog payload for the profile picker: one entry per Oberstufe profile
/// with its subjects, obligations, and permitted exam variants.
#[derive(Debug, Serialize)]
pub(crate) struct ProfileView {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) profilgebend: Vec<String>,
    pub(crate) profilbegleitend: Vec<String>,
    pub(crate) seminar: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) kernfach_besonderheit: Option<&'static str>,
    pub(crate) belegverpflichtungen: Vec<String>,
    pub(crate) core_subject_options: Vec<&'static str>,
    pub(crate) exam_variants: Vec<ExamVariant>,
}

pub(crate) fn with_prognose_routes<R>(service: Arc<PrognoseService<R>>) -> axum::Router
where
    R: PrognoseRepository + 'static,
{
    prognose_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/profiles", axum::routing::get(profiles_endpoint))
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

pub(crate) async fn profiles_endpoint() -> Json<Vec<ProfileView>> {
    let catalog = ProfileCatalog::standard();
    let views = catalog.profiles().iter().map(profile_view).collect();
    Json(views)
}

fn profile_view(profile: &Profile) -> ProfileView {
    ProfileView {
        id: profile.id,
        name: profile.name,
        description: profile.description,
        profilgebend: profile.profilgebend.iter().map(subject_label).collect(),
        profilbegleitend: profile.profilbegleitend.iter().map(subject_label).collect(),
        seminar: profile.seminar,
        kernfach_besonderheit: profile.kernfach_besonderheit,
        belegverpflichtungen: profile
            .belegverpflichtungen
            .iter()
            .map(Requirement::label)
            .collect(),
        core_subject_options: core_subject_options(profile.id),
        exam_variants: exam_variants(profile.id),
    }
}

fn subject_label(subject: &ProfileSubject) -> String {
    match subject.note {
        Some(note) => format!(
            "{} ({} Std., {}, {note})",
            subject.name,
            subject.hours,
            subject.level.label()
        ),
        None => format!(
            "{} ({} Std., {})",
            subject.name,
            subject.hours,
            subject.level.label()
        ),
    }
}
