use std::sync::Arc;

use super::common::*;

use crate::prognose::domain::PrognoseId;
use crate::prognose::repository::RepositoryError;
use crate::prognose::service::{PrognoseService, PrognoseServiceError};

#[test]
fn submit_computes_and_stores_a_record() {
    let (service, repository) = build_service();

    let record = service.submit(submission()).expect("submission succeeds");

    assert!(record.prognose_id.0.starts_with("prognose-"));
    assert!(record.exam_validation.valid);
    assert_eq!(record.result.total_points, 666);
    assert_eq!(record.result.final_grade, Some(1.9));

    let stored = repository.records.lock().expect("repository mutex poisoned");
    assert!(stored.contains_key(&record.prognose_id));
}

#[test]
fn submitted_records_get_distinct_ids() {
    let (service, _repository) = build_service();

    let first = service.submit(submission()).expect("first submission");
    let second = service.submit(submission()).expect("second submission");

    assert_ne!(first.prognose_id, second.prognose_id);
}

#[test]
fn get_returns_the_stored_record() {
    let (service, _repository) = build_service();
    let record = service.submit(submission()).expect("submission succeeds");

    let fetched = service.get(&record.prognose_id).expect("record exists");

    assert_eq!(fetched.prognose_id, record.prognose_id);
    assert_eq!(fetched.result.total_points, record.result.total_points);
    assert_eq!(fetched.computed_at, record.computed_at);
}

#[test]
fn get_unknown_id_is_not_found() {
    let (service, _repository) = build_service();

    match service.get(&PrognoseId("prognose-999999".to_string())) {
        Err(PrognoseServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn recent_limits_and_orders_newest_first() {
    let (service, _repository) = build_service();
    for _ in 0..3 {
        service.submit(submission()).expect("submission succeeds");
    }

    let recent = service.recent(2).expect("listing succeeds");

    assert_eq!(recent.len(), 2);
    assert!(recent[0].computed_at >= recent[1].computed_at);
}

#[test]
fn unknown_profile_is_rejected() {
    let (service, _repository) = build_service();
    let mut invalid = submission();
    invalid.profile_id = "sport".to_string();

    match service.submit(invalid) {
        Err(PrognoseServiceError::UnknownProfile(profile_id)) => {
            assert_eq!(profile_id, "sport");
        }
        other => panic!("expected unknown profile, got {other:?}"),
    }
}

#[test]
fn validation_errors_are_stored_with_the_record() {
    let (service, _repository) = build_service();
    let mut flawed = submission();
    flawed.exam_subjects.truncate(2);

    let record = service.submit(flawed).expect("submission still stored");

    assert!(!record.exam_validation.valid);
    assert_eq!(
        record.exam_validation.errors,
        vec!["Es müssen genau 4 Prüfungsfächer gewählt werden.".to_string()]
    );
}

#[test]
fn validate_exams_answers_without_storing() {
    let (service, repository) = build_service();

    let validation = service
        .validate_exams("humanities", &humanities_exams(), &core_subjects())
        .expect("known profile");
    assert!(validation.valid);

    match service.validate_exams("sport", &humanities_exams(), &core_subjects()) {
        Err(PrognoseServiceError::UnknownProfile(profile_id)) => {
            assert_eq!(profile_id, "sport");
        }
        other => panic!("expected unknown profile, got {other:?}"),
    }

    let stored = repository.records.lock().expect("repository mutex poisoned");
    assert!(stored.is_empty());
}

#[test]
fn check_coverage_reports_for_the_profile() {
    let (service, _repository) = build_service();

    let report = service
        .check_coverage("humanities", &core_subjects(), &additional_subjects())
        .expect("known profile");
    assert!(report.fulfilled);

    let sparse = service
        .check_coverage("humanities", &core_subjects(), &[])
        .expect("known profile");
    assert!(!sparse.fulfilled);
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = PrognoseService::new(Arc::new(UnavailableRepository));

    match service.submit(submission()) {
        Err(PrognoseServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }

    let conflicting = PrognoseService::new(Arc::new(ConflictRepository));
    match conflicting.submit(submission()) {
        Err(PrognoseServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}
