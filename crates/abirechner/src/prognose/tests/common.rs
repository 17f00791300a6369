use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{Level, Profile, ProfileCatalog};
use crate::prognose::domain::{
    AdditionalSubject, CoreSubjects, ExamResult, ExamResultPool, ExamSubject, ExamType, GradePool,
    OralFormat, PrognoseId, PrognoseSubmission, Semester, SemesterGrade,
};
use crate::prognose::repository::{PrognoseRecord, PrognoseRepository, RepositoryError};
use crate::prognose::router::prognose_router;
use crate::prognose::service::PrognoseService;

pub(super) fn humanities_profile() -> Profile {
    ProfileCatalog::standard()
        .by_id("humanities")
        .expect("humanities profile")
        .clone()
}

pub(super) fn core_subjects() -> CoreSubjects {
    CoreSubjects {
        core_ea1: "Mathematik".to_string(),
        core_ea2: "Englisch".to_string(),
        core_ga: "Deutsch".to_string(),
    }
}

pub(super) fn written(position: u8, name: &str, level: Level) -> ExamSubject {
    ExamSubject {
        position,
        name: name.to_string(),
        exam_type: ExamType::Schriftlich,
        level,
        format: None,
    }
}

pub(super) fn oral(position: u8, name: &str, level: Level) -> ExamSubject {
    ExamSubject {
        position,
        name: name.to_string(),
        exam_type: ExamType::Muendlich,
        level,
        format: Some(OralFormat::Klassisch),
    }
}

/// Exam selection that satisfies every structural rule for the humanities
/// profile with the fixture core subjects.
pub(super) fn humanities_exams() -> Vec<ExamSubject> {
    vec![
        written(1, "Geschichte", Level::EA),
        written(2, "Mathematik", Level::EA),
        written(3, "Deutsch", Level::GA),
        oral(4, "PGW", Level::GA),
    ]
}

pub(super) fn mark(points: u8) -> SemesterGrade {
    SemesterGrade {
        points: Some(points),
        is_prediction: false,
        is_manual: false,
    }
}

pub(super) fn insert_year(pool: &mut GradePool, subject: &str, points: [u8; 4]) {
    for (semester, value) in Semester::ALL.into_iter().zip(points) {
        pool.insert(subject, semester, mark(value));
    }
}

/// A full humanities grade pool: 13 subjects over 4 semesters. The expected
/// optimizer trace for this pool is 24 mandatory grades, 8 filler grades,
/// and 3 Orchester grades admitted before the practical cap and the first
/// non-improving candidate stop the extension.
pub(super) fn full_grade_pool() -> GradePool {
    let mut pool = GradePool::new();
    insert_year(&mut pool, "Mathematik", [11, 12, 11, 13]);
    insert_year(&mut pool, "Englisch", [10, 11, 12, 11]);
    insert_year(&mut pool, "Deutsch", [9, 10, 9, 11]);
    insert_year(&mut pool, "Geschichte", [12, 13, 12, 14]);
    insert_year(&mut pool, "PGW", [10, 11, 10, 12]);
    insert_year(&mut pool, "Theater (englisch bilingual)", [12, 11, 13, 12]);
    insert_year(&mut pool, "Philosophie", [8, 9, 8, 10]);
    insert_year(&mut pool, "Biologie", [7, 8, 9, 8]);
    insert_year(&mut pool, "Sport", [13, 14, 13, 14]);
    insert_year(&mut pool, "Geographie", [9, 8, 9, 7]);
    insert_year(&mut pool, "Informatik", [6, 7, 6, 8]);
    insert_year(&mut pool, "Physik", [5, 6, 5, 7]);
    insert_year(&mut pool, "Orchester", [14, 15, 14, 15]);
    pool
}

pub(super) fn exam_results(points: [u8; 4]) -> ExamResultPool {
    let mut results = ExamResultPool::new();
    for (exam, value) in humanities_exams().into_iter().zip(points) {
        results.insert(
            exam.name,
            ExamResult {
                points: value,
                is_prediction: false,
            },
        );
    }
    results
}

pub(super) fn additional_subjects() -> Vec<AdditionalSubject> {
    ["Philosophie", "Biologie", "Sport"]
        .into_iter()
        .map(|name| AdditionalSubject {
            name: name.to_string(),
            level: Level::GA,
        })
        .collect()
}

/// A complete valid submission: the humanities exam selection, the full
/// grade pool, and exam results totaling 200 Block II points.
pub(super) fn submission() -> PrognoseSubmission {
    PrognoseSubmission {
        profile_id: "humanities".to_string(),
        core_subjects: core_subjects(),
        exam_subjects: humanities_exams(),
        additional_subjects: additional_subjects(),
        grades: full_grade_pool(),
        exam_results: exam_results([10, 11, 9, 10]),
    }
}

pub(super) fn build_service() -> (PrognoseService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = PrognoseService::new(repository.clone());
    (service, repository)
}

pub(super) fn prognose_router_with_service(
    service: PrognoseService<MemoryRepository>,
) -> axum::Router {
    prognose_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<PrognoseId, PrognoseRecord>>>,
}

impl PrognoseRepository for MemoryRepository {
    fn insert(&self, record: PrognoseRecord) -> Result<PrognoseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.prognose_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.prognose_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PrognoseId) -> Result<Option<PrognoseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<PrognoseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<PrognoseRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.computed_at.cmp(&a.computed_at));
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl PrognoseRepository for ConflictRepository {
    fn insert(&self, _record: PrognoseRecord) -> Result<PrognoseRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &PrognoseId) -> Result<Option<PrognoseRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<PrognoseRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl PrognoseRepository for UnavailableRepository {
    fn insert(&self, _record: PrognoseRecord) -> Result<PrognoseRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &PrognoseId) -> Result<Option<PrognoseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<PrognoseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
