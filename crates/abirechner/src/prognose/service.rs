use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::catalog::{Profile, ProfileCatalog};

use super::coverage::{check_subject_coverage, CoverageReport};
use super::domain::{
    AdditionalSubject, CoreSubjects, ExamSubject, PrognoseId, PrognoseSubmission,
};
use super::exams::{validate_exam_subjects, ExamValidation};
use super::qualification::calculate_abitur_prognose;
use super::repository::{PrognoseRecord, PrognoseRepository, RepositoryError};

/// Service composing the profile catalog, the prognosis engine, and storage.
pub struct PrognoseService<R> {
    catalog: ProfileCatalog,
    repository: Arc<R>,
}

static PROGNOSE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_prognose_id() -> PrognoseId {
    let id = PROGNOSE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PrognoseId(format!("prognose-{id:06}"))
}

impl<R> PrognoseService<R>
where
    R: PrognoseRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            catalog: ProfileCatalog::standard(),
            repository,
        }
    }

    /// Compute a prognosis for a submission and store the outcome.
    pub fn submit(
        &self,
        submission: PrognoseSubmission,
    ) -> Result<PrognoseRecord, PrognoseServiceError> {
        let profile = self.profile(&submission.profile_id)?;

        let exam_validation = validate_exam_subjects(
            &submission.exam_subjects,
            profile,
            &submission.core_subjects,
        );
        let result = calculate_abitur_prognose(
            &submission.grades,
            &submission.exam_subjects,
            &submission.exam_results,
            &submission.core_subjects,
            profile,
        );

        info!(
            profile_id = %submission.profile_id,
            total_points = result.total_points,
            passed = result.passed,
            "abitur prognosis computed"
        );

        let record = PrognoseRecord {
            prognose_id: next_prognose_id(),
            submission,
            exam_validation,
            result,
            computed_at: chrono::Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored prognosis for API responses.
    pub fn get(&self, prognose_id: &PrognoseId) -> Result<PrognoseRecord, PrognoseServiceError> {
        let record = self
            .repository
            .fetch(prognose_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently computed prognoses, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<PrognoseRecord>, PrognoseServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    /// Check a candidate exam selection without storing anything.
    pub fn validate_exams(
        &self,
        profile_id: &str,
        exam_subjects: &[ExamSubject],
        cores: &CoreSubjects,
    ) -> Result<ExamValidation, PrognoseServiceError> {
        let profile = self.profile(profile_id)?;
        Ok(validate_exam_subjects(exam_subjects, profile, cores))
    }

    /// Check the profile's Belegverpflichtungen for a subject selection.
    pub fn check_coverage(
        &self,
        profile_id: &str,
        cores: &CoreSubjects,
        additional: &[AdditionalSubject],
    ) -> Result<CoverageReport, PrognoseServiceError> {
        let profile = self.profile(profile_id)?;
        Ok(check_subject_coverage(profile, cores, additional))
    }

    fn profile(&self, profile_id: &str) -> Result<&Profile, PrognoseServiceError> {
        self.catalog
            .by_id(profile_id)
            .ok_or_else(|| PrognoseServiceError::UnknownProfile(profile_id.to_string()))
    }
}

/// Error raised by the prognosis service.
#[derive(Debug, thiserror::Error)]
pub enum PrognoseServiceError {
    #[error("unknown profile '{0}'")]
    UnknownProfile(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
