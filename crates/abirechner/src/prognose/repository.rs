use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{PrognoseId, PrognoseSubmission};
use super::exams::ExamValidation;
use super::qualification::QualificationResult;

/// Repository record holding a submission together with its computed
/// prognosis and exam selection check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrognoseRecord {
    pub prognose_id: PrognoseId,
    pub submission: PrognoseSubmission,
    pub exam_validation: ExamValidation,
    pub result: QualificationResult,
    pub computed_at: DateTime<Utc>,
}

impl PrognoseRecord {
    pub fn overview(&self) -> PrognoseOverview {
        PrognoseOverview {
            prognose_id: self.prognose_id.clone(),
            profile_id: self.submission.profile_id.clone(),
            total_points: self.result.total_points,
            final_grade: self.result.final_grade,
            passed: self.result.passed,
            exam_selection_valid: self.exam_validation.valid,
            computed_at: self.computed_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait PrognoseRepository: Send + Sync {
    fn insert(&self, record: PrognoseRecord) -> Result<PrognoseRecord, RepositoryError>;
    fn fetch(&self, id: &PrognoseId) -> Result<Option<PrognoseRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<PrognoseRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Condensed representation of a stored prognosis for listings.
#[derive(Debug, Clone, Serialize)]
pub struct PrognoseOverview {
    pub prognose_id: PrognoseId,
    pub profile_id: String,
    pub total_points: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_grade: Option<f32>,
    pub passed: bool,
    pub exam_selection_valid: bool,
    pub computed_at: DateTime<Utc>,
}
