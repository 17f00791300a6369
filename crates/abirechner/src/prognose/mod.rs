//! Abitur prognosis workflow: exam selection validation, Belegverpflichtungen
//! coverage, Block I/II scoring, and the HTTP surface for submitting and
//! retrieving prognoses.

pub(crate) mod block_one;
pub(crate) mod block_two;
pub(crate) mod coverage;
pub mod domain;
pub(crate) mod exams;
pub(crate) mod qualification;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use block_one::{calculate_optimal_block_one, BlockOneResult, ClassifiedGrade};
pub use block_two::{calculate_block_two, BlockTwoResult, ExamDetail};
pub use coverage::{check_subject_coverage, CoverageReport, RequirementStatus, SemesterCoverage};
pub use domain::{
    AdditionalSubject, CoreSubjects, ExamResult, ExamResultPool, ExamSubject, ExamType, GradePool,
    Level, OralFormat, PrognoseId, PrognoseSubmission, Semester, SemesterGrade,
};
pub use exams::{exam_variants, validate_exam_subjects, ExamValidation, ExamVariant};
pub use qualification::{calculate_abitur_prognose, combine_blocks, QualificationResult};
pub use repository::{PrognoseOverview, PrognoseRecord, PrognoseRepository, RepositoryError};
pub use roster::SubjectRoster;
pub use router::{prognose_router, CoverageCheckRequest, ValidateExamsRequest};
pub use service::{PrognoseService, PrognoseServiceError};
