use serde::{Deserialize, Serialize};

use crate::catalog::{final_grade_for, Profile};

use super::block_one::{calculate_optimal_block_one, BlockOneResult};
use super::block_two::{calculate_block_two, BlockTwoResult};
use super::domain::{CoreSubjects, ExamResultPool, ExamSubject, GradePool};

/// Gesamtqualifikation: both blocks merged into the final prognosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub total_points: u16,
    pub max_possible: u16,
    /// `None` below the 300-point passing threshold, serialized as `null`.
    pub final_grade: Option<f32>,
    pub passed: bool,
    pub block_one: BlockOneResult,
    pub block_two: BlockTwoResult,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Merges the block results into the final qualification. Diagnostics from
/// both blocks are carried through; passing requires a clean error list and
/// at least 300 points.
pub fn combine_blocks(block_one: BlockOneResult, block_two: BlockTwoResult) -> QualificationResult {
    let total_points = block_one.total_e + block_two.total_e;
    let final_grade = final_grade_for(total_points);

    let errors: Vec<String> = block_one
        .errors
        .iter()
        .chain(block_two.errors.iter())
        .cloned()
        .collect();
    let warnings: Vec<String> = block_one
        .warnings
        .iter()
        .chain(block_two.warnings.iter())
        .cloned()
        .collect();

    let passed = errors.is_empty() && total_points >= 300;

    QualificationResult {
        total_points,
        max_possible: 900,
        final_grade,
        passed,
        block_one,
        block_two,
        errors,
        warnings,
    }
}

/// Runs the full prognosis for one student, from the grade pool and exam
/// selection down to the combined qualification.
pub fn calculate_abitur_prognose(
    grades: &GradePool,
    exam_subjects: &[ExamSubject],
    exam_results: &ExamResultPool,
    cores: &CoreSubjects,
    profile: &Profile,
) -> QualificationResult {
    let block_one = calculate_optimal_block_one(grades, exam_subjects, cores, profile);
    let block_two = calculate_block_two(exam_subjects, exam_results);
    combine_blocks(block_one, block_two)
}
