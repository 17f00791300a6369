use serde::{Deserialize, Serialize};

use super::domain::{ExamResultPool, ExamSubject, ExamType, OralFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDetail {
    pub subject: String,
    pub exam_type: ExamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OralFormat>,
    pub points: u8,
    pub weighted_points: u16,
    pub is_prediction: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTwoResult {
    pub total_e: u16,
    pub exam_details: Vec<ExamDetail>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Computes the Block II score. Each of the four exams counts five-fold;
/// exams without a recorded result enter as a zero-point prediction.
pub fn calculate_block_two(
    exam_subjects: &[ExamSubject],
    exam_results: &ExamResultPool,
) -> BlockTwoResult {
    let mut total_e: u16 = 0;
    let mut exam_details = Vec::with_capacity(exam_subjects.len());

    for exam in exam_subjects {
        let (points, is_prediction) = match exam_results.get(&exam.name) {
            Some(result) => (result.points, result.is_prediction),
            None => (0, true),
        };
        let weighted_points = u16::from(points) * 5;
        total_e += weighted_points;

        exam_details.push(ExamDetail {
            subject: exam.name.clone(),
            exam_type: exam.exam_type,
            format: exam.format,
            points,
            weighted_points,
            is_prediction,
        });
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if total_e < 100 {
        errors.push("Block II: Weniger als 100 Punkte (nicht bestanden)".to_string());
    }
    let exams_with_min_5 = exam_details.iter().filter(|exam| exam.points >= 5).count();
    if exams_with_min_5 < 2 {
        errors.push(
            "Block II: Mindestens zwei Prüfungen müssen mind. 5 Punkte erreichen".to_string(),
        );
    }
    if exam_details.iter().any(|exam| exam.points == 0) {
        errors.push("Block II: Eine Prüfung mit 0 Punkten = Abitur nicht bestanden".to_string());
    }
    if (100..125).contains(&total_e) {
        warnings.push(
            "Block II: Knapp über der Mindestpunktzahl. Mehr Vorbereitung empfohlen.".to_string(),
        );
    }

    BlockTwoResult {
        total_e,
        exam_details,
        errors,
        warnings,
    }
}
