//! Block I: selection and scoring of semester grades.

pub(crate) mod classify;
pub(crate) mod optimizer;

use serde::{Deserialize, Serialize};

use crate::catalog::Profile;

use super::domain::{CoreSubjects, ExamSubject, GradePool};
use classify::find_best_artistic_subject;
use optimizer::{optimize, OptimizedSelection};

pub use classify::ClassifiedGrade;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockOneResult {
    pub total_e: u16,
    pub total_p: u16,
    pub total_s: u16,
    pub grade_count: usize,
    pub selected_grades: Vec<ClassifiedGrade>,
    pub not_selected_grades: Vec<ClassifiedGrade>,
    pub grades_under_5: usize,
    pub percent_under_5: u8,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Computes the Block I score: picks the artistic subject, classifies every
/// recorded semester mark, runs the greedy selection, and attaches the
/// threshold diagnostics from the Wegweiser.
pub fn calculate_optimal_block_one(
    grades: &GradePool,
    exam_subjects: &[ExamSubject],
    cores: &CoreSubjects,
    profile: &Profile,
) -> BlockOneResult {
    let best_artistic = find_best_artistic_subject(grades);
    let mandatory_artistic = best_artistic
        .as_ref()
        .map(|candidate| candidate.subject.as_str());

    let all_grades = classify::prepare_grades(
        grades,
        exam_subjects,
        cores,
        profile,
        mandatory_artistic,
    );
    let OptimizedSelection {
        final_selection,
        best_e,
    } = optimize(&all_grades);

    let mut point_sum: u32 = 0;
    let mut divisor: u32 = 0;
    for grade in &final_selection {
        let weight = if grade.is_double { 2 } else { 1 };
        point_sum += u32::from(grade.points) * weight;
        divisor += weight;
    }

    let grades_under_5 = final_selection
        .iter()
        .filter(|grade| grade.points < 5)
        .count();
    // The 20% threshold compares the exact ratio; only the reported figure
    // is rounded.
    let percent_under_5 = if final_selection.is_empty() {
        0.0
    } else {
        grades_under_5 as f64 / final_selection.len() as f64 * 100.0
    };
    let percent_rounded = percent_under_5.round() as u8;

    let total_e = best_e.round() as u16;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if total_e < 200 {
        errors.push("Block I: Weniger als 200 Punkte (nicht bestanden)".to_string());
    }
    if percent_under_5 > 20.0 {
        errors.push(format!(
            "Block I: Mehr als 20% der Noten unter 5 Punkten ({percent_rounded}%)"
        ));
    }
    if final_selection.iter().any(|grade| grade.points == 0) {
        errors.push("Block I: Noten mit 0 Punkten können nicht eingebracht werden".to_string());
    }
    if (200..250).contains(&total_e) {
        warnings.push(
            "Block I: Knapp über der Mindestpunktzahl. Verbesserung empfohlen.".to_string(),
        );
    }
    match &best_artistic {
        None => errors.push(
            "Block I: Es müssen 4 Semesternoten in Bildende Kunst, Musik oder Theater eingebracht werden."
                .to_string(),
        ),
        Some(candidate) if candidate.semesters_with_data < 4 => {
            errors.push(format!(
                "Block I: {} muss in allen 4 Semestern eingebracht werden.",
                candidate.subject
            ));
        }
        Some(_) => {}
    }

    let not_selected_grades: Vec<ClassifiedGrade> = all_grades
        .iter()
        .filter(|grade| {
            !final_selection
                .iter()
                .any(|chosen| chosen.subject == grade.subject && chosen.semester == grade.semester)
        })
        .cloned()
        .collect();

    BlockOneResult {
        total_e,
        total_p: point_sum as u16,
        total_s: divisor as u16,
        grade_count: final_selection.len(),
        selected_grades: final_selection,
        not_selected_grades,
        grades_under_5,
        percent_under_5: percent_rounded,
        errors,
        warnings,
    }
}
