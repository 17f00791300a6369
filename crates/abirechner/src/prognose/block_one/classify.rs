use serde::{Deserialize, Serialize};

use crate::catalog::{is_artistic_requirement, is_music_practical, Profile};

use super::super::domain::{CoreSubjects, ExamSubject, ExamType, GradePool, Semester};

/// One (subject, semester) mark annotated with its Block I role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedGrade {
    pub subject: String,
    pub semester: Semester,
    pub points: u8,
    pub is_prediction: bool,
    pub is_mandatory: bool,
    pub is_double: bool,
    pub is_music_practical: bool,
    pub display_name: String,
}

/// Whether every semester of a subject must be brought into Block I: exam
/// subjects, Kernfächer, and the chosen artistic subject are mandatory.
pub fn is_mandatory_grade(
    subject: &str,
    exam_subjects: &[ExamSubject],
    cores: &CoreSubjects,
    mandatory_artistic: Option<&str>,
) -> bool {
    if exam_subjects.iter().any(|exam| exam.name == subject) {
        return true;
    }
    if cores.contains(subject) {
        return true;
    }
    mandatory_artistic == Some(subject)
}

/// Whether a subject's semester marks count twice: profile-defining exam
/// subjects and eA-Kernfächer with a written exam do.
pub fn is_double_weighted(
    subject: &str,
    exam_subjects: &[ExamSubject],
    cores: &CoreSubjects,
    profile: &Profile,
) -> bool {
    let is_profilgebend = profile
        .profilgebend
        .iter()
        .any(|profile_subject| profile_subject.name == subject);
    let is_exam = exam_subjects.iter().any(|exam| exam.name == subject);
    if is_profilgebend && is_exam {
        return true;
    }

    let has_written_exam = exam_subjects
        .iter()
        .any(|exam| exam.name == subject && exam.exam_type == ExamType::Schriftlich);
    cores.is_ea(subject) && has_written_exam
}

/// Flattens the grade pool into classified entries, skipping semesters
/// without a recorded point value. Subjects iterate in name order and
/// semesters in S1..S4 order, so the output is deterministic.
pub fn prepare_grades(
    grades: &GradePool,
    exam_subjects: &[ExamSubject],
    cores: &CoreSubjects,
    profile: &Profile,
    mandatory_artistic: Option<&str>,
) -> Vec<ClassifiedGrade> {
    let mut all_grades = Vec::new();

    for (subject, marks) in grades.iter() {
        let is_double = is_double_weighted(subject, exam_subjects, cores, profile);
        let practical = is_music_practical(subject);
        let mandatory = is_mandatory_grade(subject, exam_subjects, cores, mandatory_artistic);

        for semester in Semester::ALL {
            let Some(mark) = marks.get(&semester) else {
                continue;
            };
            let Some(points) = mark.points else {
                continue;
            };

            all_grades.push(ClassifiedGrade {
                subject: subject.to_string(),
                semester,
                points,
                is_prediction: mark.is_prediction,
                is_mandatory: mandatory,
                is_double,
                is_music_practical: practical,
                display_name: format!("{subject} {}", semester.label()),
            });
        }
    }

    all_grades
}

/// The artistic subject chosen to satisfy the four-semester requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtisticCandidate {
    pub subject: String,
    pub average: f64,
    pub semesters_with_data: usize,
}

/// Picks the artistic subject with the best point average among those that
/// have any recorded marks. Ties resolve to the alphabetically first name.
pub fn find_best_artistic_subject(grades: &GradePool) -> Option<ArtisticCandidate> {
    let mut candidates: Vec<ArtisticCandidate> = Vec::new();

    for (subject, marks) in grades.iter() {
        if !is_artistic_requirement(subject) {
            continue;
        }

        let points: Vec<f64> = Semester::ALL
            .iter()
            .filter_map(|semester| marks.get(semester))
            .filter_map(|mark| mark.points)
            .map(f64::from)
            .collect();
        if points.is_empty() {
            continue;
        }

        let average = points.iter().sum::<f64>() / points.len() as f64;
        candidates.push(ArtisticCandidate {
            subject: subject.to_string(),
            average,
            semesters_with_data: points.len(),
        });
    }

    candidates.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.subject.cmp(&b.subject))
    });
    candidates.into_iter().next()
}
