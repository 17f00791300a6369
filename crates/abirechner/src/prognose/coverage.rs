use serde::{Deserialize, Serialize};

use crate::catalog::{Profile, Requirement};

use super::domain::{AdditionalSubject, CoreSubjects};
use super::roster::SubjectRoster;

/// Status of one Belegverpflichtung within a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStatus {
    pub label: String,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterCoverage {
    pub label: String,
    pub requirements: Vec<RequirementStatus>,
    pub fulfilled: bool,
}

/// Per-semester breakdown of the profile's coverage obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub semesters: Vec<SemesterCoverage>,
    pub fulfilled: bool,
    pub summary: String,
}

/// Checks the profile's Belegverpflichtungen for each of the four semesters.
/// Subjects are carried across all semesters, so the roster is shared; the
/// report still breaks the result down per semester as the Wegweiser does.
pub fn check_subject_coverage(
    profile: &Profile,
    cores: &CoreSubjects,
    additional: &[AdditionalSubject],
) -> CoverageReport {
    let roster = SubjectRoster::build(profile, cores, additional);

    let semesters: Vec<SemesterCoverage> = (1..=4)
        .map(|n| {
            let requirements: Vec<RequirementStatus> = profile
                .belegverpflichtungen
                .iter()
                .map(|requirement| RequirementStatus {
                    label: requirement.label(),
                    met: requirement_met(requirement, &roster),
                })
                .collect();
            let fulfilled = requirements.iter().all(|status| status.met);
            SemesterCoverage {
                label: format!("Semester {n}"),
                requirements,
                fulfilled,
            }
        })
        .collect();

    let fulfilled = semesters.iter().all(|semester| semester.fulfilled);
    let summary = if fulfilled {
        "Alle Belegverpflichtungen pro Semester erfüllt".to_string()
    } else {
        let missing: Vec<&str> = semesters
            .iter()
            .filter(|semester| !semester.fulfilled)
            .map(|semester| semester.label.as_str())
            .collect();
        format!("Nicht erfüllt in: {}", missing.join(", "))
    };

    CoverageReport {
        semesters,
        fulfilled,
        summary,
    }
}

fn requirement_met(requirement: &Requirement, roster: &SubjectRoster) -> bool {
    match requirement {
        Requirement::Fixed { subject, .. } => roster.contains(subject),
        Requirement::OneOf { subjects, .. } => {
            subjects.iter().any(|subject| roster.contains(subject))
        }
        Requirement::AnyAdditional { .. } => roster.additional_count() > 0,
    }
}
