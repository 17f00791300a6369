use std::collections::BTreeSet;

use crate::catalog::{elective_subjects, Profile};

use super::domain::{AdditionalSubject, CoreSubjects};

/// Canonical view of every subject a student carries, assembled once from
/// profile, Kernfach, and Wahlbereich choices.
#[derive(Debug, Clone)]
pub struct SubjectRoster {
    allocated: BTreeSet<String>,
    exam_eligible: BTreeSet<String>,
    additional_count: usize,
}

impl SubjectRoster {
    pub fn build(
        profile: &Profile,
        cores: &CoreSubjects,
        additional: &[AdditionalSubject],
    ) -> Self {
        let mut allocated = BTreeSet::new();
        let mut exam_eligible = BTreeSet::new();

        for name in profile.subject_names() {
            allocated.insert(name.to_string());
            exam_eligible.insert(name.to_string());
        }
        for name in cores.names() {
            allocated.insert(name.to_string());
            exam_eligible.insert(name.to_string());
        }

        let mut additional_count = 0;
        for subject in additional {
            if allocated.insert(subject.name.clone()) {
                additional_count += 1;
            }
        }

        Self {
            allocated,
            exam_eligible,
            additional_count,
        }
    }

    /// Whether the student carries this subject at all.
    pub fn contains(&self, subject: &str) -> bool {
        self.allocated.contains(subject)
    }

    /// Whether this subject may be chosen as an exam subject. Only profile
    /// and core subjects qualify.
    pub fn is_exam_candidate(&self, subject: &str) -> bool {
        self.exam_eligible.contains(subject)
    }

    /// Number of Wahlbereich subjects beyond profile and core allocations.
    pub fn additional_count(&self) -> usize {
        self.additional_count
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.allocated.iter().map(String::as_str)
    }

    /// Elective subjects still open to the student, in catalog order.
    pub fn elective_options(&self) -> Vec<&'static str> {
        elective_subjects()
            .into_iter()
            .filter(|subject| !self.allocated.contains(*subject))
            .collect()
    }
}
