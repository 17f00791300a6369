use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{core_subject_options, Profile};

pub use crate::catalog::Level;

/// Written or oral examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    #[serde(rename = "schriftlich")]
    Schriftlich,
    #[serde(rename = "mündlich")]
    Muendlich,
}

impl ExamType {
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::Schriftlich => "schriftlich",
            ExamType::Muendlich => "mündlich",
        }
    }
}

/// Delivery format of the oral exam in position four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OralFormat {
    #[serde(rename = "klassisch")]
    Klassisch,
    #[serde(rename = "Präsentation")]
    Praesentation,
}

impl OralFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OralFormat::Klassisch => "klassisch",
            OralFormat::Praesentation => "Präsentation",
        }
    }
}

/// One of the four semesters of the Studienstufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    S1,
    S2,
    S3,
    S4,
}

impl Semester {
    pub const ALL: [Semester; 4] = [Semester::S1, Semester::S2, Semester::S3, Semester::S4];

    pub fn label(&self) -> &'static str {
        match self {
            Semester::S1 => "S1",
            Semester::S2 => "S2",
            Semester::S3 => "S3",
            Semester::S4 => "S4",
        }
    }
}

/// A single semester mark on the 0-15 point scale. `points` stays `None`
/// while the mark is still outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterGrade {
    #[serde(default)]
    pub points: Option<u8>,
    #[serde(default)]
    pub is_prediction: bool,
    #[serde(default)]
    pub is_manual: bool,
}

/// Semester marks keyed by subject name, then semester.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradePool(BTreeMap<String, BTreeMap<Semester, SemesterGrade>>);

impl GradePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: impl Into<String>, semester: Semester, grade: SemesterGrade) {
        self.0.entry(subject.into()).or_default().insert(semester, grade);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<Semester, SemesterGrade>)> {
        self.0.iter().map(|(subject, marks)| (subject.as_str(), marks))
    }

    pub fn get(&self, subject: &str, semester: Semester) -> Option<&SemesterGrade> {
        self.0.get(subject).and_then(|marks| marks.get(&semester))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of one Abitur exam on the 0-15 point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    pub points: u8,
    #[serde(default)]
    pub is_prediction: bool,
}

/// Exam results keyed by exam subject name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamResultPool(BTreeMap<String, ExamResult>);

impl ExamResultPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: impl Into<String>, result: ExamResult) {
        self.0.insert(subject.into(), result);
    }

    pub fn get(&self, subject: &str) -> Option<&ExamResult> {
        self.0.get(subject)
    }
}

/// The three Kernfächer: two on enhanced level, one on basic level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSubjects {
    #[serde(rename = "coreEA1")]
    pub core_ea1: String,
    #[serde(rename = "coreEA2")]
    pub core_ea2: String,
    #[serde(rename = "coreGA")]
    pub core_ga: String,
}

impl CoreSubjects {
    pub fn names(&self) -> [&str; 3] {
        [&self.core_ea1, &self.core_ea2, &self.core_ga]
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.names().contains(&subject)
    }

    pub fn is_ea(&self, subject: &str) -> bool {
        subject == self.core_ea1 || subject == self.core_ea2
    }

    /// Checks the Kernfach assignment against the catalog the profile
    /// permits. Findings come back as strings like the other validators.
    pub fn validate(&self, profile: &Profile) -> Vec<String> {
        let mut errors = Vec::new();

        let names = self.names();
        let distinct: BTreeSet<_> = names.iter().collect();
        if distinct.len() != names.len() {
            errors.push("Die drei Kernfächer müssen verschieden sein.".to_string());
        }

        let options = core_subject_options(profile.id);
        for name in [&self.core_ea1, &self.core_ea2] {
            if !options.contains(&name.as_str()) {
                errors.push(format!(
                    "{name} ist kein zulässiges Kernfach auf erhöhtem Niveau für dieses Profil."
                ));
            }
        }
        if !options.contains(&self.core_ga.as_str()) {
            errors.push(format!(
                "{} ist kein zulässiges Kernfach für dieses Profil.",
                self.core_ga
            ));
        }

        errors
    }
}

/// One of the four chosen exam subjects. Positions one and two are written
/// exams on enhanced level, position three is written, position four is oral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSubject {
    pub position: u8,
    pub name: String,
    pub exam_type: ExamType,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OralFormat>,
}

/// A subject carried in the Wahlbereich beyond profile and core allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSubject {
    pub name: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrognoseId(pub String);

impl std::fmt::Display for PrognoseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a student submits for a prognosis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrognoseSubmission {
    pub profile_id: String,
    pub core_subjects: CoreSubjects,
    pub exam_subjects: Vec<ExamSubject>,
    #[serde(default)]
    pub additional_subjects: Vec<AdditionalSubject>,
    #[serde(default)]
    pub grades: GradePool,
    #[serde(default)]
    pub exam_results: ExamResultPool,
}
