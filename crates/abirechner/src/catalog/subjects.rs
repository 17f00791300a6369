use serde::{Deserialize, Serialize};

/// Two-tier difficulty level for subjects in the Hamburg Oberstufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "eA")]
    EA,
    #[serde(rename = "gA")]
    GA,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::EA => "eA",
            Level::GA => "gA",
        }
    }
}

/// Curricular breadth areas an exam selection must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Aufgabenfeld {
    #[serde(rename = "sprachlich-künstlerisch")]
    SprachlichKuenstlerisch,
    #[serde(rename = "math-naturwiss")]
    MathNaturwiss,
    #[serde(rename = "gesellschaftswiss")]
    Gesellschaftswiss,
}

impl Aufgabenfeld {
    pub const ALL: [Aufgabenfeld; 3] = [
        Aufgabenfeld::SprachlichKuenstlerisch,
        Aufgabenfeld::MathNaturwiss,
        Aufgabenfeld::Gesellschaftswiss,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Aufgabenfeld::SprachlichKuenstlerisch => "sprachlich-künstlerisch",
            Aufgabenfeld::MathNaturwiss => "math-naturwiss",
            Aufgabenfeld::Gesellschaftswiss => "gesellschaftswiss",
        }
    }

    pub fn subjects(&self) -> &'static [&'static str] {
        match self {
            Aufgabenfeld::SprachlichKuenstlerisch => &[
                "Deutsch",
                "Englisch",
                "Französisch",
                "Spanisch",
                "Latein",
                "Bildende Kunst",
                "Musik",
                "Theater",
                "Orchester",
            ],
            Aufgabenfeld::MathNaturwiss => {
                &["Mathematik", "Physik", "Chemie", "Biologie", "Informatik"]
            }
            Aufgabenfeld::Gesellschaftswiss => &[
                "Religion",
                "Philosophie",
                "Geschichte",
                "Geographie",
                "PGW",
                "Wirtschaft",
                "Seminar",
            ],
        }
    }
}

/// Kernfächer shared by every profile.
pub const CORE_SUBJECTS: [&str; 3] = ["Deutsch", "Mathematik", "Englisch"];

/// Practical ensemble courses with a capped Block I inclusion.
const MUSIC_PRACTICAL_SUBJECTS: [&str; 4] = ["Orchester", "Chor", "Popchor", "Bigband"];

/// Subjects that can satisfy the four-semester artistic requirement.
const ARTISTIC_REQUIREMENT_SUBJECTS: [&str; 5] = [
    "Bildende Kunst",
    "Musik",
    "Theater",
    "Theater (englisch bilingual)",
    "Bildende Kunst oder Musik",
];

/// Kernfach choices offered for a profile. Kosmopolit students may swap
/// Englisch for a second Romance language.
pub fn core_subject_options(profile_id: &str) -> Vec<&'static str> {
    let mut options = CORE_SUBJECTS.to_vec();
    if profile_id == "kosmopolit" {
        options.extend(["Spanisch", "Französisch"]);
    }
    options
}

pub fn is_music_practical(subject: &str) -> bool {
    MUSIC_PRACTICAL_SUBJECTS.contains(&subject)
}

pub fn is_artistic_requirement(subject: &str) -> bool {
    ARTISTIC_REQUIREMENT_SUBJECTS.contains(&subject)
        || ARTISTIC_REQUIREMENT_SUBJECTS.contains(&normalize_artistic_name(subject))
}

fn normalize_artistic_name(name: &str) -> &str {
    match name {
        "Theater (englisch bilingual)" => "Theater",
        "Bildende Kunst oder Musik" => "Bildende Kunst",
        other => other,
    }
}

/// Resolves the Aufgabenfeld for a subject name. Compound names such as
/// "Spanisch oder Französisch" and bilingual course labels are resolved
/// through their alternatives; the first alternative with a known area wins.
pub fn aufgabenfeld_for(subject: &str) -> Option<Aufgabenfeld> {
    candidates(subject).into_iter().find_map(lookup_exact)
}

fn lookup_exact(name: &str) -> Option<Aufgabenfeld> {
    Aufgabenfeld::ALL
        .iter()
        .copied()
        .find(|area| area.subjects().contains(&name))
}

fn candidates(subject: &str) -> Vec<&str> {
    let trimmed = subject.trim();
    let mut names = vec![trimmed];

    if let Some(base) = trimmed.split(" (").next() {
        if base != trimmed {
            names.push(base.trim_end());
        }
    }

    for alternative in trimmed.split(" oder ") {
        let alternative = alternative.trim();
        if alternative != trimmed {
            names.push(alternative);
        }
    }

    names
}

/// All subjects a student can carry beyond profile and Kernfach allocations.
/// Sport is offered in the Wahlbereich although it belongs to no Aufgabenfeld.
pub fn elective_subjects() -> Vec<&'static str> {
    let mut subjects: Vec<&'static str> = Aufgabenfeld::ALL
        .iter()
        .flat_map(|area| area.subjects().iter().copied())
        .collect();
    subjects.push("Sport");
    subjects
}
