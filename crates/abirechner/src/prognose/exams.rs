use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{aufgabenfeld_for, Level, Profile};

use super::domain::{CoreSubjects, ExamSubject, ExamType};

/// Outcome of checking an exam selection against the Hamburg rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks the four chosen exam subjects against the structural rules of the
/// APO-AH. All violated rules are reported, except that a wrong subject
/// count short-circuits the remaining checks.
pub fn validate_exam_subjects(
    exam_subjects: &[ExamSubject],
    profile: &Profile,
    cores: &CoreSubjects,
) -> ExamValidation {
    let mut errors = Vec::new();

    if exam_subjects.len() != 4 {
        errors.push("Es müssen genau 4 Prüfungsfächer gewählt werden.".to_string());
        return ExamValidation {
            valid: false,
            errors,
            warnings: Vec::new(),
        };
    }

    let has_profilgebend = exam_subjects.iter().any(|exam| {
        profile
            .profilgebend
            .iter()
            .any(|subject| subject.name == exam.name)
    });
    if !has_profilgebend {
        errors.push(
            "Mindestens ein profilgebendes Fach muss als Prüfungsfach gewählt werden.".to_string(),
        );
    }

    let core_exam_count = exam_subjects
        .iter()
        .filter(|exam| cores.contains(&exam.name))
        .count();
    if core_exam_count < 2 {
        errors.push("Mindestens zwei Kernfächer müssen Prüfungsfächer sein.".to_string());
    }

    let has_written_ea_core = exam_subjects
        .iter()
        .any(|exam| cores.is_ea(&exam.name) && exam.exam_type == ExamType::Schriftlich);
    if !has_written_ea_core {
        errors.push(
            "Mindestens ein Kernfach auf erhöhtem Niveau muss schriftlich geprüft werden."
                .to_string(),
        );
    }

    let written_ea_count = exam_subjects
        .iter()
        .filter(|exam| exam.exam_type == ExamType::Schriftlich && exam.level == Level::EA)
        .count();
    if written_ea_count < 2 {
        errors.push(
            "Mindestens zwei schriftlich geprüfte Fächer müssen auf erhöhtem Niveau sein."
                .to_string(),
        );
    }

    let covered: BTreeSet<_> = exam_subjects
        .iter()
        .filter_map(|exam| aufgabenfeld_for(&exam.name))
        .collect();
    if covered.len() < 3 {
        errors.push(
            "Alle drei Aufgabenfelder müssen durch mindestens ein Prüfungsfach abgedeckt sein."
                .to_string(),
        );
    }

    ExamValidation {
        valid: errors.is_empty(),
        errors,
        warnings: Vec::new(),
    }
}

/// One sanctioned exam subject combination from the Wegweiser.
#[derive(Debug, Clone, Serialize)]
pub struct ExamVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub subjects: [&'static str; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_subject_constraint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// The sanctioned exam combinations for a profile. Unknown profiles have
/// no published variants.
pub fn exam_variants(profile_id: &str) -> Vec<ExamVariant> {
    match profile_id {
        "humanities" => vec![
            ExamVariant {
                id: "var1",
                name: "Variante I",
                subjects: ["Geschichte", "Englisch", "Deutsch", "NatWi/Info/Math"],
                description: Some(
                    "Geschichte + Englisch + Deutsch + Naturwissenschaft/Informatik/Mathematik",
                ),
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var2",
                name: "Variante II",
                subjects: ["Geschichte", "Englisch/Deutsch", "Mathematik", "Frei"],
                description: Some("Geschichte + Englisch oder Deutsch + Mathematik + Fach nach Wahl"),
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var3",
                name: "Variante III",
                subjects: ["PGW", "Englisch", "Deutsch", "NatWi/Info/Math"],
                description: Some(
                    "PGW + Englisch + Deutsch + Naturwissenschaft/Informatik/Mathematik",
                ),
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var4",
                name: "Variante IV",
                subjects: ["PGW", "Englisch/Deutsch", "Mathematik", "Frei"],
                description: Some("PGW + Englisch oder Deutsch + Mathematik + Fach nach Wahl"),
                core_subject_constraint: None,
                note: None,
            },
        ],
        "kosmopolit" => vec![
            ExamVariant {
                id: "var1",
                name: "Variante I (Kernfach Englisch)",
                subjects: ["PGW", "Englisch/Deutsch", "Mathematik", "Frei"],
                description: None,
                core_subject_constraint: Some("Englisch"),
                note: None,
            },
            ExamVariant {
                id: "var2",
                name: "Variante II (Kernfach Englisch)",
                subjects: ["PGW", "Englisch", "Deutsch", "NatWi/Info/Math"],
                description: None,
                core_subject_constraint: Some("Englisch"),
                note: None,
            },
            ExamVariant {
                id: "var3",
                name: "Variante III (Kernfach Englisch)",
                subjects: ["Spanisch/Französisch", "Englisch/Deutsch", "Mathematik", "GeWi"],
                description: None,
                core_subject_constraint: Some("Englisch"),
                note: None,
            },
            ExamVariant {
                id: "var4",
                name: "Variante IV (Kernfach Spa/Fra)",
                subjects: ["PGW", "Spanisch/Französisch/Deutsch", "Mathematik", "Frei"],
                description: None,
                core_subject_constraint: Some("Spanisch|Französisch"),
                note: None,
            },
            ExamVariant {
                id: "var5",
                name: "Variante V (Kernfach Spa/Fra)",
                subjects: ["PGW", "Spanisch/Französisch", "Deutsch", "NatWi/Info/Math"],
                description: None,
                core_subject_constraint: Some("Spanisch|Französisch"),
                note: None,
            },
        ],
        "kultur" => vec![
            ExamVariant {
                id: "var1",
                name: "Variante I",
                subjects: ["BKu/Musik", "Englisch/Deutsch", "Mathematik", "GeWi"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var2",
                name: "Variante II",
                subjects: ["Geschichte", "Englisch", "Deutsch", "NatWi/Info/Math"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var3",
                name: "Variante III",
                subjects: ["Geschichte", "Englisch/Deutsch", "Mathematik", "Frei"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
        ],
        "netzwerk-erde" => vec![
            ExamVariant {
                id: "var1",
                name: "Variante I",
                subjects: ["Geographie", "Englisch", "Deutsch", "NatWi/Info/Math"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var2",
                name: "Variante II",
                subjects: ["Geographie", "Englisch/Deutsch", "Mathematik", "Frei"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var3",
                name: "Variante III",
                subjects: ["Biologie", "Zwei von D/E/M", "Zwei von D/E/M", "GeWi"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
        ],
        "wissenschaft-bewegung" => vec![
            ExamVariant {
                id: "var1",
                name: "Variante I",
                subjects: ["Chemie", "Zwei von D/E/M", "Zwei von D/E/M", "GeWi"],
                description: None,
                core_subject_constraint: None,
                note: None,
            },
            ExamVariant {
                id: "var2",
                name: "Variante II",
                subjects: ["Sport", "Deutsch/Englisch", "Mathematik", "GeWi"],
                description: None,
                core_subject_constraint: None,
                note: Some(
                    "Nur möglich wenn Mathematik eA belegt und als schriftliches Prüfungsfach gewählt",
                ),
            },
        ],
        _ => Vec::new(),
    }
}
