use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::catalog::points_for_grade;
use crate::prognose::domain::Semester;

use super::GradeImportError;

#[derive(Debug)]
pub(crate) struct SheetEntry {
    pub(crate) subject: String,
    pub(crate) semester: Semester,
    pub(crate) points: u8,
    pub(crate) is_prediction: bool,
}

/// Parses a grade sheet export with one row per subject and one column per
/// semester. Empty cells are skipped; point values may be given numerically
/// (0-15) or as German grade labels such as "2+", with a trailing `?` marking
/// the mark as a prediction.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SheetEntry>, GradeImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<SheetRow>() {
        let row = record?;
        let cells = [&row.s1, &row.s2, &row.s3, &row.s4];

        for (semester, cell) in Semester::ALL.into_iter().zip(cells) {
            let Some(raw) = cell.as_deref() else {
                continue;
            };
            let (points, is_prediction) =
                parse_cell(raw).ok_or_else(|| GradeImportError::InvalidPoints {
                    subject: row.subject.clone(),
                    semester: semester.label().to_string(),
                    value: raw.to_string(),
                })?;

            entries.push(SheetEntry {
                subject: row.subject.clone(),
                semester,
                points,
                is_prediction,
            });
        }
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Fach")]
    subject: String,
    #[serde(rename = "S1", default, deserialize_with = "empty_string_as_none")]
    s1: Option<String>,
    #[serde(rename = "S2", default, deserialize_with = "empty_string_as_none")]
    s2: Option<String>,
    #[serde(rename = "S3", default, deserialize_with = "empty_string_as_none")]
    s3: Option<String>,
    #[serde(rename = "S4", default, deserialize_with = "empty_string_as_none")]
    s4: Option<String>,
}

fn parse_cell(value: &str) -> Option<(u8, bool)> {
    let (base, is_prediction) = match value.strip_suffix('?') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (value, false),
    };
    parse_points(base).map(|points| (points, is_prediction))
}

fn parse_points(value: &str) -> Option<u8> {
    if let Ok(points) = value.parse::<u8>() {
        return (points <= 15).then_some(points);
    }
    points_for_grade(value)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
