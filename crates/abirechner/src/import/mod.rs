//! Import of semester grades from CSV grade sheet exports.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::prognose::domain::{GradePool, SemesterGrade};

#[derive(Debug, thiserror::Error)]
pub enum GradeImportError {
    #[error("failed to read grade sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid grade sheet data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid point value '{value}' for {subject} {semester}")]
    InvalidPoints {
        subject: String,
        semester: String,
        value: String,
    },
}

/// Reads grade sheets with the columns `Fach`, `S1`, `S2`, `S3`, and `S4`
/// into a [`GradePool`]. A cell holds a point value (`12`) or a grade label
/// (`2+`); a trailing `?` marks the mark as a prediction, an empty cell as
/// still outstanding.
pub struct GradeSheetImporter;

impl GradeSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<GradePool, GradeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<GradePool, GradeImportError> {
        let mut pool = GradePool::new();

        for entry in parser::parse_rows(reader)? {
            pool.insert(
                entry.subject,
                entry.semester,
                SemesterGrade {
                    points: Some(entry.points),
                    is_prediction: entry.is_prediction,
                    is_manual: false,
                },
            );
        }

        Ok(pool)
    }
}
