//! Static reference data: profiles, subject taxonomy, and grading tables
//! per the Gymnasium Blankenese Wegweiser and the Hamburg APO-AH.

mod grading;
mod profiles;
mod subjects;

pub use grading::{final_grade_for, points_for_grade, GradeBand, POINTS_TO_GRADE};
pub use profiles::{Profile, ProfileCatalog, ProfileSubject, Requirement};
pub use subjects::{
    aufgabenfeld_for, core_subject_options, elective_subjects, is_artistic_requirement,
    is_music_practical, Aufgabenfeld, Level, CORE_SUBJECTS,
};
