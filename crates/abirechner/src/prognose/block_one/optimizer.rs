use std::cmp::Ordering;
use std::collections::VecDeque;

use super::classify::ClassifiedGrade;

/// Weighted Block I score `E = P * 40 / S` where double-weighted grades
/// contribute twice to both the point sum `P` and the divisor `S`. An empty
/// selection scores zero.
pub fn weighted_score(selection: &[ClassifiedGrade]) -> f64 {
    let mut point_sum: u32 = 0;
    let mut divisor: u32 = 0;

    for grade in selection {
        let weight = if grade.is_double { 2 } else { 1 };
        point_sum += u32::from(grade.points) * weight;
        divisor += weight;
    }

    if divisor == 0 {
        return 0.0;
    }
    f64::from(point_sum * 40) / f64::from(divisor)
}

/// Descending by points; ties resolve by subject name, then semester, so a
/// run is reproducible regardless of input order.
fn by_points_desc(a: &ClassifiedGrade, b: &ClassifiedGrade) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.subject.cmp(&b.subject))
        .then_with(|| a.semester.cmp(&b.semester))
}

#[derive(Debug, Clone)]
pub struct OptimizedSelection {
    pub final_selection: Vec<ClassifiedGrade>,
    pub best_e: f64,
}

/// Greedy Block I selection. Mandatory grades are always included; the
/// selection is then filled to 32 grades from the best non-practical
/// electives, and extended up to 40 as long as each further grade strictly
/// improves `E`. At most 3 practical music grades may enter; a practical
/// blocked by the cap is skipped without ending the extension phase, while
/// the first non-improving candidate ends it.
///
/// The early stop makes the search deliberately non-exhaustive. A later
/// candidate could in rare distributions still improve `E`, but this mirrors
/// the published calculation scheme.
pub fn optimize(all_grades: &[ClassifiedGrade]) -> OptimizedSelection {
    let mandatory: Vec<ClassifiedGrade> = all_grades
        .iter()
        .filter(|grade| grade.is_mandatory)
        .cloned()
        .collect();
    let mut optional_non_practical: Vec<ClassifiedGrade> = all_grades
        .iter()
        .filter(|grade| !grade.is_mandatory && !grade.is_music_practical)
        .cloned()
        .collect();
    let mut optional_practical: Vec<ClassifiedGrade> = all_grades
        .iter()
        .filter(|grade| !grade.is_mandatory && grade.is_music_practical)
        .cloned()
        .collect();

    optional_non_practical.sort_by(by_points_desc);
    optional_practical.sort_by(by_points_desc);

    let mut current_selection = mandatory;
    let mut optional_non_practical: VecDeque<ClassifiedGrade> = optional_non_practical.into();

    while current_selection.len() < 32 {
        let Some(next) = optional_non_practical.pop_front() else {
            break;
        };
        current_selection.push(next);
    }

    let mut best_e = weighted_score(&current_selection);
    let mut final_selection = current_selection.clone();

    let mut combined: Vec<ClassifiedGrade> = optional_non_practical
        .into_iter()
        .chain(optional_practical)
        .collect();
    combined.sort_by(by_points_desc);
    let mut combined: VecDeque<ClassifiedGrade> = combined.into();

    let mut practical_count = current_selection
        .iter()
        .filter(|grade| grade.is_music_practical)
        .count();

    while current_selection.len() < 40 {
        let Some(next) = combined.pop_front() else {
            break;
        };
        if next.is_music_practical && practical_count >= 3 {
            continue;
        }

        let is_practical = next.is_music_practical;
        current_selection.push(next);
        let new_e = weighted_score(&current_selection);

        if new_e > best_e {
            best_e = new_e;
            final_selection = current_selection.clone();
            if is_practical {
                practical_count += 1;
            }
        } else {
            break;
        }
    }

    OptimizedSelection {
        final_selection,
        best_e,
    }
}
