/// One row of the Hamburg conversion table from total points to the final
/// Abitur grade.
#[derive(Debug, Clone, Copy)]
pub struct GradeBand {
    pub min: u16,
    pub max: u16,
    pub grade: f32,
}

/// Conversion table per the Hamburg APO-AH appendix. Covers 300 up to the
/// theoretical maximum of 900 points.
pub const POINTS_TO_GRADE: [GradeBand; 31] = [
    GradeBand { min: 823, max: 900, grade: 1.0 },
    GradeBand { min: 805, max: 822, grade: 1.1 },
    GradeBand { min: 787, max: 804, grade: 1.2 },
    GradeBand { min: 769, max: 786, grade: 1.3 },
    GradeBand { min: 751, max: 768, grade: 1.4 },
    GradeBand { min: 733, max: 750, grade: 1.5 },
    GradeBand { min: 715, max: 732, grade: 1.6 },
    GradeBand { min: 697, max: 714, grade: 1.7 },
    GradeBand { min: 679, max: 696, grade: 1.8 },
    GradeBand { min: 661, max: 678, grade: 1.9 },
    GradeBand { min: 643, max: 660, grade: 2.0 },
    GradeBand { min: 625, max: 642, grade: 2.1 },
    GradeBand { min: 607, max: 624, grade: 2.2 },
    GradeBand { min: 589, max: 606, grade: 2.3 },
    GradeBand { min: 571, max: 588, grade: 2.4 },
    GradeBand { min: 553, max: 570, grade: 2.5 },
    GradeBand { min: 535, max: 552, grade: 2.6 },
    GradeBand { min: 517, max: 534, grade: 2.7 },
    GradeBand { min: 499, max: 516, grade: 2.8 },
    GradeBand { min: 481, max: 498, grade: 2.9 },
    GradeBand { min: 463, max: 480, grade: 3.0 },
    GradeBand { min: 445, max: 462, grade: 3.1 },
    GradeBand { min: 427, max: 444, grade: 3.2 },
    GradeBand { min: 409, max: 426, grade: 3.3 },
    GradeBand { min: 391, max: 408, grade: 3.4 },
    GradeBand { min: 373, max: 390, grade: 3.5 },
    GradeBand { min: 355, max: 372, grade: 3.6 },
    GradeBand { min: 337, max: 354, grade: 3.7 },
    GradeBand { min: 319, max: 336, grade: 3.8 },
    GradeBand { min: 301, max: 318, grade: 3.9 },
    GradeBand { min: 300, max: 300, grade: 4.0 },
];

/// Final grade for a Gesamtqualifikation total, or `None` below the passing
/// threshold of 300 points.
pub fn final_grade_for(total_points: u16) -> Option<f32> {
    POINTS_TO_GRADE
        .iter()
        .find(|band| total_points >= band.min && total_points <= band.max)
        .map(|band| band.grade)
}

/// Point value for a German school grade label such as "2+" or "4-".
pub fn points_for_grade(label: &str) -> Option<u8> {
    let points = match label {
        "1+" => 15,
        "1" => 14,
        "1-" => 13,
        "2+" => 12,
        "2" => 11,
        "2-" => 10,
        "3+" => 9,
        "3" => 8,
        "3-" => 7,
        "4+" => 6,
        "4" => 5,
        "4-" => 4,
        "5+" => 3,
        "5" => 2,
        "5-" => 1,
        "6" => 0,
        _ => return None,
    };
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_boundary_totals() {
        assert_eq!(final_grade_for(900), Some(1.0));
        assert_eq!(final_grade_for(823), Some(1.0));
        assert_eq!(final_grade_for(822), Some(1.1));
        assert_eq!(final_grade_for(300), Some(4.0));
        assert_eq!(final_grade_for(299), None);
        assert_eq!(final_grade_for(0), None);
    }

    #[test]
    fn every_passing_total_has_exactly_one_band() {
        for total in 300..=900u16 {
            let matches = POINTS_TO_GRADE
                .iter()
                .filter(|band| total >= band.min && total <= band.max)
                .count();
            assert_eq!(matches, 1, "total {total} matched {matches} bands");
        }
    }

    #[test]
    fn converts_grade_labels() {
        assert_eq!(points_for_grade("1+"), Some(15));
        assert_eq!(points_for_grade("4"), Some(5));
        assert_eq!(points_for_grade("6"), Some(0));
        assert_eq!(points_for_grade("7"), None);
        assert_eq!(points_for_grade(""), None);
    }
}
