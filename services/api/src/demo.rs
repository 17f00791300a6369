use crate::infra::InMemoryPrognoseRepository;
use abirechner::catalog::{Level, ProfileCatalog};
use abirechner::error::AppError;
use abirechner::import::GradeSheetImporter;
use abirechner::prognose::domain::{
    AdditionalSubject, CoreSubjects, ExamResult, ExamResultPool, ExamSubject, ExamType, GradePool,
    OralFormat, PrognoseSubmission, Semester, SemesterGrade,
};
use abirechner::prognose::{
    calculate_abitur_prognose, check_subject_coverage, validate_exam_subjects, ClassifiedGrade,
    CoverageReport, PrognoseRepository, PrognoseService, QualificationResult,
};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_PROFILE_ID: &str = "humanities";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional grade sheet CSV replacing the sample marks.
    #[arg(long)]
    pub(crate) grades_csv: Option<PathBuf>,
    /// Include the full listing of selected and unselected marks.
    #[arg(long)]
    pub(crate) include_grades: bool,
    /// Skip the submission portion of the demo.
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GradeImportArgs {
    /// Grade sheet CSV with one row per subject and one column per semester
    #[arg(long)]
    pub(crate) file: PathBuf,
}

pub(crate) fn run_grade_import(args: GradeImportArgs) -> Result<(), AppError> {
    let GradeImportArgs { file } = args;

    let grades = GradeSheetImporter::from_path(&file)?;
    println!("Imported grade sheet {}", file.display());
    render_grade_pool(&grades);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        grades_csv,
        include_grades,
        skip_submission,
    } = args;

    let today = Local::now().date_naive();
    println!("Abitur prognosis demo (evaluated {today})");

    let catalog = ProfileCatalog::standard();
    let Some(profile) = catalog.by_id(DEMO_PROFILE_ID) else {
        println!("  Profile '{DEMO_PROFILE_ID}' missing from the catalog");
        return Ok(());
    };
    println!("Profile: {} ({})", profile.name, profile.id);

    let (grades, imported) = load_grade_pool_from_path(grades_csv)?;
    if imported {
        println!("Data source: grade sheet CSV import");
    } else {
        println!("Data source: sample marks (S4 predicted)");
    }

    let cores = demo_core_subjects();
    let exams = demo_exam_subjects();
    let additional = demo_additional_subjects();

    println!(
        "\nKernfächer: {} (eA), {} (eA), {} (gA)",
        cores.core_ea1, cores.core_ea2, cores.core_ga
    );
    let core_findings = cores.validate(profile);
    if core_findings.is_empty() {
        println!("- assignment permitted for this profile");
    } else {
        for finding in &core_findings {
            println!("- {finding}");
        }
    }

    println!("\nPrüfungsfächer");
    for exam in &exams {
        match exam.format {
            Some(format) => println!(
                "- PF{}: {} ({}, {}, {})",
                exam.position,
                exam.name,
                exam.level.label(),
                exam.exam_type.label(),
                format.label()
            ),
            None => println!(
                "- PF{}: {} ({}, {})",
                exam.position,
                exam.name,
                exam.level.label(),
                exam.exam_type.label()
            ),
        }
    }

    let validation = validate_exam_subjects(&exams, profile, &cores);
    if validation.valid {
        println!("Selection check: gültig");
    } else {
        println!("Selection check: ungültig");
        for error in &validation.errors {
            println!("  - {error}");
        }
    }
    for warning in &validation.warnings {
        println!("  ! {warning}");
    }

    let coverage = check_subject_coverage(profile, &cores, &additional);
    render_coverage(&coverage);

    let exam_results = demo_exam_results(&exams);
    let prognosis = calculate_abitur_prognose(&grades, &exams, &exam_results, &cores, profile);
    render_prognosis(&prognosis, include_grades);

    if skip_submission {
        return Ok(());
    }

    println!("\nSubmission demo");
    let repository = Arc::new(InMemoryPrognoseRepository::default());
    let service = Arc::new(PrognoseService::new(repository.clone()));

    let submission = PrognoseSubmission {
        profile_id: profile.id.to_string(),
        core_subjects: cores,
        exam_subjects: exams,
        additional_subjects: additional,
        grades,
        exam_results,
    };
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Stored prognosis {} -> {} Punkte, bestanden: {}",
        record.prognose_id,
        record.result.total_points,
        if record.result.passed { "ja" } else { "nein" }
    );

    let stored = match repository.fetch(&record.prognose_id) {
        Ok(Some(record)) => record,
        Ok(None) => {
            println!("  Repository lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Repository unavailable: {}", err);
            return Ok(());
        }
    };
    match serde_json::to_string_pretty(&stored.overview()) {
        Ok(json) => println!("  Overview payload:\n{}", json),
        Err(err) => println!("  Overview payload unavailable: {}", err),
    }

    Ok(())
}

fn load_grade_pool_from_path(grades_csv: Option<PathBuf>) -> Result<(GradePool, bool), AppError> {
    match grades_csv {
        Some(path) => GradeSheetImporter::from_path(path)
            .map(|grades| (grades, true))
            .map_err(AppError::from),
        None => Ok((demo_grade_pool(), false)),
    }
}

fn render_grade_pool(grades: &GradePool) {
    if grades.is_empty() {
        println!("No marks recorded in the sheet");
        return;
    }

    let header: Vec<&str> = Semester::ALL.iter().map(Semester::label).collect();
    println!("Recorded marks ({})", header.join(" | "));
    for (subject, marks) in grades.iter() {
        let cells: Vec<String> = Semester::ALL
            .iter()
            .map(|semester| mark_cell(marks.get(semester)))
            .collect();
        println!("- {}: {}", subject, cells.join(" | "));
    }
}

fn mark_cell(mark: Option<&SemesterGrade>) -> String {
    match mark {
        Some(mark) => match (mark.points, mark.is_prediction) {
            (Some(points), true) => format!("{points}?"),
            (Some(points), false) => points.to_string(),
            (None, _) => "-".to_string(),
        },
        None => "-".to_string(),
    }
}

fn render_coverage(report: &CoverageReport) {
    println!("\nBelegverpflichtungen");
    for semester in &report.semesters {
        let met = semester
            .requirements
            .iter()
            .filter(|requirement| requirement.met)
            .count();
        println!(
            "- {}: {}/{} obligations met",
            semester.label,
            met,
            semester.requirements.len()
        );
    }
    if let Some(first) = report.semesters.first() {
        for requirement in first.requirements.iter().filter(|requirement| !requirement.met) {
            println!("  - fehlt: {}", requirement.label);
        }
    }
    println!("{}", report.summary);
}

fn render_prognosis(result: &QualificationResult, include_grades: bool) {
    let block_one = &result.block_one;
    println!("\nBlock I (Semesterleistungen)");
    println!(
        "- E = {} Punkte (P {} / S {}, {} Noten eingebracht)",
        block_one.total_e, block_one.total_p, block_one.total_s, block_one.grade_count
    );
    println!(
        "- {} Noten unter 5 Punkten ({}%)",
        block_one.grades_under_5, block_one.percent_under_5
    );
    for warning in &block_one.warnings {
        println!("  ! {warning}");
    }
    for error in &block_one.errors {
        println!("  - {error}");
    }

    let block_two = &result.block_two;
    println!("\nBlock II (Prüfungen)");
    for exam in &block_two.exam_details {
        let marker = if exam.is_prediction { " (Prognose)" } else { "" };
        println!(
            "- {} ({}): {} x 5 = {} Punkte{}",
            exam.subject,
            exam.exam_type.label(),
            exam.points,
            exam.weighted_points,
            marker
        );
    }
    println!("- E = {} Punkte", block_two.total_e);
    for warning in &block_two.warnings {
        println!("  ! {warning}");
    }
    for error in &block_two.errors {
        println!("  - {error}");
    }

    println!("\nGesamtqualifikation");
    println!(
        "- {} von {} Punkten",
        result.total_points, result.max_possible
    );
    match result.final_grade {
        Some(grade) => println!("- Durchschnittsnote {grade:.1}"),
        None => println!("- Durchschnittsnote: unter der Bestehensgrenze"),
    }
    println!("- Bestanden: {}", if result.passed { "ja" } else { "nein" });

    if include_grades {
        println!("\nEingebrachte Noten");
        for grade in &block_one.selected_grades {
            println!("- {}", grade_line(grade));
        }
        if !block_one.not_selected_grades.is_empty() {
            println!("\nNicht eingebrachte Noten");
            for grade in &block_one.not_selected_grades {
                println!("- {}", grade_line(grade));
            }
        }
    }
}

fn grade_line(grade: &ClassifiedGrade) -> String {
    let mut line = format!(
        "{} {}: {} Punkte",
        grade.display_name,
        grade.semester.label(),
        grade.points
    );
    if grade.is_double {
        line.push_str(" (x2)");
    }
    if grade.is_prediction {
        line.push_str(" (Prognose)");
    }
    line
}

fn demo_core_subjects() -> CoreSubjects {
    CoreSubjects {
        core_ea1: "Mathematik".to_string(),
        core_ea2: "Englisch".to_string(),
        core_ga: "Deutsch".to_string(),
    }
}

fn demo_exam_subjects() -> Vec<ExamSubject> {
    vec![
        ExamSubject {
            position: 1,
            name: "Geschichte".to_string(),
            exam_type: ExamType::Schriftlich,
            level: Level::EA,
            format: None,
        },
        ExamSubject {
            position: 2,
            name: "Mathematik".to_string(),
            exam_type: ExamType::Schriftlich,
            level: Level::EA,
            format: None,
        },
        ExamSubject {
            position: 3,
            name: "Deutsch".to_string(),
            exam_type: ExamType::Schriftlich,
            level: Level::GA,
            format: None,
        },
        ExamSubject {
            position: 4,
            name: "PGW".to_string(),
            exam_type: ExamType::Muendlich,
            level: Level::GA,
            format: Some(OralFormat::Praesentation),
        },
    ]
}

fn demo_additional_subjects() -> Vec<AdditionalSubject> {
    ["Philosophie", "Biologie", "Sport"]
        .into_iter()
        .map(|name| AdditionalSubject {
            name: name.to_string(),
            level: Level::GA,
        })
        .collect()
}

fn demo_exam_results(exam_subjects: &[ExamSubject]) -> ExamResultPool {
    let mut results = ExamResultPool::new();
    for (exam, points) in exam_subjects.iter().zip([10, 11, 9, 10]) {
        results.insert(
            exam.name.clone(),
            ExamResult {
                points,
                is_prediction: true,
            },
        );
    }
    results
}

/// Sample marks for a humanities student: three recorded semesters plus a
/// predicted S4.
fn demo_grade_pool() -> GradePool {
    let mut pool = GradePool::new();
    record_year(&mut pool, "Mathematik", [11, 12, 11, 13]);
    record_year(&mut pool, "Englisch", [10, 11, 12, 11]);
    record_year(&mut pool, "Deutsch", [9, 10, 9, 11]);
    record_year(&mut pool, "Geschichte", [12, 13, 12, 14]);
    record_year(&mut pool, "PGW", [10, 11, 10, 12]);
    record_year(&mut pool, "Theater (englisch bilingual)", [12, 11, 13, 12]);
    record_year(&mut pool, "Philosophie", [8, 9, 8, 10]);
    record_year(&mut pool, "Biologie", [7, 8, 9, 8]);
    record_year(&mut pool, "Sport", [13, 14, 13, 14]);
    record_year(&mut pool, "Geographie", [9, 8, 9, 7]);
    record_year(&mut pool, "Informatik", [6, 7, 6, 8]);
    record_year(&mut pool, "Physik", [5, 6, 5, 7]);
    record_year(&mut pool, "Orchester", [14, 15, 14, 15]);
    pool
}

fn record_year(pool: &mut GradePool, subject: &str, points: [u8; 4]) {
    for (semester, value) in Semester::ALL.into_iter().zip(points) {
        pool.insert(
            subject,
            semester,
            SemesterGrade {
                points: Some(value),
                is_prediction: matches!(semester, Semester::S4),
                is_manual: false,
            },
        );
    }
}
