use bench_triage::roster::{
    apply, classify_attendance, classify_resume_status, classify_training_status, has_active_filters,
    to_csv, AttendanceTier, ConsultantRecord, Department, DisplayTier, FilterCriteria,
    PrimarySkill, ResumeStatus, RosterFormat, RosterImporter, TrainingStatus,
};
use bench_triage::workflow::{project, ConnectorState, StepVisualState, WorkflowStep};
use chrono::NaiveDate;
use std::io::Cursor;

fn consultant(
    id: &str,
    name: &str,
    department: Department,
    resume_status: ResumeStatus,
    attendance_rate: f64,
    training_status: TrainingStatus,
) -> ConsultantRecord {
    ConsultantRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!(
            "{}@bench.example.com",
            name.to_lowercase().replace(' ', ".")
        ),
        department,
        primary_skill: PrimarySkill::Backend,
        resume_status,
        attendance_rate,
        training_status,
        opportunities_count: 1,
        bench_start_date: NaiveDate::from_ymd_opt(2025, 8, 18).expect("valid bench date"),
    }
}

fn bench() -> Vec<ConsultantRecord> {
    vec![
        consultant(
            "C-100",
            "Alice Chen",
            Department::Development,
            ResumeStatus::Updated,
            96.0,
            TrainingStatus::Completed,
        ),
        consultant(
            "C-101",
            "Marcus Webb",
            Department::Qa,
            ResumeStatus::Pending,
            78.5,
            TrainingStatus::InProgress,
        ),
        consultant(
            "C-102",
            "Chen Li",
            Department::Development,
            ResumeStatus::Outdated,
            61.0,
            TrainingStatus::Overdue,
        ),
        consultant(
            "C-103",
            "Rosa Diaz",
            Department::Design,
            ResumeStatus::from("missing"),
            42.0,
            TrainingStatus::NotStarted,
        ),
    ]
}

fn ids(records: &[ConsultantRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[test]
fn neutral_criteria_returns_the_roster_unchanged() {
    let roster = bench();
    let criteria = FilterCriteria::default();

    assert!(!has_active_filters(&criteria));
    assert_eq!(apply(&roster, &criteria), roster);
}

#[test]
fn tightening_criteria_only_narrows_the_match() {
    let roster = bench();
    let loose = FilterCriteria {
        department: "development".to_string(),
        ..FilterCriteria::default()
    };
    let tight = FilterCriteria {
        search_term: "chen".to_string(),
        attendance_rate: "excellent".to_string(),
        ..loose.clone()
    };

    let loose_ids: Vec<String> = apply(&roster, &loose).into_iter().map(|r| r.id).collect();
    let tight_matches = apply(&roster, &tight);

    assert_eq!(loose_ids, vec!["C-100", "C-102"]);
    assert_eq!(ids(&tight_matches), vec!["C-100"]);
    assert!(tight_matches
        .iter()
        .all(|record| loose_ids.contains(&record.id)));
}

#[test]
fn search_is_case_insensitive_across_name_email_and_id() {
    let roster = bench();
    let search = |term: &str| {
        let criteria = FilterCriteria {
            search_term: term.to_string(),
            ..FilterCriteria::default()
        };
        apply(&roster, &criteria)
            .into_iter()
            .map(|record| record.id)
            .collect::<Vec<_>>()
    };

    assert_eq!(search("alice"), vec!["C-100"]);
    assert_eq!(search("CHEN"), vec!["C-100", "C-102"]);
    assert_eq!(search("marcus.webb@"), vec!["C-101"]);
    assert_eq!(search("c-103"), vec!["C-103"]);
    assert!(search("nobody").is_empty());
}

#[test]
fn combined_filters_use_logical_and() {
    let roster = bench();
    let criteria = FilterCriteria {
        department: "development".to_string(),
        resume_status: "outdated".to_string(),
        training_status: "overdue".to_string(),
        attendance_rate: "average".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&apply(&roster, &criteria)), vec!["C-102"]);

    let contradictory = FilterCriteria {
        training_status: "completed".to_string(),
        ..criteria
    };
    assert!(apply(&roster, &contradictory).is_empty());
}

#[test]
fn classifiers_badge_each_record() {
    let roster = bench();
    let badges: Vec<(DisplayTier, DisplayTier, AttendanceTier)> = roster
        .iter()
        .map(|record| {
            (
                classify_resume_status(&record.resume_status),
                classify_training_status(&record.training_status),
                classify_attendance(record.attendance_rate),
            )
        })
        .collect();

    assert_eq!(
        badges,
        vec![
            (DisplayTier::Positive, DisplayTier::Positive, AttendanceTier::Excellent),
            (
                DisplayTier::NeutralWarning,
                DisplayTier::Informational,
                AttendanceTier::Good
            ),
            (DisplayTier::Negative, DisplayTier::Negative, AttendanceTier::Average),
            (DisplayTier::Unknown, DisplayTier::Neutral, AttendanceTier::Poor),
        ]
    );
}

#[test]
fn attendance_boundary_values() {
    assert_eq!(classify_attendance(90.0), AttendanceTier::Excellent);
    assert_eq!(classify_attendance(89.9), AttendanceTier::Good);
    assert_eq!(classify_attendance(59.0), AttendanceTier::Poor);
}

#[test]
fn export_then_import_restores_the_filtered_subset() {
    let roster = bench();
    let criteria = FilterCriteria {
        department: "development".to_string(),
        ..FilterCriteria::default()
    };
    let subset = apply(&roster, &criteria);

    let csv = to_csv(&subset).expect("export succeeds");
    assert_eq!(csv.lines().count(), subset.len() + 1);

    let restored = RosterImporter::from_reader(Cursor::new(csv), RosterFormat::Csv)
        .expect("import succeeds");
    assert_eq!(restored, subset);
}

#[test]
fn empty_roster_exports_only_the_header() {
    let csv = to_csv(&[]).expect("export succeeds");
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("id,name,email,"));
}

#[test]
fn step_projection_follows_each_steps_own_flags() {
    let steps = vec![
        WorkflowStep {
            id: "uploaded".to_string(),
            label: "Resume uploaded".to_string(),
            completed: true,
            in_progress: true,
        },
        WorkflowStep {
            id: "reviewed".to_string(),
            label: "Reviewed".to_string(),
            completed: false,
            in_progress: false,
        },
        WorkflowStep {
            id: "approved".to_string(),
            label: "Approved".to_string(),
            completed: true,
            in_progress: false,
        },
    ];

    let projected = project(&steps);
    assert_eq!(projected.len(), 3);
    assert_eq!(projected[0].visual_state, StepVisualState::Completed);
    assert_eq!(projected[0].connector_state, Some(ConnectorState::Completed));
    assert_eq!(projected[1].visual_state, StepVisualState::Pending);
    assert_eq!(projected[1].connector_state, Some(ConnectorState::Pending));
    assert_eq!(projected[2].visual_state, StepVisualState::Completed);
    assert_eq!(projected[2].connector_state, None);
    assert_eq!(projected[2].step, steps[2]);
}

#[test]
fn bundled_sample_roster_loads_with_recognized_values() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/bench-roster.csv");
    let roster = RosterImporter::from_path(path).expect("sample roster loads");

    assert_eq!(roster.len(), 6);
    assert!(roster.iter().all(|record| record.department.is_recognized()
        && record.primary_skill.is_recognized()
        && record.resume_status.is_recognized()
        && record.training_status.is_recognized()));

    let excellent = FilterCriteria {
        attendance_rate: "excellent".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&apply(&roster, &excellent)), vec!["C-100", "C-104"]);
}
