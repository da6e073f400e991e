use super::steps::WorkflowStep;
use crate::roster::domain::{ConsultantRecord, ResumeStatus, TrainingStatus};

/// Attendance strictly above this rate counts as reported.
const ATTENDANCE_REPORTED_ABOVE: f64 = 80.0;

/// Readiness checklist shown on a consultant's own dashboard, in display order.
pub fn consultant_checklist(record: &ConsultantRecord) -> Vec<WorkflowStep> {
    vec![
        WorkflowStep {
            id: "resume".to_string(),
            label: "Resume Updated".to_string(),
            completed: record.resume_status == ResumeStatus::Updated,
            in_progress: record.resume_status == ResumeStatus::Pending,
        },
        WorkflowStep {
            id: "attendance".to_string(),
            label: "Attendance Reported".to_string(),
            completed: record.attendance_rate > ATTENDANCE_REPORTED_ABOVE,
            in_progress: false,
        },
        WorkflowStep {
            id: "opportunities".to_string(),
            label: "Opportunities Documented".to_string(),
            completed: record.opportunities_count > 0,
            in_progress: false,
        },
        WorkflowStep {
            id: "training".to_string(),
            label: "Training Completed".to_string(),
            completed: record.training_status == TrainingStatus::Completed,
            in_progress: record.training_status == TrainingStatus::InProgress,
        },
    ]
}
