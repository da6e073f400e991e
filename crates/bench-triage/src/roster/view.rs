use super::classify::{
    classify_attendance, classify_resume_status, classify_training_status, AttendanceTier,
    DisplayTier,
};
use super::domain::ConsultantRecord;
use super::filter::FilterCriteria;
use serde::Serialize;

/// A roster row annotated with its display tiers. Tiers are derived when the
/// view is built and are never stored back on the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedConsultant {
    #[serde(flatten)]
    pub record: ConsultantRecord,
    pub resume_tier: DisplayTier,
    pub training_tier: DisplayTier,
    pub attendance_tier: AttendanceTier,
}

impl ClassifiedConsultant {
    pub fn from_record(record: ConsultantRecord) -> Self {
        Self {
            resume_tier: classify_resume_status(&record.resume_status),
            training_tier: classify_training_status(&record.training_status),
            attendance_tier: classify_attendance(record.attendance_rate),
            record,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterView {
    pub total: usize,
    pub matched: usize,
    pub has_active_filters: bool,
    pub consultants: Vec<ClassifiedConsultant>,
}

/// Filters `roster` and badges every match, in roster order.
pub fn triage(roster: &[ConsultantRecord], criteria: &FilterCriteria) -> RosterView {
    let consultants: Vec<ClassifiedConsultant> = super::filter::apply(roster, criteria)
        .into_iter()
        .map(ClassifiedConsultant::from_record)
        .collect();

    RosterView {
        total: roster.len(),
        matched: consultants.len(),
        has_active_filters: criteria.has_active_filters(),
        consultants,
    }
}
