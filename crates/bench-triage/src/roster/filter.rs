use super::classify::AttendanceTier;
use super::domain::ConsultantRecord;
use serde::{Deserialize, Serialize};

/// Snapshot of the administrator's current query. An empty field places no
/// constraint on its dimension, so `FilterCriteria::default()` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub department: String,
    pub skill: String,
    pub resume_status: String,
    pub training_status: String,
    /// Bucket selector: `excellent`, `good`, `average` or `poor`.
    pub attendance_rate: String,
}

impl FilterCriteria {
    pub fn has_active_filters(&self) -> bool {
        [
            &self.search_term,
            &self.department,
            &self.skill,
            &self.resume_status,
            &self.training_status,
            &self.attendance_rate,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }

    /// True when `record` satisfies every non-empty criterion.
    pub fn matches(&self, record: &ConsultantRecord) -> bool {
        self.matches_search(record)
            && exact(&self.department, record.department.as_str())
            && exact(&self.skill, record.primary_skill.as_str())
            && exact(&self.resume_status, record.resume_status.as_str())
            && exact(&self.training_status, record.training_status.as_str())
            && self.matches_attendance(record.attendance_rate)
    }

    fn matches_search(&self, record: &ConsultantRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let needle = self.search_term.to_lowercase();
        [&record.name, &record.email, &record.id]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    // A selector outside the four bucket names can never be satisfied.
    fn matches_attendance(&self, rate: f64) -> bool {
        if self.attendance_rate.is_empty() {
            return true;
        }

        AttendanceTier::parse(&self.attendance_rate)
            .map(|bucket| AttendanceTier::from_rate(rate) == bucket)
            .unwrap_or(false)
    }
}

fn exact(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}

/// Returns the records matching `criteria`, preserving roster order.
pub fn apply(roster: &[ConsultantRecord], criteria: &FilterCriteria) -> Vec<ConsultantRecord> {
    roster
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

pub fn has_active_filters(criteria: &FilterCriteria) -> bool {
    criteria.has_active_filters()
}
